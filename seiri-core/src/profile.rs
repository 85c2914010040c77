//! Language profiles and the embedded profile loader
//!
//! A profile describes the punctuation inventory and filler lexicon of one
//! language. Built-in profiles are embedded as TOML and parsed once on first
//! access; the resulting table is read-only and shared across threads.

use crate::error::{CleanError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Embedded language profiles, initialized at most once process-wide
static PROFILES: OnceLock<HashMap<String, Arc<LanguageProfile>>> = OnceLock::new();

/// Punctuation and lexicon data for one language
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageProfile {
    /// Profile identification
    pub metadata: ProfileMetadata,
    /// Punctuation inventory
    pub punctuation: PunctuationSet,
    /// Filler lexicon
    pub fillers: FillerLexicon,
}

/// Profile identification
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileMetadata {
    /// Short language code, e.g. "zh"
    pub code: String,
    /// Human-readable language name
    pub name: String,
}

/// Punctuation inventory of a language
#[derive(Debug, Clone, Deserialize)]
pub struct PunctuationSet {
    /// Sentence-ending marks
    pub terminal: Vec<char>,
    /// Mid-sentence pause mark standing in for a breath
    pub pause: char,
    /// Mark appended to lines and paragraphs that lack terminal punctuation
    pub full_stop: char,
    /// Marks treated as already-terminal at a paragraph end
    #[serde(default)]
    pub closing: Vec<char>,
}

/// Ordered set of hesitation and discourse tokens removed during cleaning
#[derive(Debug, Clone, Deserialize)]
pub struct FillerLexicon {
    /// Tokens in match-priority order
    pub words: Vec<String>,
    /// Whether matching respects letter case
    #[serde(default)]
    pub case_sensitive: bool,
}

impl LanguageProfile {
    /// Whether `ch` is a sentence-ending mark
    pub fn is_terminal(&self, ch: char) -> bool {
        self.punctuation.terminal.contains(&ch)
    }

    /// Whether `ch` is the pause mark
    pub fn is_pause(&self, ch: char) -> bool {
        ch == self.punctuation.pause
    }

    /// Whether `ch` closes a quotation or bracket
    pub fn is_closing(&self, ch: char) -> bool {
        self.punctuation.closing.contains(&ch)
    }
}

fn profiles() -> &'static HashMap<String, Arc<LanguageProfile>> {
    PROFILES.get_or_init(|| {
        let mut map = HashMap::new();

        for (code, raw) in [
            ("zh", include_str!("../configs/languages/chinese.toml")),
            ("ja", include_str!("../configs/languages/japanese.toml")),
            ("en", include_str!("../configs/languages/english.toml")),
        ] {
            match parse_profile(code, raw) {
                Ok(profile) => {
                    let name = profile.metadata.name.to_lowercase();
                    map.insert(code.to_string(), profile.clone());
                    map.insert(name, profile);
                }
                Err(e) => {
                    log::warn!("failed to load embedded profile '{code}': {e}");
                }
            }
        }

        map
    })
}

/// Load a language profile by code or lowercase name
pub fn get_profile(code: &str) -> Result<Arc<LanguageProfile>> {
    profiles()
        .get(code)
        .cloned()
        .ok_or_else(|| CleanError::UnsupportedLanguage {
            code: code.to_string(),
        })
}

/// Language codes of the embedded profiles
pub fn available_languages() -> Vec<String> {
    let mut codes: Vec<String> = profiles()
        .iter()
        .filter(|(key, profile)| *key == &profile.metadata.code)
        .map(|(key, _)| key.clone())
        .collect();
    codes.sort();
    codes
}

fn parse_profile(code: &str, raw: &str) -> Result<Arc<LanguageProfile>> {
    let profile: LanguageProfile = toml::from_str(raw)
        .map_err(|e| CleanError::Profile(format!("failed to parse '{code}' profile: {e}")))?;
    Ok(Arc::new(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profiles_load() {
        for code in ["zh", "ja", "en"] {
            let profile = get_profile(code).unwrap();
            assert_eq!(profile.metadata.code, code);
            assert!(!profile.punctuation.terminal.is_empty());
            assert!(!profile.fillers.words.is_empty());
        }
    }

    #[test]
    fn test_profile_lookup_by_name() {
        let profile = get_profile("chinese").unwrap();
        assert_eq!(profile.metadata.code, "zh");
    }

    #[test]
    fn test_unknown_language() {
        let err = get_profile("xx").unwrap_err();
        assert!(matches!(err, CleanError::UnsupportedLanguage { .. }));
    }

    #[test]
    fn test_chinese_punctuation() {
        let profile = get_profile("zh").unwrap();
        assert!(profile.is_terminal('。'));
        assert!(profile.is_terminal('？'));
        assert!(profile.is_terminal('?'));
        assert!(profile.is_pause('，'));
        assert!(profile.is_closing('」'));
        assert!(!profile.is_terminal('，'));
    }

    #[test]
    fn test_available_languages() {
        let codes = available_languages();
        assert!(codes.contains(&"zh".to_string()));
        assert!(codes.contains(&"ja".to_string()));
        assert!(codes.contains(&"en".to_string()));
    }

    #[test]
    fn test_shared_instances() {
        let first = get_profile("zh").unwrap();
        let second = get_profile("zh").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
