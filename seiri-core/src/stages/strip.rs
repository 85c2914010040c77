//! Noise stripping stage
//!
//! Removes timestamp tokens and filler words, then collapses whitespace.
//! Anything that does not match a recognized token is left in place.

use crate::profile::LanguageProfile;
use crate::stages::PARAGRAPH_SENTINEL;
use regex::Regex;
use std::sync::{Arc, OnceLock};

/// Timestamp tokens like `44:12` or `[1:02:33]`, at word boundaries only
static TIMESTAMP: OnceLock<Regex> = OnceLock::new();

fn timestamp_pattern() -> &'static Regex {
    TIMESTAMP.get_or_init(|| {
        Regex::new(r"\[?\b\d{1,2}:\d{2}(?::\d{2})?\b\]?\s*").expect("timestamp pattern is valid")
    })
}

/// Stage 1: timestamp and filler removal plus whitespace cleanup
#[derive(Debug, Clone)]
pub struct NoiseStripper {
    profile: Arc<LanguageProfile>,
}

impl NoiseStripper {
    /// Create a stripper for a language profile
    pub fn new(profile: Arc<LanguageProfile>) -> Self {
        Self { profile }
    }

    /// Remove noise from raw transcript text
    ///
    /// Total over any input. Whitespace-only input collapses to an empty
    /// string, which short-circuits the rest of the pipeline.
    pub fn strip(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }

        let text: String = raw.chars().filter(|&c| c != PARAGRAPH_SENTINEL).collect();
        let text = timestamp_pattern().replace_all(&text, "");
        let text = self.remove_fillers(&text);
        collapse_whitespace(&text)
    }

    /// Remove every word-boundary occurrence of a lexicon token together
    /// with its trailing whitespace
    fn remove_fillers(&self, text: &str) -> String {
        let words = &self.profile.fillers.words;
        let case_sensitive = self.profile.fillers.case_sensitive;
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        'scan: while !rest.is_empty() {
            let left_bounded = out.chars().last().map_or(true, |c| !is_word_char(c));
            if left_bounded {
                for word in words {
                    if let Some(len) = match_token(rest, word, case_sensitive) {
                        let right_bounded =
                            rest[len..].chars().next().map_or(true, |c| !is_word_char(c));
                        if right_bounded {
                            rest = rest[len..].trim_start();
                            continue 'scan;
                        }
                    }
                }
            }
            let Some(ch) = rest.chars().next() else { break };
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }

        out
    }
}

/// Prefix-match a token, returning the matched byte length
fn match_token(text: &str, token: &str, case_sensitive: bool) -> Option<usize> {
    if case_sensitive {
        return text.starts_with(token).then_some(token.len());
    }

    let mut len = 0;
    let mut text_chars = text.chars();
    for expected in token.chars() {
        let actual = text_chars.next()?;
        if actual != expected && !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        len += actual.len_utf8();
    }
    Some(len)
}

/// Word characters for boundary purposes, matching `\w`
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Collapse horizontal whitespace runs to one space and trim each line
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        match ch {
            ' ' | '\t' | '\r' => pending_space = true,
            '\n' => {
                pending_space = false;
                out.push('\n');
            }
            _ => {
                if pending_space && !out.is_empty() && !out.ends_with('\n') {
                    out.push(' ');
                }
                pending_space = false;
                out.push(ch);
            }
        }
    }

    out.trim_matches(char::is_whitespace).to_string()
}
