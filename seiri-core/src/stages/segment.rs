//! Sentence segmentation stage

use crate::error::Result;
use crate::profile::{self, LanguageProfile};
use std::sync::Arc;

/// Order-preserving splitter producing trimmed, non-empty units
///
/// Implementations must keep units in input order and never emit an empty
/// unit. The pipeline accepts any implementation as a drop-in replacement
/// for the default line splitter.
pub trait Segment: Send + Sync {
    /// Split text into sentence-like units
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Stage 3 default: one unit per punctuated line
///
/// Valid because the terminal policy guarantees every line already ends in
/// a terminal mark, so a line split is equivalent to a sentence split.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSegmenter;

impl Segment for LineSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Language-aware alternate splitter
///
/// Consumes noise-stripped text that has not been punctuation-normalized,
/// cutting after terminal marks and keeping closing quotes attached to the
/// preceding unit. Swappable for the default via the pipeline builder.
#[derive(Debug, Clone)]
pub struct RuleSegmenter {
    profile: Arc<LanguageProfile>,
}

impl RuleSegmenter {
    /// Create a segmenter sharing an already-resolved profile
    pub fn new(profile: Arc<LanguageProfile>) -> Self {
        Self { profile }
    }

    /// Create a segmenter for a language code
    pub fn for_language(code: &str) -> Result<Self> {
        Ok(Self::new(profile::get_profile(code)?))
    }
}

impl Segment for RuleSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut units = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == '\n' {
                flush(&mut units, &mut current);
                continue;
            }
            current.push(ch);
            if self.profile.is_terminal(ch) {
                while let Some(&next) = chars.peek() {
                    if !self.profile.is_closing(next) {
                        break;
                    }
                    current.push(next);
                    chars.next();
                }
                flush(&mut units, &mut current);
            }
        }
        flush(&mut units, &mut current);

        units
    }
}

fn flush(units: &mut Vec<String>, current: &mut String) {
    let unit = current.trim();
    if !unit.is_empty() {
        units.push(unit.to_string());
    }
    current.clear();
}
