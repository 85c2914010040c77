//! Punctuation normalization stage
//!
//! Raw transcripts carry meaning in their line breaks: one thought per line,
//! a lone newline for a breath, a blank line for a new topic. This stage
//! turns those breaks into punctuation so later stages can work on text
//! alone.

use crate::profile::LanguageProfile;
use crate::stages::PARAGRAPH_SENTINEL;
use std::sync::Arc;

/// Line-break handling policy
///
/// Exactly one policy is active per pipeline; they are never combined on the
/// same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakPolicy {
    /// End-of-line is a sentence boundary
    Terminal,
    /// A lone newline is a breath pause; a blank line is a paragraph break
    Pause,
}

/// Stage 2: converts line breaks into punctuation
#[derive(Debug, Clone)]
pub struct PunctuationNormalizer {
    profile: Arc<LanguageProfile>,
    policy: BreakPolicy,
}

impl PunctuationNormalizer {
    /// Create a normalizer with the given policy
    pub fn new(profile: Arc<LanguageProfile>, policy: BreakPolicy) -> Self {
        Self { profile, policy }
    }

    /// Normalize line breaks into punctuation
    pub fn normalize(&self, text: &str) -> String {
        match self.policy {
            BreakPolicy::Terminal => self.terminate_lines(text),
            BreakPolicy::Pause => self.substitute_pauses(text),
        }
    }

    /// Terminal policy: every non-empty line ends in a terminal mark, and so
    /// does the text as a whole
    fn terminate_lines(&self, text: &str) -> String {
        let full_stop = self.profile.punctuation.full_stop;

        let lines: Vec<String> = text
            .split('\n')
            .map(|line| {
                let line = line.trim_end();
                match line.chars().last() {
                    None => String::new(),
                    Some(last) if self.profile.is_terminal(last) => line.to_string(),
                    Some(_) => format!("{line}{full_stop}"),
                }
            })
            .collect();

        let mut out = lines.join("\n");
        let trailing_ok = out
            .trim_end()
            .chars()
            .last()
            .map_or(true, |c| self.profile.is_terminal(c));
        if !trailing_ok {
            out = format!("{}{full_stop}", out.trim_end());
        }
        out
    }

    /// Pause policy: blank lines become paragraph sentinels, lone newlines
    /// become the pause mark, then redundant punctuation collapses
    fn substitute_pauses(&self, text: &str) -> String {
        let pause = self.profile.punctuation.pause;

        let mut marked = String::with_capacity(text.len());
        let mut newlines = 0usize;
        for ch in text.chars() {
            if ch == '\n' {
                newlines += 1;
                continue;
            }
            if newlines == 1 {
                marked.push(pause);
            } else if newlines >= 2 {
                marked.push(PARAGRAPH_SENTINEL);
            }
            newlines = 0;
            marked.push(ch);
        }

        let mut out = String::with_capacity(marked.len());
        for ch in marked.chars() {
            // A pause directly before a terminal mark is redundant
            if self.profile.is_terminal(ch) && out.ends_with(pause) {
                out.pop();
            }
            // Runs of one identical mark collapse to a single occurrence
            let is_mark = self.profile.is_terminal(ch) || ch == pause;
            if is_mark && out.ends_with(ch) {
                continue;
            }
            // No pause or space at the start of the text or of a paragraph
            let at_paragraph_start = out.is_empty() || out.ends_with(PARAGRAPH_SENTINEL);
            if (ch == pause || ch == ' ') && at_paragraph_start {
                continue;
            }
            out.push(ch);
        }
        out
    }
}
