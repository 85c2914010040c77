//! Transcript cleaning and re-paragraphing pipeline
//!
//! seiri-core turns loosely formatted transcript text (speech-to-text output
//! with timestamps, filler words, and arbitrary line breaks) into cleanly
//! punctuated, paragraph-structured text. Four stages run strictly forward:
//!
//! 1. Noise stripping — timestamps, fillers, whitespace
//! 2. Punctuation normalization — line breaks become punctuation
//! 3. Segmentation — sentence-like units
//! 4. Paragraph reflow — regrouping under a count or length target
//!
//! The pipeline is stateless across invocations; `clean` is a pure function
//! of its input and configuration.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod profile;
pub mod stages;

// Re-export key types
pub use config::{CleanConfig, CleanConfigBuilder, ReflowMode};
pub use error::{CleanError, Result};
pub use pipeline::TextCleaner;
pub use profile::{available_languages, LanguageProfile};
pub use stages::{LineSegmenter, RuleSegmenter, Segment};

/// Clean text with an explicit configuration
///
/// Validates the configuration and resolves the language profile before any
/// text is processed; the pipeline itself never fails.
pub fn clean_text(raw: &str, config: &CleanConfig) -> Result<String> {
    let cleaner = TextCleaner::new(config.clone())?;
    Ok(cleaner.clean(raw))
}

/// Clean text with the default configuration for a language
pub fn clean_text_with_language(raw: &str, lang_code: &str) -> Result<String> {
    let cleaner = TextCleaner::with_language(lang_code)?;
    Ok(cleaner.clean(raw))
}
