//! Pipeline assembly and orchestration

use crate::config::{CleanConfig, ReflowMode};
use crate::error::Result;
use crate::profile::{self, LanguageProfile};
use crate::stages::{
    BreakPolicy, CountReflower, LengthReflower, LineSegmenter, NoiseStripper,
    PunctuationNormalizer, Segment,
};
use std::sync::Arc;

/// The assembled cleaning pipeline
///
/// Holds the resolved language profile and reflow configuration; carries no
/// state between calls. `clean` is a pure function of its input, so one
/// cleaner may serve concurrent callers without coordination.
pub struct TextCleaner {
    profile: Arc<LanguageProfile>,
    mode: ReflowMode,
    segmenter: Option<Arc<dyn Segment>>,
}

impl TextCleaner {
    /// Build a pipeline from a validated configuration
    pub fn new(config: CleanConfig) -> Result<Self> {
        config.validate()?;
        let profile = profile::get_profile(&config.language)?;

        Ok(Self {
            profile,
            mode: config.mode,
            segmenter: None,
        })
    }

    /// Build a pipeline with default settings for a language
    pub fn with_language(lang_code: &str) -> Result<Self> {
        Self::new(CleanConfig {
            language: lang_code.to_string(),
            ..CleanConfig::default()
        })
    }

    /// Replace the default line segmenter with an alternate strategy
    ///
    /// The replacement receives noise-stripped text that has not been
    /// punctuation-normalized, and must uphold the `Segment` contract.
    pub fn with_segmenter(mut self, segmenter: Arc<dyn Segment>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    /// The language code this pipeline was built for
    pub fn language(&self) -> &str {
        &self.profile.metadata.code
    }

    /// Run the full pipeline over raw transcript text
    ///
    /// Total over any input; empty or whitespace-only input yields an empty
    /// string without running the later stages.
    pub fn clean(&self, raw: &str) -> String {
        let stripped = NoiseStripper::new(self.profile.clone()).strip(raw);
        if stripped.is_empty() {
            return String::new();
        }

        match self.mode {
            ReflowMode::Count {
                units_per_paragraph,
            } => {
                let units = match &self.segmenter {
                    Some(segmenter) => segmenter.segment(&stripped),
                    None => {
                        let normalized =
                            PunctuationNormalizer::new(self.profile.clone(), BreakPolicy::Terminal)
                                .normalize(&stripped);
                        LineSegmenter.segment(&normalized)
                    }
                };
                log::debug!("segmented into {} units", units.len());
                CountReflower::new(units_per_paragraph).reflow(&units)
            }
            ReflowMode::Length { target_chars } => {
                let normalized =
                    PunctuationNormalizer::new(self.profile.clone(), BreakPolicy::Pause)
                        .normalize(&stripped);
                LengthReflower::new(self.profile.clone(), target_chars).reflow(&normalized)
            }
        }
    }
}
