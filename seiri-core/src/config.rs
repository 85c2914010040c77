//! Pipeline configuration

use crate::error::{CleanError, Result};

/// Paragraph regrouping strategy
///
/// The two strategies are mutually exclusive; each selects the punctuation
/// policy of the stages upstream of the reflower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflowMode {
    /// Fixed number of sentence units per paragraph
    Count {
        /// Units grouped into each paragraph; the last group may be smaller
        units_per_paragraph: usize,
    },
    /// Greedy wrapping toward a target paragraph length
    Length {
        /// Target length in characters, not bytes
        target_chars: usize,
    },
}

impl Default for ReflowMode {
    fn default() -> Self {
        ReflowMode::Count {
            units_per_paragraph: 5,
        }
    }
}

/// Configuration for one cleaning run
///
/// Carried per invocation and never persisted by the pipeline.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Language profile code ("zh", "ja", "en")
    pub language: String,
    /// Paragraph regrouping strategy
    pub mode: ReflowMode,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            language: "zh".to_string(),
            mode: ReflowMode::default(),
        }
    }
}

impl CleanConfig {
    /// Create a builder
    pub fn builder() -> CleanConfigBuilder {
        CleanConfigBuilder::default()
    }

    /// Reject non-positive size and count parameters
    ///
    /// Reported to the caller before processing begins; the pipeline
    /// performs no partial work on an invalid configuration.
    pub fn validate(&self) -> Result<()> {
        match self.mode {
            ReflowMode::Count {
                units_per_paragraph: 0,
            } => Err(CleanError::Config(
                "units_per_paragraph must be positive".to_string(),
            )),
            ReflowMode::Length { target_chars: 0 } => Err(CleanError::Config(
                "target_chars must be positive".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct CleanConfigBuilder {
    config: CleanConfig,
}

impl CleanConfigBuilder {
    /// Set the language profile code
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Set the regrouping strategy directly
    pub fn mode(mut self, mode: ReflowMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Group a fixed number of sentence units into each paragraph
    pub fn units_per_paragraph(mut self, units: usize) -> Self {
        self.config.mode = ReflowMode::Count {
            units_per_paragraph: units,
        };
        self
    }

    /// Wrap paragraphs toward a target character length
    pub fn target_chars(mut self, chars: usize) -> Self {
        self.config.mode = ReflowMode::Length {
            target_chars: chars,
        };
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<CleanConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CleanConfig::default();
        assert_eq!(config.language, "zh");
        assert_eq!(
            config.mode,
            ReflowMode::Count {
                units_per_paragraph: 5
            }
        );
    }

    #[test]
    fn test_builder_count_mode() {
        let config = CleanConfig::builder()
            .language("ja")
            .units_per_paragraph(3)
            .build()
            .unwrap();

        assert_eq!(config.language, "ja");
        assert_eq!(
            config.mode,
            ReflowMode::Count {
                units_per_paragraph: 3
            }
        );
    }

    #[test]
    fn test_builder_length_mode() {
        let config = CleanConfig::builder().target_chars(80).build().unwrap();
        assert_eq!(config.mode, ReflowMode::Length { target_chars: 80 });
    }

    #[test]
    fn test_zero_units_rejected() {
        let err = CleanConfig::builder()
            .units_per_paragraph(0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("units_per_paragraph"));
    }

    #[test]
    fn test_zero_target_rejected() {
        let err = CleanConfig::builder().target_chars(0).build().unwrap_err();
        assert!(err.to_string().contains("target_chars"));
    }
}
