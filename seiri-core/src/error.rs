//! Pipeline error types

use thiserror::Error;

/// Errors surfaced before the pipeline runs
///
/// The stages themselves are total over arbitrary text content; only
/// configuration validation and language profile resolution can fail.
#[derive(Error, Debug)]
pub enum CleanError {
    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Unknown language code
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that could not be resolved
        code: String,
    },

    /// Malformed embedded profile data
    #[error("profile error: {0}")]
    Profile(String),
}

/// Result type for pipeline construction
pub type Result<T> = std::result::Result<T, CleanError>;
