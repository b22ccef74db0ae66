//! Error types for configuration loading and validation
//!
//! Normalizing content never fails; a bad allow-list or limit is the only
//! thing rejected, and it is rejected when the configuration is built.

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error types for configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A promoted font size is not a positive `em` length
    #[error("Invalid promoted font size '{0}': expected a positive em length such as 1.5em")]
    InvalidFontSize(String),

    /// A numeric limit is outside its accepted range
    #[error("Invalid value for {name}: {value} (must be at least {min})")]
    InvalidLimit {
        name: &'static str,
        value: usize,
        min: usize,
    },

    /// A numeric limit exceeds what the pipeline supports
    #[error("Invalid value for {name}: {value} (must be at most {max})")]
    LimitTooLarge {
        name: &'static str,
        value: usize,
        max: usize,
    },

    /// The tag allow-list would strip every element
    #[error("Tag allow-list is empty")]
    EmptyTagAllowList,

    /// JSON configuration could not be decoded
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
