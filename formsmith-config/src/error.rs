//! Error types for the formsmith configuration system

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;

/// Configuration-related errors
///
/// All of these are raised while the configuration is loaded, before any
/// generation work starts.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// `label_strategy` names no known strategy
    #[error(
        "Invalid value '{value}' for 'label_strategy': expected one of {}",
        allowed.join(", ")
    )]
    InvalidLabelStrategy {
        value: String,
        allowed: Vec<&'static str>,
    },

    /// Configuration parsing failed
    #[error("Failed to parse configuration: {source}")]
    ParseError {
        #[source]
        source: figment::Error,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value for key '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Configuration file explicitly requested but missing
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },
}

impl ConfigurationError {
    /// Build an [`InvalidValue`](Self::InvalidValue) error
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigurationError {
    fn from(error: figment::Error) -> Self {
        ConfigurationError::ParseError { source: error }
    }
}

impl From<formsmith_labels::UnknownLabelStrategy> for ConfigurationError {
    fn from(error: formsmith_labels::UnknownLabelStrategy) -> Self {
        ConfigurationError::InvalidLabelStrategy {
            value: error.value,
            allowed: formsmith_labels::LabelStrategy::keys(),
        }
    }
}
