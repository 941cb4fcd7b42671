//! Core error types for zenbreak-core.
//!
//! The only domain failure is a content fetch that does not resolve; the
//! session controller absorbs it. Everything else here is ambient:
//! configuration loading and validation.

use std::path::PathBuf;
use thiserror::Error;

use crate::session::Mode;

/// Core error type for zenbreak-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Guidance content errors
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Home directory could not be resolved
    #[error("Could not determine the configuration directory")]
    NoConfigDir,

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Content fetch errors.
///
/// Never fatal to a session: the controller logs them and falls back to the
/// generic placeholder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The source could not produce guidance for this mode
    #[error("No guidance available for {mode}: {message}")]
    Unavailable { mode: Mode, message: String },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Session duration must be at least one minute
    #[error("Session duration must be at least one minute")]
    ZeroDuration,

    /// Unrecognized relaxation mode key
    #[error("Unknown relaxation mode '{0}' (expected breathing, eyes or meditation)")]
    UnknownMode(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_error_names_the_mode() {
        let err = ContentError::Unavailable {
            mode: Mode::Eyes,
            message: "offline".into(),
        };
        assert_eq!(err.to_string(), "No guidance available for eyes: offline");
    }

    #[test]
    fn config_error_converts_into_core_error() {
        let err: CoreError = ConfigError::UnknownKey("ui.nope".into()).into();
        assert!(matches!(err, CoreError::Config(ConfigError::UnknownKey(_))));
        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown configuration key: ui.nope"
        );
    }

    #[test]
    fn io_and_json_failures_convert_into_core_error() {
        fn parse_broken_json() -> Result<()> {
            serde_json::from_str::<serde_json::Value>("{")?;
            Ok(())
        }
        assert!(matches!(parse_broken_json(), Err(CoreError::Json(_))));

        let err: CoreError = std::io::Error::from(std::io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, CoreError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }
}
