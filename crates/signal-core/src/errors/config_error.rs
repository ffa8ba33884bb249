//! Errors from loading `signal.toml` and `SIGNAL_*` overrides.

use super::error_code::{self, SignalErrorCode};

/// Why the service configuration could not be resolved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `SIGNAL_CONFIG` names a file that does not exist or cannot be read.
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    /// The config file is not valid TOML for [`SignalConfig`](crate::config::SignalConfig).
    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    /// Values parsed but break a timing or server constraint,
    /// e.g. `min_green_secs >= max_green_secs` or an unparsable bind address.
    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    /// A numeric `SIGNAL_*` environment override did not parse.
    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl SignalErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
