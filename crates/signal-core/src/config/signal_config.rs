//! Top-level configuration with layered resolution.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ServerConfig, TimingConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "signal.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SIGNAL_CONFIG";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SIGNAL_*`)
/// 2. Project config (`$SIGNAL_CONFIG`, else `signal.toml` in `root`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SignalConfig {
    pub server: ServerConfig,
    pub timing: TimingConfig,
}

impl SignalConfig {
    /// Load configuration with layered resolution, rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 2: project config. An explicit path must exist.
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(explicit) => {
                let path = PathBuf::from(explicit);
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, &path)?;
            }
            Err(_) => {
                let path = root.join(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::merge_toml_file(&mut config, &path)?;
                }
            }
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config)?;

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: SignalConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SignalConfig) -> Result<(), ConfigError> {
        let timing = &config.timing;
        for (field, value) in [
            ("timing.min_green_secs", timing.effective_min_green()),
            ("timing.max_green_secs", timing.effective_max_green()),
            ("timing.yellow_secs", timing.effective_yellow()),
            ("timing.all_red_secs", timing.effective_all_red()),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a non-negative number of seconds".to_string(),
                });
            }
        }
        if timing.effective_min_green() >= timing.effective_max_green() {
            return Err(ConfigError::ValidationFailed {
                field: "timing.min_green_secs".to_string(),
                message: "must be less than timing.max_green_secs".to_string(),
            });
        }
        let addr = config.server.effective_bind_addr();
        if addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::ValidationFailed {
                field: "server.bind_addr".to_string(),
                message: format!("'{addr}' is not a socket address"),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SignalConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SignalConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        tracing::debug!(path = %path.display(), "merged config file");
        Ok(())
    }

    /// Overlay every `Some` field of `other` onto `base`.
    fn merge(base: &mut SignalConfig, other: &SignalConfig) {
        if other.server.bind_addr.is_some() {
            base.server.bind_addr = other.server.bind_addr.clone();
        }
        let (t, o) = (&mut base.timing, &other.timing);
        t.min_green_secs = o.min_green_secs.or(t.min_green_secs);
        t.max_green_secs = o.max_green_secs.or(t.max_green_secs);
        t.yellow_secs = o.yellow_secs.or(t.yellow_secs);
        t.all_red_secs = o.all_red_secs.or(t.all_red_secs);
    }

    /// Apply `SIGNAL_*` environment variable overrides.
    fn apply_env_overrides(config: &mut SignalConfig) -> Result<(), ConfigError> {
        if let Ok(addr) = std::env::var("SIGNAL_BIND_ADDR") {
            config.server.bind_addr = Some(addr);
        }
        if let Some(v) = env_f64("SIGNAL_MIN_GREEN_SECS")? {
            config.timing.min_green_secs = Some(v);
        }
        if let Some(v) = env_f64("SIGNAL_MAX_GREEN_SECS")? {
            config.timing.max_green_secs = Some(v);
        }
        Ok(())
    }
}

fn env_f64(key: &str) -> Result<Option<f64>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: key.to_string(),
                message: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
