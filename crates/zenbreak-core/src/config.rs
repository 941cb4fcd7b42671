//! TOML-based application configuration.
//!
//! Holds the user's preferred defaults:
//! - Starting mode and duration on the home screen
//! - Duration choices offered on the home screen
//! - Artificial latency of the guidance content
//! - Redraw cadence of the terminal UI
//!
//! Configuration is read from `~/.config/zenbreak/config.toml`. The app never
//! writes it; a missing file means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ValidationError};
use crate::session::{Mode, SessionConfig};

/// Session defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDefaults {
    #[serde(default)]
    pub default_mode: Mode,
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,
    #[serde(default = "default_duration_choices")]
    pub duration_choices: Vec<u32>,
}

/// Guidance content settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionDefaults,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

// Default functions
fn default_minutes() -> u32 {
    SessionConfig::DEFAULT_MINUTES
}
fn default_duration_choices() -> Vec<u32> {
    vec![1, 3, 5]
}
fn default_latency_ms() -> u64 {
    600
}
fn default_frame_ms() -> u64 {
    100
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            default_mode: Mode::default(),
            default_minutes: default_minutes(),
            duration_choices: default_duration_choices(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_ms: default_frame_ms(),
        }
    }
}

/// Returns `~/.config/zenbreak[-dev]/` based on ZENBREAK_ENV.
///
/// Set ZENBREAK_ENV=dev to use the development directory.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join(".config");

    let env = std::env::var("ZENBREAK_ENV").unwrap_or_else(|_| "production".to_string());

    Ok(if env == "dev" {
        base_dir.join("zenbreak-dev")
    } else {
        base_dir.join("zenbreak")
    })
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from the default location, or defaults if there is no file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                tracing::debug!(path = %path.display(), "configuration loaded");
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }),
        }
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let json = serde_json::to_value(self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        let val = Self::get_json_value_by_path(&json, key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        Ok(match val {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Check values that TOML alone cannot constrain.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.session.default_minutes == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        if self.session.duration_choices.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "session.duration_choices".into(),
                message: "at least one duration is required".into(),
            });
        }
        if self.session.duration_choices.contains(&0) {
            return Err(ValidationError::ZeroDuration);
        }
        if self.ui.frame_ms == 0 {
            return Err(ValidationError::InvalidValue {
                field: "ui.frame_ms".into(),
                message: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Home-screen selection to start from.
    pub fn session_config(&self) -> Result<SessionConfig, ValidationError> {
        SessionConfig::new(self.session.default_mode, self.session.default_minutes)
    }

    pub fn content_latency(&self) -> Duration {
        Duration::from_millis(self.content.latency_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.ui.frame_ms)
    }
}
