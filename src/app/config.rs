use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Static strings painted on the two screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenText {
    pub login_title: String,
    pub identifier_label: String,
    pub secret_label: String,
    pub submit_label: String,
    pub find_account_label: String,
    pub welcome_heading: String,
    pub welcome_title: String,
    pub back_label: String,
}

impl Default for ScreenText {
    fn default() -> Self {
        Self {
            login_title: "Continue with email or ID".to_string(),
            identifier_label: "Email or ID".to_string(),
            secret_label: "Password".to_string(),
            submit_label: "Log in".to_string(),
            find_account_label: "Find account  >".to_string(),
            welcome_heading: "Who ordered the braised ribs??".to_string(),
            welcome_title: "Welcome".to_string(),
            back_label: "Back".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub text: ScreenText,
    pub activity_log_capacity: usize,
    pub tick_rate_ms: u64,
    pub mask_char: char,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            text: ScreenText::default(),
            activity_log_capacity: 200,
            tick_rate_ms: 100,
            mask_char: '•',
        }
    }
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("login-flow")
            .join("config.json")
    }

    /// Load from `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}
