//! Applet configuration.
//!
//! Read from `~/.config/snapmenu/config.json`. A missing or broken file
//! falls back to defaults; the applet never fails to start over config.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default panel icon.
const DEFAULT_ICON_NAME: &str = "snap-symbolic";

/// Default wait after a notice before rebuilding, in milliseconds.
const DEFAULT_NOTICE_DEBOUNCE_MS: u64 = 250;

/// On-disk config file. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    icon_name: String,
    #[serde(default)]
    notice_debounce_ms: Option<u64>,
}

/// Runtime applet configuration.
#[derive(Debug, Clone)]
pub struct AppletConfig {
    /// Icon name for the panel button.
    pub icon_name: String,

    /// How long to wait after a notice before rebuilding the menu.
    /// Notices arriving inside the window collapse into one rebuild.
    pub notice_debounce: Duration,
}

impl Default for AppletConfig {
    fn default() -> Self {
        Self {
            icon_name: DEFAULT_ICON_NAME.into(),
            notice_debounce: Duration::from_millis(DEFAULT_NOTICE_DEBOUNCE_MS),
        }
    }
}

impl AppletConfig {
    /// Loads the user config file, falling back to defaults.
    pub fn load_or_default() -> Self {
        match config_path() {
            Some(path) => Self::from_file(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults when
    /// the file is missing, unreadable or unparsable.
    pub fn from_file(path: &Path) -> Self {
        let mut config = AppletConfig::default();

        if !path.exists() {
            return config;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read config, using defaults"
                );
                return config;
            }
        };

        match serde_json::from_str::<ConfigFile>(&content) {
            Ok(file) => {
                if !file.icon_name.is_empty() {
                    config.icon_name = file.icon_name;
                }
                if let Some(ms) = file.notice_debounce_ms {
                    config.notice_debounce = Duration::from_millis(ms);
                }
            }
            Err(_) => {
                tracing::warn!(
                    path = %path.display(),
                    "failed to parse config, using defaults"
                );
            }
        }

        config
    }
}

fn config_path() -> Option<PathBuf> {
    Some(config_base_dir()?.join("snapmenu").join("config.json"))
}

fn config_base_dir() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        let home = std::env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".config"))
    }

    // snapd only exists on Linux; elsewhere there is no config to read.
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}
