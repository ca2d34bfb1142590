//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

use crate::tracker::MouseButton;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Screen layout and the set of text elements placed on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Names of the elements that exist on the board. Button state is only
    /// written to elements listed here.
    #[serde(default = "default_elements")]
    pub elements: Vec<String>,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            elements: default_elements(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Notification history panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of entries kept. `0` hides the panel.
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    /// `EnvFilter` directive, e.g. `"info"` or `"mousewatch=trace"`.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_title() -> String {
    "mousewatch".to_string()
}
fn default_elements() -> Vec<String> {
    MouseButton::ALL
        .iter()
        .map(|b| b.element_name().to_string())
        .collect()
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_history_capacity() -> usize {
    64
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/mousewatch/logs".to_string()
}
