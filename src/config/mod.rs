pub mod model;

use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mousewatch")
        .join("config.toml")
}

/// Load the config file, writing out defaults on first run.
pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        let config = AppConfig::default();
        if let Err(e) = save_config_to(&path, &config) {
            tracing::warn!("could not write default config: {:#}", e);
        }
        return Ok(config);
    }
    load_config_from(&path)
}

fn load_config_from(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let mut config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    validate(&mut config).with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

/// Largest history the panel will keep; bigger values are clamped.
pub const MAX_HISTORY_CAPACITY: usize = 10_000;

fn validate(config: &mut AppConfig) -> Result<()> {
    let format = &config.display.timestamp_format;
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        bail!("timestamp_format {:?} is not a valid strftime format", format);
    }
    if config.history.capacity > MAX_HISTORY_CAPACITY {
        tracing::warn!(
            "history.capacity {} clamped to {}",
            config.history.capacity,
            MAX_HISTORY_CAPACITY
        );
        config.history.capacity = MAX_HISTORY_CAPACITY;
    }
    Ok(())
}

fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if path == "~" {
            return home;
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("mousewatch-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let mut config = AppConfig::default();
        config.display.title = "buttons".into();
        config.history.capacity = 5;

        save_config_to(&path, &config).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.display.title, "buttons");
        assert_eq!(loaded.history.capacity, 5);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = std::env::temp_dir().join(format!("mousewatch-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[history]\ncapacity = \"lots\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log"), PathBuf::from("/var/log"));
        assert_eq!(expand_home("logs"), PathBuf::from("logs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
            assert_eq!(expand_home("~"), home);
        }
    }

    #[test]
    fn test_load_rejects_bad_timestamp_format() {
        let dir = std::env::temp_dir().join(format!("mousewatch-ts-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[display]\ntimestamp_format = \"%Q\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("not a valid strftime format"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_validate_clamps_history_capacity() {
        let mut config = AppConfig::default();
        config.history.capacity = usize::MAX;
        validate(&mut config).unwrap();
        assert_eq!(config.history.capacity, MAX_HISTORY_CAPACITY);

        let mut config = AppConfig::default();
        validate(&mut config).unwrap();
        assert_eq!(config.history.capacity, 64);
    }
}
