use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

fn default_provider() -> String {
    "google".to_string()
}

fn default_target() -> String {
    "zh-CN".to_string()
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/fanyi/config.toml`. Credentials live here and
/// nowhere else; they are handed to provider constructors by value and are
/// never logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Selected provider: `google`, `baidu`, or `youdao`.
    pub provider: String,
    /// Default target language (canonical code).
    pub to: String,
    /// Baidu Trans API AppID.
    pub baidu_appid: String,
    /// Baidu Trans API key.
    pub baidu_key: String,
    /// Youdao OpenAPI AppKey.
    pub youdao_app_key: String,
    /// Youdao OpenAPI AppSecret.
    pub youdao_app_secret: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            to: default_target(),
            baidu_appid: String::new(),
            baidu_key: String::new(),
            youdao_app_key: String::new(),
            youdao_app_secret: String::new(),
        }
    }
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/fanyi/config.toml`
    /// or `~/.config/fanyi/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<AppConfig> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config: AppConfig =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_or_default(&self) -> AppConfig {
        self.load().unwrap_or_default()
    }
}
