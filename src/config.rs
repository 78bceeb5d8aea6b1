use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Which front end drives the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interface {
    #[default]
    Tui,
    Console,
}

/// Opponent settings.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Fixed RNG seed for reproducible games; OS entropy when absent.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub interface: Interface,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
    /// Log destination. The TUI only logs when this is set.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "info".to_string(),
            file: None,
        }
    }
}

/// Where a loaded [`AppConfig`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

impl ConfigSource {
    /// Report how the config at `path` was resolved. Call this once logging
    /// is installed, since loading happens before the subscriber exists.
    pub fn log(self, path: &Path) {
        match self {
            ConfigSource::File => tracing::info!(path = %path.display(), "loaded config"),
            ConfigSource::Defaults => {
                tracing::warn!(path = %path.display(), "config file not found, using defaults")
            }
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = EnvFilter::try_new(&self.log.filter) {
            return Err(ConfigError::Validation(format!(
                "log.filter '{}' is not a valid directive: {}",
                self.log.filter, e
            )));
        }
        if self.log.file.as_deref() == Some(Path::new("")) {
            return Err(ConfigError::Validation("log.file must not be empty".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
