use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub data: DataConfig,
    pub log: LogConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse capture in the terminal.
    pub mouse_enabled: bool,
}

/// Where the character catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Read the catalog from this JSON file instead of the bundled one.
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Override the default log directory.
    pub dir: Option<PathBuf>,
    /// Number of daily log files kept before the oldest is removed.
    pub retain_files: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse_enabled: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
            retain_files: 7,
        }
    }
}

/// Where the active configuration came from.
///
/// Config is read before logging exists, so the outcome is carried out of
/// [`AppConfig::load`] and reported once the subscriber is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Parsed from this file.
    File(PathBuf),
    /// No file at this path; defaults in use.
    Missing(PathBuf),
    /// The file exists but could not be read or parsed; defaults in use.
    Invalid { path: PathBuf, error: String },
}

impl ConfigOrigin {
    /// Write the outcome to the log.
    pub fn report(&self) {
        match self {
            ConfigOrigin::File(path) => {
                log::info!("Loaded config from {}", path.display());
            }
            ConfigOrigin::Missing(path) => {
                log::debug!("No config file at {}; using defaults", path.display());
            }
            ConfigOrigin::Invalid { path, error } => {
                log::warn!(
                    "Failed to load config at {}: {error}; using defaults",
                    path.display()
                );
            }
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/character-explorer/config.toml`.
    /// Falls back to `Default` if the file is missing or unparseable.
    pub fn load() -> (Self, ConfigOrigin) {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> (Self, ConfigOrigin) {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return (Self::default(), ConfigOrigin::Missing(path.to_path_buf()));
            }
            Err(e) => {
                return (
                    Self::default(),
                    ConfigOrigin::Invalid {
                        path: path.to_path_buf(),
                        error: e.to_string(),
                    },
                );
            }
        };

        match Self::from_toml_str(&contents) {
            Ok(config) => (config, ConfigOrigin::File(path.to_path_buf())),
            Err(e) => (
                Self::default(),
                ConfigOrigin::Invalid {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                },
            ),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("character-explorer").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
