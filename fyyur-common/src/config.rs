//! Configuration loading
//!
//! Resolution priority, highest first:
//! 1. Command-line argument or environment variable (both handled by the binary's clap parser)
//! 2. TOML config file
//! 3. Compiled default

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Default tracing filter directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Keys accepted in the TOML config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub bind: Option<String>,
    pub database_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl TomlConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Where the TOML config came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOrigin {
    /// Path given with `--config`
    Explicit(PathBuf),
    /// Per-user default location
    Default(PathBuf),
    /// Default location exists but could not be used
    Ignored { path: PathBuf, reason: String },
    /// No config file
    None,
}

/// Loaded TOML config plus its origin, for logging once tracing is up
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub file: TomlConfig,
    pub origin: ConfigOrigin,
}

/// Load the TOML config file.
///
/// An explicit path must exist and parse. The default location is optional;
/// if it is unreadable or malformed it is ignored.
pub fn load_config_file(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(LoadedConfig {
            file: TomlConfig::load(path)?,
            origin: ConfigOrigin::Explicit(path.to_path_buf()),
        });
    }

    match default_config_path() {
        Some(path) if path.exists() => match TomlConfig::load(&path) {
            Ok(file) => Ok(LoadedConfig {
                file,
                origin: ConfigOrigin::Default(path),
            }),
            Err(e) => Ok(LoadedConfig {
                file: TomlConfig::default(),
                origin: ConfigOrigin::Ignored {
                    path,
                    reason: e.to_string(),
                },
            }),
        },
        _ => Ok(LoadedConfig {
            file: TomlConfig::default(),
            origin: ConfigOrigin::None,
        }),
    }
}

/// Per-user config file location: `<config_dir>/fyyur/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fyyur").join("config.toml"))
}

/// OS-dependent default database location
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("fyyur").join("fyyur.db"))
        .unwrap_or_else(|| PathBuf::from("./fyyur_data/fyyur.db"))
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<String>,
    pub database_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: String,
    pub database_path: PathBuf,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn resolve(overrides: Overrides, file: TomlConfig) -> Self {
        Self {
            bind: overrides
                .bind
                .or(file.bind)
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            database_path: overrides
                .database_path
                .or(file.database_path)
                .unwrap_or_else(default_database_path),
            log_level: overrides
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_file: overrides.log_file.or(file.log_file),
        }
    }
}
