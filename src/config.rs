//! Configuration for the `tasklist` host binary.
//!
//! Supports layered configuration with the following priority (highest
//! first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`<config dir>/tasklist/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::{Path, PathBuf};

use camino::Utf8PathBuf;
use thiserror::Error;

const APP_DIR_NAME: &str = "tasklist";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// Neither the CLI, the environment, the config file, nor the platform
    /// supplied a data directory.
    #[error("could not determine a data directory; pass --data-dir")]
    NoDataDir,

    /// The data directory is not valid UTF-8.
    #[error("data directory is not valid UTF-8: {0}")]
    NonUtf8DataDir(PathBuf),
}

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    storage: StorageFileConfig,
    logging: LoggingFileConfig,
}

/// `[storage]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct StorageFileConfig {
    data_dir: Option<PathBuf>,
}

/// `[logging]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct LoggingFileConfig {
    level: Option<String>,
}

/// Configuration overrides supplied on the command line or environment.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to config file (default: `<config dir>/tasklist/config.toml`).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the task store.
    #[arg(long, env = "TASKLIST_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "TASKLIST_LOG", global = true)]
    pub log_level: Option<String>,
}

/// Fully resolved host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListConfig {
    /// Directory the file-backed task store lives in.
    pub data_dir: Utf8PathBuf,
    /// Log level filter string.
    pub log_level: String,
}

impl TaskListConfig {
    /// Loads configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the explicit config file cannot be read,
    /// any config file cannot be parsed, or no usable data directory can be
    /// determined.
    pub fn load(args: &ConfigArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(args.config.as_deref())?;
        Self::resolve(args, file, dirs::data_dir())
    }

    /// Resolves configuration from CLI args, a parsed file, and the platform
    /// data directory. Priority: CLI > file > platform default.
    fn resolve(
        args: &ConfigArgs,
        file: ConfigFile,
        platform_data_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let data_dir = args
            .data_dir
            .clone()
            .or(file.storage.data_dir)
            .or_else(|| platform_data_dir.map(|dir| dir.join(APP_DIR_NAME)))
            .ok_or(ConfigError::NoDataDir)?;
        let data_dir = Utf8PathBuf::from_path_buf(data_dir).map_err(ConfigError::NonUtf8DataDir)?;

        let log_level = args
            .log_level
            .clone()
            .or(file.logging.level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());

        Ok(Self {
            data_dir,
            log_level,
        })
    }
}

/// Loads and parses the TOML config file.
fn load_config_file(explicit_path: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = explicit_path {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(toml::from_str(&contents)?);
    }

    let Some(config_dir) = dirs::config_dir() else {
        return Ok(ConfigFile::default());
    };
    let path = config_dir.join(APP_DIR_NAME).join("config.toml");

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(source) => Err(ConfigError::ReadFile { path, source }),
    }
}
