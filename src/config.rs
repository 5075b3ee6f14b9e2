//! Station configuration, read from TOML.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::encode::ErrorCorrection;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_FILE_NAME: &str = "scoutlog.toml";

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        /// Config path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not valid config TOML.
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        /// Config path.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Station settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite database file.
    pub database: PathBuf,
    /// Directory CSV exports are written to.
    pub export_dir: PathBuf,
    /// QR rendering settings.
    pub qr: QrConfig,
}

/// QR rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    /// Error-correction level.
    pub error_correction: ErrorCorrection,
    /// Pixels per module in PNG output.
    pub module_px: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from("scouting.db"),
            export_dir: PathBuf::from("."),
            qr: QrConfig::default(),
        }
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::M,
            module_px: 8,
        }
    }
}

impl Config {
    /// Loads `path` if given (it must exist), otherwise [`DEFAULT_FILE_NAME`]
    /// in the working directory if present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_FILE_NAME);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parses the TOML file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }
}
