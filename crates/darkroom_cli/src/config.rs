//! CLI configuration.
//!
//! Settings come from a TOML file found in this order:
//!
//! 1. `--config <path>` on the command line.
//! 2. The `DARKROOM_CONFIG` environment variable.
//! 3. `darkroom.toml` in the working directory, if it exists.
//! 4. Built-in defaults.
//!
//! Command-line flags such as `--precision` override whatever the file says.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The environment variable naming a config file.
pub const CONFIG_ENV: &str = "DARKROOM_CONFIG";

/// Config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "darkroom.toml";

/// Errors loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`DarkroomConfig`].
    #[error("invalid config file {path}: {source}")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Settings for the `darkroom` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DarkroomConfig {
    /// Catalog snapshot used when `--file` is not given.
    pub catalog: Option<PathBuf>,
    /// Decimal places shown for times, stops and points.
    pub precision: u16,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for DarkroomConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            precision: 2,
            log_level: "info".to_string(),
        }
    }
}

impl DarkroomConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(source: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source, path)
    }

    /// Find and load the config following the documented priority order.
    ///
    /// Returns the config and the file it came from, if any.
    pub fn resolve(cli_path: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::resolve_from(cli_path, env_path, Path::new(DEFAULT_CONFIG_FILE))
    }

    fn resolve_from(
        cli_path: Option<&Path>,
        env_path: Option<PathBuf>,
        local_file: &Path,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        // An explicitly named file must exist; the local file is optional.
        let path = match (cli_path, env_path) {
            (Some(path), _) => Some(path.to_path_buf()),
            (None, Some(path)) => Some(path),
            (None, None) if local_file.exists() => Some(local_file.to_path_buf()),
            (None, None) => None,
        };
        match path {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Override the catalog path.
    #[must_use]
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = Some(path.into());
        self
    }

    /// Override the output precision.
    #[must_use]
    pub fn with_precision(mut self, precision: u16) -> Self {
        self.precision = precision;
        self
    }
}
