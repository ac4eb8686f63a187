//! Configuration management

use crate::clause::ClauseOptions;
use crate::error::{Result, SqlinError};
use crate::lister::ListOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the directory to scan
pub const DIR_ENV: &str = "SQLIN_DIR";

/// Environment variable overriding the default config file location
pub const CONFIG_ENV: &str = "SQLIN_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory to scan when none is given on the command line
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Keep regular files only
    #[serde(default)]
    pub files_only: bool,

    /// Sort entries by name
    #[serde(default)]
    pub sort: bool,

    /// Double single quotes inside names
    #[serde(default)]
    pub escape_quotes: bool,
}

impl Config {
    /// Load config from the default path, or defaults if it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load config from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| SqlinError::io(path, e))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from a path the user named explicitly; a missing file is
    /// an error rather than a fallback to defaults
    pub fn load_required(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(SqlinError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::load_from(path)
    }

    /// Get default config path (`SQLIN_CONFIG` if set)
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Resolve the directory to scan: explicit value, then `SQLIN_DIR`, then
    /// the config file
    pub fn resolve_directory(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        explicit
            .or_else(|| std::env::var_os(DIR_ENV).map(PathBuf::from))
            .or_else(|| self.directory.clone())
            .ok_or_else(|| {
                SqlinError::Config(format!(
                    "no directory given; pass DIR, set {} or add `directory` to the config file",
                    DIR_ENV
                ))
            })
    }

    /// Listing options from this config
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            files_only: self.files_only,
            sort: self.sort,
        }
    }

    /// Clause options from this config
    pub fn clause_options(&self) -> ClauseOptions {
        ClauseOptions {
            escape_quotes: self.escape_quotes,
        }
    }
}
