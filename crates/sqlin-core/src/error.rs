//! Error types for sqlin

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using SqlinError
pub type Result<T> = std::result::Result<T, SqlinError>;

/// Error type alias for convenience
pub type Error = SqlinError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for sqlin
#[derive(Debug, Error)]
pub enum SqlinError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SqlinError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DirectoryNotFound(_) => exit_codes::NOT_FOUND,
            Self::NotADirectory(_) | Self::Config(_) | Self::Yaml(_) => {
                exit_codes::INVALID_INPUT
            }
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let missing = SqlinError::DirectoryNotFound(PathBuf::from("/nope"));
        assert_eq!(missing.exit_code(), exit_codes::NOT_FOUND);

        let file = SqlinError::NotADirectory(PathBuf::from("/etc/hosts"));
        assert_eq!(file.exit_code(), exit_codes::INVALID_INPUT);

        let io = SqlinError::io(
            "/root",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(io.exit_code(), exit_codes::GENERAL_ERROR);
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = SqlinError::DirectoryNotFound(PathBuf::from("/data/sql"));
        assert_eq!(err.to_string(), "Directory not found: /data/sql");
    }
}
