//! Error types

use std::path::PathBuf;

/// Errors raised when a board is constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size must be at least 1")]
    ZeroSize,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        assert_eq!(BoardError::ZeroSize.to_string(), "board size must be at least 1");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("cell_size must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: cell_size must be > 0");
    }
}
