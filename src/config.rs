use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::board::DEFAULT_BOARD_SIZE;
use crate::error::ConfigError;

/// Fixed per-session settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side
    pub board_size: usize,
    /// Pixel width and height of one cell
    pub cell_size: u32,
    /// Base window title
    pub title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            cell_size: 30,
            title: "Gomoku".to_string(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Validation("board_size must be > 0".to_string()));
        }
        if self.cell_size == 0 {
            return Err(ConfigError::Validation("cell_size must be > 0".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".to_string()));
        }
        Ok(())
    }

    /// Side length of the square canvas in pixels
    pub fn canvas_size(&self) -> f32 {
        (self.board_size as u64 * self.cell_size as u64) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 17);
        assert_eq!(config.cell_size, 30);
        assert_eq!(config.title, "Gomoku");
        assert!(config.validate().is_ok());
        assert_eq!(config.canvas_size(), 510.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("board_size = 15").unwrap();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.cell_size, 30);
        assert_eq!(config.title, "Gomoku");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = GameConfig::from_toml_str("board_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let err = GameConfig::from_toml_str("cell_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_bad_toml() {
        let err = GameConfig::from_toml_str("board_size = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("definitely/not/here/gomoku.toml");
        assert_eq!(GameConfig::load_or_default(path).unwrap(), GameConfig::default());
        assert!(matches!(
            GameConfig::load(path).unwrap_err(),
            ConfigError::FileRead { .. }
        ));
    }
}
