//! Configuration file loading for the terminal game.
//!
//! Settings come from `chess.toml` in the working directory, or from an
//! explicit path. Every field has a default, so a missing file or an empty
//! one both yield [`PlayConfig::default()`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How pieces are drawn on the board.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Glyphs {
    /// Chess symbols such as `♔` and `♟`.
    #[default]
    Unicode,
    /// Letters, uppercase for White: `K`, `p`.
    Ascii,
}

/// Settings for an interactive game.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Piece glyph set. Defaults to Unicode.
    #[serde(default)]
    pub glyphs: Glyphs,
    /// Print file letters and rank numbers around the board.
    #[serde(default)]
    pub coordinates: bool,
    /// Reject attempts to move the side not on turn. Defaults to true.
    #[serde(default = "default_enforce_turns")]
    pub enforce_turns: bool,
}

fn default_enforce_turns() -> bool {
    true
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            glyphs: Glyphs::default(),
            coordinates: false,
            enforce_turns: default_enforce_turns(),
        }
    }
}

impl PlayConfig {
    /// Loads the configuration from [`Self::config_path()`], falling back to
    /// defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::from_path(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads the configuration from an explicit path, which must exist.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns `chess.toml` in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
glyphs = "ascii"
coordinates = true
enforce_turns = false
"#;
        let config: PlayConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.glyphs, Glyphs::Ascii);
        assert!(config.coordinates);
        assert!(!config.enforce_turns);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: PlayConfig = toml::from_str("").unwrap();
        assert_eq!(config, PlayConfig::default());
        assert_eq!(config.glyphs, Glyphs::Unicode);
        assert!(!config.coordinates);
        assert!(config.enforce_turns);
    }

    #[test]
    fn test_partial_config() {
        let config: PlayConfig = toml::from_str("coordinates = true").unwrap();
        assert!(config.coordinates);
        assert!(config.enforce_turns);
        assert_eq!(config.glyphs, Glyphs::Unicode);
    }

    #[test]
    fn test_unknown_glyph_set_is_rejected() {
        let result: Result<PlayConfig, _> = toml::from_str(r#"glyphs = "emoji""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = PlayConfig::from_path(Path::new("does/not/exist/chess.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
        assert!(err.to_string().starts_with("Failed to read config file"));
    }

    #[test]
    fn test_config_path() {
        assert_eq!(PlayConfig::config_path(), PathBuf::from("chess.toml"));
    }
}
