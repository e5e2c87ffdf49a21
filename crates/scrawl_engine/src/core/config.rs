//! Application configuration
//!
//! TOML-backed configuration for applications driving the engine. Every
//! field has a default, so an empty file (or no file at all) yields a
//! working configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::debug_draw::DebugRenderConfig;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to load
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file was not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Frame-loop settings for headless and fixed-timestep drivers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Fixed timestep in seconds for deterministic runs
    pub fixed_delta_seconds: f32,

    /// Number of frames a headless run simulates
    pub frame_count: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            fixed_delta_seconds: 1.0 / 60.0,
            frame_count: 300,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Debug render system settings
    pub debug_render: DebugRenderConfig,

    /// Frame-loop settings
    pub frame: FrameConfig,
}

impl AppConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load a configuration file if it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_path(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_relative_eq!(config.debug_render.screen_height, 800.0);
        assert!(config.debug_render.start_enabled);
        assert_eq!(config.frame.frame_count, 300);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_relative_eq!(config.frame.fixed_delta_seconds, 1.0 / 60.0);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml_str(
            r#"
            [debug_render]
            screen_height = 1080.0
            start_enabled = false

            [frame]
            frame_count = 10
            "#,
        )
        .unwrap();

        assert_relative_eq!(config.debug_render.screen_height, 1080.0);
        assert!(!config.debug_render.start_enabled);
        assert_eq!(config.frame.frame_count, 10);
        // Untouched fields keep their defaults
        assert_relative_eq!(config.debug_render.default_screen_aspect, 2.0);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = AppConfig::from_toml_str("debug_render = \"not a table\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default("/nonexistent/scrawl.toml").unwrap();
        assert_eq!(config.frame.frame_count, 300);
    }
}
