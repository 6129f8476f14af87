//! Configuration file support for strokeboard.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/strokeboard/config.toml`. Settings
//! cover the default pen style and the undo history bound.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, HistoryConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in
/// the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_width = 5.0
///
/// [history]
/// max_undo_depth = 0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, schemars::JsonSchema)]
pub struct Config {
    /// Default pen style
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Undo history bounds
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 50.0 (non-finite values reset to the default)
    fn validate_and_clamp(&mut self) {
        if !self.drawing.default_width.is_finite() {
            log::warn!(
                "Invalid default_width {}, falling back to {:.1}",
                self.drawing.default_width,
                types::default_width()
            );
            self.drawing.default_width = types::default_width();
        } else if !(1.0..=50.0).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to 1.0-50.0 range",
                self.drawing.default_width
            );
            self.drawing.default_width = self.drawing.default_width.clamp(1.0, 50.0);
        }

        if let ColorSpec::Name(name) = &self.drawing.default_color {
            if crate::util::name_to_color(name).is_none() {
                log::warn!("Invalid default_color '{}', falling back to 'black'", name);
                self.drawing.default_color = ColorSpec::Name("black".to_string());
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/strokeboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("strokeboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text).context("Invalid config TOML")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, Color};
    use crate::input::state::DEFAULT_STROKE_WIDTH;
    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.drawing.default_width, DEFAULT_STROKE_WIDTH);
        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(
            config.drawing.default_width,
            crate::StrokeLog::default().style().width
        );
        assert_eq!(config.history.max_undo_depth, 0);
    }

    #[test]
    fn rgb_color_and_depth_are_parsed() {
        let config = Config::from_toml_str(
            "[drawing]\ndefault_color = [255, 128, 0]\n\n[history]\nmax_undo_depth = 50\n",
        )
        .unwrap();
        assert_eq!(
            config.drawing.default_color.to_color(),
            Color::from_rgb8(255, 128, 0)
        );
        assert_eq!(config.history.max_undo_depth, 50);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config =
            Config::from_toml_str("[drawing]\ndefault_width = 400.0\ndefault_color = \"mauve\"\n")
                .unwrap();
        assert_eq!(config.drawing.default_width, 50.0);
        assert_eq!(
            config.drawing.default_color,
            ColorSpec::Name("black".to_string())
        );

        let config = Config::from_toml_str("[drawing]\ndefault_width = nan\n").unwrap();
        assert_eq!(config.drawing.default_width, 5.0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml_str("[drawing\n").is_err());
        assert!(Config::from_toml_str("[history]\nmax_undo_depth = -1\n").is_err());
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[drawing]\ndefault_width = 2.5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_width, 2.5);
        assert!(Config::load_from(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("max_undo_depth"));
        assert!(schema.contains("default_width"));
    }
}
