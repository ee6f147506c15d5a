//! Configuration file support for inkpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkpad/config.toml`. Settings include pen defaults, eraser
//! width, canvas size and color, and where saved drawings are stored.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, EraserConfig, StorageConfig};

use crate::draw::color::{BLACK, TAN};
use crate::export::file::expand_tilde;
use crate::input::SessionSettings;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const WIDTH_RANGE: (f64, f64) = (1.0, 50.0);
const ERASER_RANGE: (f64, f64) = (1.0, 100.0);
const CANVAS_RANGE: (u32, u32) = (16, 8192);

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_width = 3.0
/// width_presets = [2.0, 5.0, 12.0]
///
/// [eraser]
/// width = 10.0
///
/// [canvas]
/// background = "#D2B48C"
/// width = 1080
/// height = 1440
///
/// [storage]
/// directory = "~/Pictures/Inkpad"
/// filename_template = "drawing_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, schemars::JsonSchema)]
pub struct Config {
    /// Pen defaults (color, width, presets)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Eraser settings
    #[serde(default)]
    pub eraser: EraserConfig,

    /// Canvas surface settings
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Saved drawing storage
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    /// Non-finite widths (TOML allows `nan` and `inf`) are replaced with defaults.
    ///
    /// Validated ranges:
    /// - `default_width` and each of `width_presets`: 1.0 - 50.0
    /// - `eraser.width`: 1.0 - 100.0
    /// - `canvas.width`, `canvas.height`: 16 - 8192
    fn validate_and_clamp(&mut self) {
        let defaults = Config::default();
        if !self.drawing.default_width.is_finite() {
            log::warn!("Non-finite default_width, using {:.1}", defaults.drawing.default_width);
            self.drawing.default_width = defaults.drawing.default_width;
        }
        for (preset, fallback) in self
            .drawing
            .width_presets
            .iter_mut()
            .zip(defaults.drawing.width_presets)
        {
            if !preset.is_finite() {
                log::warn!("Non-finite width preset, using {fallback:.1}");
                *preset = fallback;
            }
        }
        if !self.eraser.width.is_finite() {
            log::warn!("Non-finite eraser width, using {:.1}", defaults.eraser.width);
            self.eraser.width = defaults.eraser.width;
        }

        let (min_width, max_width) = WIDTH_RANGE;
        if !(min_width..=max_width).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to {min_width:.1}-{max_width:.1} range",
                self.drawing.default_width
            );
            self.drawing.default_width = self.drawing.default_width.clamp(min_width, max_width);
        }

        for (i, preset) in self.drawing.width_presets.iter_mut().enumerate() {
            if !(min_width..=max_width).contains(preset) {
                log::warn!(
                    "Invalid width_presets[{}] = {:.1}, clamping to {min_width:.1}-{max_width:.1} range",
                    i,
                    preset
                );
                *preset = preset.clamp(min_width, max_width);
            }
        }

        let (min_eraser, max_eraser) = ERASER_RANGE;
        if !(min_eraser..=max_eraser).contains(&self.eraser.width) {
            log::warn!(
                "Invalid eraser width {:.1}, clamping to {min_eraser:.1}-{max_eraser:.1} range",
                self.eraser.width
            );
            self.eraser.width = self.eraser.width.clamp(min_eraser, max_eraser);
        }

        let (min_dim, max_dim) = CANVAS_RANGE;
        if !(min_dim..=max_dim).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to {min_dim}-{max_dim} range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(min_dim, max_dim);
        }
        if !(min_dim..=max_dim).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to {min_dim}-{max_dim} range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(min_dim, max_dim);
        }

        if !self.drawing.default_color.is_valid() {
            log::warn!(
                "Invalid default_color {:?}, falling back to black",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name("black".to_string());
        }

        if !self.canvas.background.is_valid() {
            log::warn!(
                "Invalid canvas background {:?}, falling back to tan",
                self.canvas.background
            );
            self.canvas.background = ColorSpec::Name("#D2B48C".to_string());
        }

        if self.storage.filename_template.trim().is_empty() {
            log::warn!("Empty storage filename_template, using default");
            self.storage.filename_template = StorageConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkpad");

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

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from a TOML string and validates it.
    pub fn from_toml(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Writes the current configuration to `config_path`, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The config cannot be serialized or written
    pub fn write_new(&self, config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Drawing-session parameters derived from this configuration.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            pen_color: self.drawing.default_color.to_color_or(BLACK),
            pen_width: self.drawing.default_width,
            width_presets: self.drawing.width_presets,
            min_width: WIDTH_RANGE.0,
            max_width: WIDTH_RANGE.1,
            eraser_width: self.eraser.width,
            background: self.canvas.background.to_color_or(TAN),
            canvas_width: self.canvas.width,
            canvas_height: self.canvas.height,
        }
    }

    /// Storage directory with `~/` expanded.
    pub fn storage_directory(&self) -> PathBuf {
        expand_tilde(&self.storage.directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, TAN};

    #[test]
    fn empty_toml_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        let settings = config.session_settings();
        assert_eq!(settings.pen_color, BLACK);
        assert_eq!(settings.pen_width, 3.0);
        assert_eq!(settings.width_presets, [2.0, 5.0, 12.0]);
        assert_eq!(settings.eraser_width, 10.0);
        assert_eq!(settings.background, TAN);
        assert_eq!((settings.canvas_width, settings.canvas_height), (1080, 1440));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_width = 500.0
            width_presets = [0.5, 5.0, 80.0]

            [eraser]
            width = 0.0

            [canvas]
            width = 4
            height = 100000
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_width, 50.0);
        assert_eq!(config.drawing.width_presets, [1.0, 5.0, 50.0]);
        assert_eq!(config.eraser.width, 1.0);
        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.canvas.height, 8192);
    }

    #[test]
    fn non_finite_widths_fall_back_to_defaults() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_width = nan
            width_presets = [2.0, inf, -inf]

            [eraser]
            width = nan
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_width, 3.0);
        assert_eq!(config.drawing.width_presets, [2.0, 5.0, 12.0]);
        assert_eq!(config.eraser.width, 10.0);
    }

    #[test]
    fn colors_accept_names_hex_and_rgb() {
        let config = Config::from_toml(
            r##"
            [drawing]
            default_color = "#FF0000"

            [canvas]
            background = [210, 180, 140]
            "##,
        )
        .unwrap();
        let settings = config.session_settings();
        assert_eq!(settings.pen_color, RED);
        assert_eq!(settings.background, TAN);
    }

    #[test]
    fn unknown_colors_fall_back() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_color = "mauve"

            [canvas]
            background = "plaid"
            "#,
        )
        .unwrap();
        let settings = config.session_settings();
        assert_eq!(settings.pen_color, BLACK);
        assert_eq!(settings.background, TAN);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[drawing\ndefault_width = ").is_err());
    }

    #[test]
    fn write_new_refuses_to_overwrite() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        Config::default().write_new(&path).unwrap();
        assert!(Config::load_from(&path).is_ok());
        assert!(Config::default().write_new(&path).is_err());
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("drawing"));
        assert!(schema.contains("storage"));
    }
}
