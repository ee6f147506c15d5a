//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pen defaults and the choices offered by the style selector.
///
/// Users change color and width at runtime; these values only seed a new session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - a named color (black, white, red, orange, blue),
    /// a hex string like `"#FF0000"`, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default pen width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Widths behind the small / medium / large selector buttons
    #[serde(default = "default_width_presets")]
    pub width_presets: [f64; 3],
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            width_presets: default_width_presets(),
        }
    }
}

/// Eraser settings.
///
/// Eraser strokes are painted in the canvas background color; only the width
/// is configurable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EraserConfig {
    /// Eraser width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_eraser_width")]
    pub width: f64,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            width: default_eraser_width(),
        }
    }
}

/// Canvas surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Paper color, also used by eraser strokes
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Width of the exported image in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Height of the exported image in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Where saved drawings go.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StorageConfig {
    /// Directory holding the `images/` folder and the `drawings.jsonl` table.
    /// `~/` is expanded to the home directory.
    #[serde(default = "default_storage_directory")]
    pub directory: String,

    /// Image filename template (chrono format specifiers, without extension)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: default_storage_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> f64 {
    3.0
}

fn default_width_presets() -> [f64; 3] {
    [2.0, 5.0, 12.0]
}

fn default_eraser_width() -> f64 {
    10.0
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("#D2B48C".to_string())
}

fn default_canvas_width() -> u32 {
    1080
}

fn default_canvas_height() -> u32 {
    1440
}

fn default_storage_directory() -> String {
    dirs::picture_dir()
        .map(|dir| dir.join("Inkpad").to_string_lossy().into_owned())
        .unwrap_or_else(|| "~/Inkpad".to_string())
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}
