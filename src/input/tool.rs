//! Drawing tool and width preset selection.

use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool is read once when a gesture starts; switching tools
/// mid-gesture only affects the next stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Freehand pen using the selected color and width
    #[default]
    Pen,
    /// Paints over with the canvas background color at the fixed eraser width
    Eraser,
}

/// The small / medium / large width buttons of the style selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidthPreset {
    Small,
    Medium,
    Large,
}

impl WidthPreset {
    /// Index into the configured `width_presets` array.
    pub fn index(self) -> usize {
        match self {
            WidthPreset::Small => 0,
            WidthPreset::Medium => 1,
            WidthPreset::Large => 2,
        }
    }
}
