//! Generic pointer event types for host-independent input handling.

use serde::{Deserialize, Serialize};

/// Identifies one contact (finger, stylus, or mouse).
///
/// Hosts map their native touch identifiers to these values; a mouse can
/// always report `PointerId(0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerId(pub u64);

/// A raw pointer sample delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum PointerEvent {
    /// Contact started at canvas-local coordinates
    Down {
        #[serde(default)]
        pointer: PointerId,
        x: f64,
        y: f64,
    },
    /// Contact moved while pressed
    Move {
        #[serde(default)]
        pointer: PointerId,
        x: f64,
        y: f64,
    },
    /// Contact lifted
    Up {
        #[serde(default)]
        pointer: PointerId,
        x: f64,
        y: f64,
    },
    /// The platform took the gesture away (e.g. a system swipe)
    Cancel {
        #[serde(default)]
        pointer: PointerId,
    },
}

impl PointerEvent {
    pub fn pointer(&self) -> PointerId {
        match self {
            PointerEvent::Down { pointer, .. }
            | PointerEvent::Move { pointer, .. }
            | PointerEvent::Up { pointer, .. }
            | PointerEvent::Cancel { pointer } => *pointer,
        }
    }
}

/// Style-selector and toolbar controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Remove every stroke
    Clear,
    /// Remove the most recent stroke
    Undo,
    SelectPen,
    SelectEraser,
    ToggleEraser,
    SetColorBlack,
    SetColorWhite,
    SetColorRed,
    SetColorOrange,
    SetColorBlue,
    SetWidthSmall,
    SetWidthMedium,
    SetWidthLarge,
    /// Request that the current drawing be saved
    Save,
}
