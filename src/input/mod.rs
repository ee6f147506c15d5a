//! Input handling and gesture state machine.
//!
//! This module translates host pointer events and toolbar controls into
//! drawing actions. It maintains the current tool and style (color, width)
//! and the state machine that turns a press/move/release sequence into one
//! committed stroke.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Action, PointerEvent, PointerId};
pub use state::{DrawingSession, DrawingState, SessionSettings};
pub use tool::{Tool, WidthPreset};
