//! Rendering primitives and stroke definitions (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with the palette constants
//! - [`Stroke`]: one freehand gesture (points, color, width)
//! - [`Frame`]: container for all committed strokes
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod frame;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::Frame;
pub use render::{render_background, render_freehand_borrowed, render_stroke, render_strokes};
pub use stroke::{Point, Stroke};

pub use color::{BLACK, BLUE, ORANGE, PALETTE, RED, TAN, WHITE};
