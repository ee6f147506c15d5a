//! RGBA color type and predefined color constants.

use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use inkpad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let tan = Color::from_rgb8(0xD2, 0xB4, 0x8C);
/// assert!(tan.r > tan.b);
/// assert_eq!(red.a, 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates an opaque color from 8-bit channel values.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }
}

// ============================================================================
// Predefined Color Constants (drawing palette)
// ============================================================================

/// Black (#000000), the default pen color
pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);

/// White (#FFFFFF)
pub const WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);

/// Red (#FF0000)
pub const RED: Color = Color::from_rgb8(0xFF, 0x00, 0x00);

/// Orange (#FFA500)
pub const ORANGE: Color = Color::from_rgb8(0xFF, 0xA5, 0x00);

/// Blue (#0000FF)
pub const BLUE: Color = Color::from_rgb8(0x00, 0x00, 0xFF);

/// Tan (#D2B48C), the paper color of the canvas and the color eraser strokes paint with
pub const TAN: Color = Color::from_rgb8(0xD2, 0xB4, 0x8C);

/// The pen colors offered by the palette, in display order.
pub const PALETTE: [Color; 5] = [BLACK, WHITE, RED, ORANGE, BLUE];
