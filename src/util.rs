//! Utility functions for color parsing and geometry.
//!
//! This module provides:
//! - Name and hex parsing for colors (constants live in draw::color)
//! - Axis-aligned rectangle helper for damage hints

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system.
///
/// # Supported Names (case-insensitive)
/// - "black", "white", "red", "orange", "blue", "tan"
/// - Any `#RRGGBB` hex string
///
/// # Returns
/// - `Some(Color)` if the name matches a palette color or parses as hex
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    let name = name.trim();
    if name.starts_with('#') {
        return parse_hex_color(name);
    }

    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "orange" => Some(ORANGE),
        "blue" => Some(BLUE),
        "tan" => Some(TAN),
        _ => None,
    }
}

/// Parses `#RRGGBB` (or `RRGGBB`) into an opaque color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Maps a Color value to its palette name.
///
/// Uses approximate matching (0.02 tolerance per channel) and falls back to
/// "Custom" for colors outside the palette.
pub fn color_to_name(color: &Color) -> &'static str {
    const NAMED: [(&str, Color); 6] = [
        ("Black", BLACK),
        ("White", WHITE),
        ("Red", RED),
        ("Orange", ORANGE),
        ("Blue", BLUE),
        ("Tan", TAN),
    ];

    let close = |a: f64, b: f64| (a - b).abs() < 0.02;
    NAMED
        .iter()
        .find(|(_, named)| {
            close(color.r, named.r) && close(color.g, named.g) && close(color.b, named.b)
        })
        .map(|(name, _)| *name)
        .unwrap_or("Custom")
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle helper used for damage hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    /// Extents that do not fit in `i32` saturate.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x.saturating_sub(min_x);
        let height = max_y.saturating_sub(min_y);
        Self::new(min_x, min_y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_hex_color_mappings() {
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert_eq!(name_to_color("Orange").unwrap(), ORANGE);
        assert_eq!(name_to_color("#D2B48C").unwrap(), TAN);
        assert_eq!(name_to_color("#ff0000").unwrap(), RED);
        assert!(name_to_color("chartreuse").is_none());
        assert!(name_to_color("#12345").is_none());
        assert!(name_to_color("#GGGGGG").is_none());
    }

    #[test]
    fn color_to_name_matches_palette() {
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&ORANGE), "Orange");
        assert_eq!(color_to_name(&TAN), "Tan");
        assert_eq!(
            color_to_name(&Color {
                r: 0.42,
                g: 0.42,
                b: 0.42,
                a: 1.0
            }),
            "Custom"
        );
    }

    #[test]
    fn rect_rejects_empty_area() {
        assert!(Rect::new(0, 0, 0, 5).is_none());
        assert!(Rect::from_min_max(4, 4, 4, 9).is_none());
        assert_eq!(
            Rect::from_min_max(-2, 3, 8, 5),
            Rect::new(-2, 3, 10, 2)
        );
    }

    #[test]
    fn rect_from_extreme_bounds_saturates() {
        let rect = Rect::from_min_max(i32::MIN, 0, i32::MAX, 1).unwrap();
        assert_eq!(rect.width, i32::MAX);
    }
}
