//! Freehand stroke model.

use super::color::Color;
use crate::util::Rect;
use serde::{Deserialize, Serialize};

/// A canvas-local coordinate pair.
pub type Point = (f64, f64);

/// One continuous pointer gesture rendered as a connected polyline.
///
/// A stroke is seeded with the contact point, so it always holds at least one
/// point. Color and width are fixed at construction and never change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Sequence of (x, y) coordinates in the order they were sampled
    points: Vec<Point>,
    /// Stroke color
    color: Color,
    /// Line width in pixels
    width: f64,
}

impl Stroke {
    /// Starts a stroke at `start` with the given style.
    pub fn new(start: Point, color: Color, width: f64) -> Self {
        Self {
            points: vec![start],
            color,
            width,
        }
    }

    /// Appends a sampled point. No decimation or smoothing is applied.
    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// True when the gesture never moved; rendered as a dot.
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }

    /// Returns the axis-aligned bounds of the stroke, expanded by half its width.
    ///
    /// Suitable for damage hints when a host only wants to repaint what changed.
    pub fn bounding_box(&self) -> Option<Rect> {
        bounding_box_for_points(&self.points, self.width)
    }
}

fn stroke_padding(width: f64) -> i32 {
    let padding = (width / 2.0).ceil() as i32;
    padding.max(1)
}

pub(crate) fn bounding_box_for_points(points: &[Point], width: f64) -> Option<Rect> {
    let (&(x0, y0), rest) = points.split_first()?;
    let mut min_x = x0;
    let mut max_x = x0;
    let mut min_y = y0;
    let mut max_y = y0;

    for &(x, y) in rest {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let padding = stroke_padding(width);
    // Float-to-int casts saturate; keep the padding from wrapping past i32 bounds
    let min_x = (min_x.floor() as i32).saturating_sub(padding);
    let min_y = (min_y.floor() as i32).saturating_sub(padding);
    let max_x = (max_x.ceil() as i32).saturating_add(padding);
    let max_y = (max_y.ceil() as i32).saturating_add(padding);

    Rect::from_min_max(min_x, min_y, max_x, max_y)
}
