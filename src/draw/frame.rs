//! Frame container for committed strokes.

use super::stroke::Stroke;
use serde::{Deserialize, Serialize};

/// Committed strokes of the current drawing session.
///
/// Strokes are kept in draw order (first = bottom layer, last = top layer).
/// The only mutations are append, pop-last and clear; committed strokes are
/// never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    strokes: Vec<Stroke>,
}

impl Frame {
    /// Creates a new empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed strokes in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Removes all strokes from the frame, clearing the canvas.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Commits a stroke on top of the existing ones.
    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Removes and returns the most recently committed stroke, if any.
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }
}
