use crate::draw::{render_background, render_stroke, render_strokes};
use crate::util::Rect;

use super::{DrawingSession, DrawingState};

impl DrawingSession {
    /// Renders the whole canvas: background, committed strokes, then the
    /// in-progress stroke on top.
    pub fn render(&self, ctx: &cairo::Context) {
        render_background(ctx, self.settings.background);
        render_strokes(ctx, self.frame.strokes());
        self.render_active_stroke(ctx);
    }

    /// Renders only the in-progress stroke, borrowing its points.
    ///
    /// # Returns
    /// `true` if a stroke was rendered, `false` when idle
    pub fn render_active_stroke(&self, ctx: &cairo::Context) -> bool {
        if let DrawingState::Drawing { stroke, .. } = &self.state {
            render_stroke(ctx, stroke);
            true
        } else {
            false
        }
    }

    /// Bounds of the in-progress stroke, for hosts that repaint partially.
    pub fn active_bounds(&self) -> Option<Rect> {
        self.active_stroke().and_then(|stroke| stroke.bounding_box())
    }
}
