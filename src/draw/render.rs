//! Cairo-based rendering functions for strokes.

use super::color::Color;
use super::stroke::{Point, Stroke};

/// Fills the entire canvas with the paper color.
///
/// Should be called before rendering any strokes.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // Ignore errors - a failed paint only leaves the previous frame visible
}

/// Renders all strokes in order (first stroke = bottom layer).
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke]) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Renders a single stroke.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    render_freehand_borrowed(ctx, stroke.points(), stroke.color(), stroke.width());
}

/// Render freehand stroke (polyline through points)
///
/// Accepts a borrowed slice so the in-progress stroke can be drawn every frame
/// without cloning its points. A single point is drawn as a filled dot of the
/// stroke's diameter, since a zero-length path strokes nothing on some backends.
pub fn render_freehand_borrowed(ctx: &cairo::Context, points: &[Point], color: Color, width: f64) {
    let Some((&(x0, y0), rest)) = points.split_first() else {
        return;
    };

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);

    if rest.is_empty() {
        ctx.new_path();
        ctx.arc(x0, y0, width / 2.0, 0.0, 2.0 * std::f64::consts::PI);
        let _ = ctx.fill();
        return;
    }

    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(x0, y0);
    for &(x, y) in rest {
        ctx.line_to(x, y);
    }

    let _ = ctx.stroke();
}
