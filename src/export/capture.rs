//! Rasterization of a drawing snapshot to PNG.

use super::types::{ExportError, ExportSnapshot};
use crate::draw::{render_background, render_strokes};
use async_trait::async_trait;
use tokio::task;

/// Abstraction over how the rendered canvas becomes image bytes.
#[async_trait]
pub trait CanvasCapture: Send + Sync {
    /// Returns PNG-encoded bytes of the snapshot.
    async fn capture(&self, snapshot: &ExportSnapshot) -> Result<Vec<u8>, ExportError>;
}

/// Renders with Cairo on a blocking worker.
#[derive(Debug, Default, Clone, Copy)]
pub struct CairoCapture;

#[async_trait]
impl CanvasCapture for CairoCapture {
    async fn capture(&self, snapshot: &ExportSnapshot) -> Result<Vec<u8>, ExportError> {
        let snapshot = snapshot.clone();
        task::spawn_blocking(move || capture_png(&snapshot))
            .await
            .map_err(|e| ExportError::Task(format!("Capture task failed: {}", e)))?
    }
}

/// Renders the snapshot onto an ARGB32 image surface and encodes it as PNG.
///
/// The output matches what the live canvas shows: background first, then
/// every stroke in commit order.
pub fn capture_png(snapshot: &ExportSnapshot) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (snapshot.width, snapshot.height);
    let too_large = i32::try_from(width).is_err() || i32::try_from(height).is_err();
    if width == 0 || height == 0 || too_large {
        return Err(ExportError::InvalidSize { width, height });
    }

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        ctx.set_antialias(cairo::Antialias::Best);
        render_background(&ctx, snapshot.background);
        render_strokes(&ctx, &snapshot.strokes);
    }
    surface.flush();

    let mut buffer = Vec::new();
    surface
        .write_to_png(&mut buffer)
        .map_err(|e| ExportError::Encode(e.to_string()))?;

    log::debug!(
        "Captured {} stroke(s) at {}x{} ({} bytes)",
        snapshot.strokes.len(),
        width,
        height,
        buffer.len()
    );

    Ok(buffer)
}
