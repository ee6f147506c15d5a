use crate::export::{ExportError, ExportSnapshot};

use super::DrawingSession;

impl DrawingSession {
    /// Prepares the drawing for capture.
    ///
    /// An in-progress gesture is finalized first, exactly as if its pointer
    /// had lifted, so the snapshot never contains a half-drawn stroke.
    /// The committed strokes are cloned; nothing the save pipeline does can
    /// alter this session.
    ///
    /// # Errors
    /// [`ExportError::NothingToSave`] when no stroke is committed.
    pub fn prepare_export(&mut self) -> Result<ExportSnapshot, ExportError> {
        if self.is_drawing() {
            log::debug!("Finalizing in-progress gesture before export");
            self.finish_gesture();
        }

        if self.frame.is_empty() {
            return Err(ExportError::NothingToSave);
        }

        Ok(ExportSnapshot {
            strokes: self.frame.strokes().to_vec(),
            background: self.settings.background,
            width: self.settings.canvas_width,
            height: self.settings.canvas_height,
        })
    }
}
