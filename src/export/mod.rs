//! Saving drawings for inkpad.
//!
//! This module turns a finished drawing into a stored artifact:
//! - Rasterizing the committed strokes to PNG
//! - Uploading the image to a drawing store
//! - Recording a metadata row that points at it
//! - Running all of the above in the background

pub mod capture;
pub mod file;
pub mod store;
pub mod types;

mod dependencies;
mod manager;
mod pipeline;

pub use capture::{CairoCapture, CanvasCapture, capture_png};
pub use dependencies::SaveDependencies;
pub use manager::SaveManager;
pub use store::{DrawingStore, LocalStore};
pub use types::{
    DrawingRecord, ExportError, ExportSnapshot, NewDrawingRecord, SaveOutcome, SaveResult,
    SaveStatus, StoredImage,
};
