//! Data types for capture and save.

use crate::draw::{Color, Stroke};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Everything needed to rasterize a drawing, detached from the live session.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSnapshot {
    /// Committed strokes in draw order
    pub strokes: Vec<Stroke>,
    /// Paper color
    pub background: Color,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

/// Where an uploaded image ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Backend-local location of the object
    pub path: PathBuf,
    /// URL readers can fetch the image from
    pub public_url: String,
}

/// Metadata row to insert for a newly uploaded drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDrawingRecord {
    /// Account the drawing belongs to
    pub owner: String,
    /// Public URL of the uploaded image
    pub image_url: String,
}

/// A stored drawing's metadata row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingRecord {
    /// Identifier assigned by the store
    pub id: u64,
    pub owner: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Result of a completed save.
#[derive(Debug, Clone)]
pub struct SaveResult {
    /// The metadata row that was written
    pub record: DrawingRecord,
    /// Where the PNG was uploaded
    pub image: StoredImage,
    /// Size of the encoded PNG
    pub image_bytes: usize,
}

/// Outcome of a save request (success or failure).
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    Success(SaveResult),
    Failed(String),
}

/// Stage of the save currently in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// Nothing has been requested yet.
    Idle,
    /// Rasterizing the canvas.
    Capturing,
    /// Sending the PNG to the store.
    Uploading,
    /// Writing the metadata row.
    Recording,
    /// The last save completed.
    Success,
    /// The last save failed.
    Failed(String),
}

/// Errors that can occur while exporting or saving a drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to save: the canvas has no strokes")]
    NothingToSave,

    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Cairo error: {0}")]
    Surface(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Failed to record drawing: {0}")]
    Record(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Metadata serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(String),

    #[error("Save manager is not running")]
    ManagerClosed,
}
