use std::{fmt, sync::Arc};

use tokio::sync::Mutex;

use crate::export::{
    dependencies::SaveDependencies,
    types::{ExportError, ExportSnapshot, NewDrawingRecord, SaveResult, SaveStatus},
};

#[derive(Clone)]
pub(crate) struct SaveRequest {
    pub(crate) snapshot: ExportSnapshot,
    pub(crate) owner: String,
    pub(crate) file_name: String,
}

impl fmt::Debug for SaveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveRequest")
            .field("strokes", &self.snapshot.strokes.len())
            .field("owner", &self.owner)
            .field("file_name", &self.file_name)
            .finish()
    }
}

/// Runs capture, upload and record in order, stopping at the first failure.
pub(crate) async fn perform_save(
    request: SaveRequest,
    dependencies: Arc<SaveDependencies>,
    status: &Mutex<SaveStatus>,
) -> Result<SaveResult, ExportError> {
    log::info!("Starting save: {:?}", request);

    // Step 1: Rasterize
    *status.lock().await = SaveStatus::Capturing;
    let image_data = dependencies.capture.capture(&request.snapshot).await?;
    let image_bytes = image_data.len();
    log::debug!("Encoded drawing ({} bytes)", image_bytes);

    // Step 2: Upload
    *status.lock().await = SaveStatus::Uploading;
    let image = dependencies
        .store
        .upload_image(&request.file_name, image_data)
        .await?;
    log::info!("Uploaded drawing to {}", image.public_url);

    // Step 3: Record metadata; an uploaded image without a row is left in place
    *status.lock().await = SaveStatus::Recording;
    let record = dependencies
        .store
        .insert_record(NewDrawingRecord {
            owner: request.owner,
            image_url: image.public_url.clone(),
        })
        .await?;

    Ok(SaveResult {
        record,
        image,
        image_bytes,
    })
}
