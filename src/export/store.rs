//! Storage backends for saved drawings.
//!
//! A store has two jobs: hold the PNG bytes somewhere readable by URL, and
//! keep a metadata row per drawing. [`LocalStore`] does both on disk:
//!
//! ```text
//! <directory>/images/<name>.png
//! <directory>/drawings.jsonl      one DrawingRecord per line
//! ```

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::task;
use url::Url;

use super::file;
use super::types::{DrawingRecord, ExportError, NewDrawingRecord, StoredImage};

const IMAGES_DIR: &str = "images";
const RECORDS_FILE: &str = "drawings.jsonl";

/// Abstraction over object storage plus the drawings table.
#[async_trait]
pub trait DrawingStore: Send + Sync {
    /// Stores PNG bytes under `file_name` and returns where they can be read.
    async fn upload_image(
        &self,
        file_name: &str,
        image_data: Vec<u8>,
    ) -> Result<StoredImage, ExportError>;

    /// Inserts a metadata row; the store assigns id and timestamp.
    async fn insert_record(&self, record: NewDrawingRecord) -> Result<DrawingRecord, ExportError>;
}

/// Filesystem-backed store.
#[derive(Debug, Clone)]
pub struct LocalStore {
    directory: PathBuf,
}

impl LocalStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn images_dir(&self) -> PathBuf {
        self.directory.join(IMAGES_DIR)
    }

    pub fn records_path(&self) -> PathBuf {
        self.directory.join(RECORDS_FILE)
    }

    /// Reads every record written so far, oldest first.
    ///
    /// A missing records file means nothing has been saved yet.
    pub fn load_records(&self) -> Result<Vec<DrawingRecord>, ExportError> {
        read_records(&self.records_path())
    }

    /// One owner's drawings, newest first.
    pub fn records_for(&self, owner: &str) -> Result<Vec<DrawingRecord>, ExportError> {
        let mut records: Vec<_> = self
            .load_records()?
            .into_iter()
            .filter(|r| r.owner == owner)
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }
}

#[async_trait]
impl DrawingStore for LocalStore {
    async fn upload_image(
        &self,
        file_name: &str,
        image_data: Vec<u8>,
    ) -> Result<StoredImage, ExportError> {
        let images_dir = self.images_dir();
        let file_name = file_name.to_string();

        let path = task::spawn_blocking(move || {
            file::save_image(&image_data, &images_dir, &file_name)
        })
        .await
        .map_err(|e| ExportError::Task(format!("Upload task failed: {}", e)))?
        .map_err(|e| ExportError::Upload(e.to_string()))?;

        let public_url = Url::from_file_path(&path)
            .map_err(|_| {
                ExportError::Upload(format!("No file URL for {}", path.display()))
            })?
            .to_string();

        Ok(StoredImage { path, public_url })
    }

    async fn insert_record(&self, record: NewDrawingRecord) -> Result<DrawingRecord, ExportError> {
        let records_path = self.records_path();

        task::spawn_blocking(move || append_record(&records_path, record))
            .await
            .map_err(|e| ExportError::Task(format!("Record task failed: {}", e)))?
            .map_err(|e| match e {
                ExportError::Record(_) => e,
                other => ExportError::Record(other.to_string()),
            })
    }
}

fn read_records(path: &Path) -> Result<Vec<DrawingRecord>, ExportError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(fs::File::open(path)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}

fn append_record(path: &Path, record: NewDrawingRecord) -> Result<DrawingRecord, ExportError> {
    if let Some(parent) = path.parent() {
        file::ensure_directory_exists(parent)?;
    }

    let next_id = read_records(path)?
        .iter()
        .map(|r| r.id)
        .max()
        .unwrap_or(0)
        + 1;

    let row = DrawingRecord {
        id: next_id,
        owner: record.owner,
        image_url: record.image_url,
        created_at: Utc::now(),
    };

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    writeln!(file, "{}", serde_json::to_string(&row)?)?;

    log::info!("Recorded drawing #{} for {}", row.id, row.owner);
    Ok(row)
}
