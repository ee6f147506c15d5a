use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::time::{Duration, Instant, sleep};

use crate::export::{
    dependencies::SaveDependencies,
    pipeline::{SaveRequest, perform_save},
    store::LocalStore,
    types::{ExportError, ExportSnapshot, SaveOutcome, SaveStatus},
};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Shared state for managing background saves.
///
/// Drawing never waits on a save: requests are queued and processed one at a
/// time on the runtime while the caller keeps handling input.
#[derive(Clone)]
pub struct SaveManager {
    /// Channel for sending save requests.
    request_tx: mpsc::UnboundedSender<SaveRequest>,
    /// Shared status of the current save.
    status: Arc<Mutex<SaveStatus>>,
    /// Shared result of the last save (if any).
    last_result: Arc<Mutex<Option<SaveOutcome>>>,
}

impl SaveManager {
    /// Create a save manager writing to a local store.
    ///
    /// # Arguments
    /// * `runtime_handle` - Tokio runtime handle for spawning async tasks
    /// * `store` - Where images and records go
    pub fn new(runtime_handle: &tokio::runtime::Handle, store: LocalStore) -> Self {
        Self::with_dependencies(runtime_handle, SaveDependencies::local(store))
    }

    /// Create a save manager with custom dependencies (useful for testing).
    pub fn with_dependencies(
        runtime_handle: &tokio::runtime::Handle,
        dependencies: SaveDependencies,
    ) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<SaveRequest>();
        let status = Arc::new(Mutex::new(SaveStatus::Idle));
        let last_result = Arc::new(Mutex::new(None));
        let dependencies = Arc::new(dependencies);

        let status_clone = status.clone();
        let result_clone = last_result.clone();
        let deps_clone = dependencies.clone();

        runtime_handle.spawn(async move {
            while let Some(request) = request_rx.recv().await {
                log::debug!("Processing save request for {}", request.owner);

                match perform_save(request, deps_clone.clone(), &status_clone).await {
                    Ok(result) => {
                        log::info!(
                            "Save successful: drawing #{} at {}",
                            result.record.id,
                            result.image.public_url
                        );
                        *status_clone.lock().await = SaveStatus::Success;
                        *result_clone.lock().await = Some(SaveOutcome::Success(result));
                    }
                    Err(e) => {
                        let error_message = e.to_string();
                        log::error!("Save failed: {}", error_message);
                        *status_clone.lock().await = SaveStatus::Failed(error_message.clone());
                        *result_clone.lock().await = Some(SaveOutcome::Failed(error_message));
                    }
                }
            }
        });

        Self {
            request_tx,
            status,
            last_result,
        }
    }

    /// Queue a save of `snapshot` for `owner`.
    ///
    /// This is non-blocking and returns immediately.
    pub fn request_save(
        &self,
        snapshot: ExportSnapshot,
        owner: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Result<(), ExportError> {
        let request = SaveRequest {
            snapshot,
            owner: owner.into(),
            file_name: file_name.into(),
        };

        self.request_tx
            .send(request)
            .map_err(|_| ExportError::ManagerClosed)
    }

    /// Get the current save status.
    pub async fn get_status(&self) -> SaveStatus {
        self.status.lock().await.clone()
    }

    /// Get the result of the last save and clear it.
    pub async fn take_result(&self) -> Option<SaveOutcome> {
        self.last_result.lock().await.take()
    }

    /// Try to get the result without waiting (non-blocking).
    pub fn try_take_result(&self) -> Option<SaveOutcome> {
        self.last_result.try_lock().ok().and_then(|mut r| r.take())
    }

    /// Poll until a result is available or `timeout` elapses.
    pub async fn wait_for_result(&self, timeout: Duration) -> Option<SaveOutcome> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(outcome) = self.take_result().await {
                return Some(outcome);
            }
            if Instant::now() >= deadline {
                return None;
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    /// Reset status to idle.
    pub async fn reset(&self) {
        *self.status.lock().await = SaveStatus::Idle;
    }
}

#[cfg(test)]
impl SaveManager {
    pub(crate) fn with_closed_channel_for_test() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<SaveRequest>();
        drop(rx);
        Self {
            request_tx: tx,
            status: Arc::new(Mutex::new(SaveStatus::Idle)),
            last_result: Arc::new(Mutex::new(None)),
        }
    }
}
