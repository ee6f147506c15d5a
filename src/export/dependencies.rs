use std::sync::Arc;

use crate::export::{
    capture::{CairoCapture, CanvasCapture},
    store::{DrawingStore, LocalStore},
};

/// Bundle of dependencies used by the save pipeline. Each component can be mocked in tests.
#[derive(Clone)]
pub struct SaveDependencies {
    pub capture: Arc<dyn CanvasCapture>,
    pub store: Arc<dyn DrawingStore>,
}

impl SaveDependencies {
    /// Cairo rendering into a filesystem store.
    pub fn local(store: LocalStore) -> Self {
        Self {
            capture: Arc::new(CairoCapture),
            store: Arc::new(store),
        }
    }
}
