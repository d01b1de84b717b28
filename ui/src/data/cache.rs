//! Load-once cache for the raw table.
//!
//! The desktop shell builds one [`DatasetCache`] per process and hands it to the
//! component tree through context. Every window reads the same immutable
//! [`DatasetState`]; only [`DatasetCache::invalidate`] causes a re-read.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, error};

use super::loader::load_dataset;
use super::table::Dataset;

/// Outcome of a load attempt: the table plus a user-facing error, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetState {
    pub dataset: Dataset,
    pub error: Option<String>,
}

impl DatasetState {
    /// Reads the workbook, folding any failure into an empty table and a message.
    pub fn load(path: &Path) -> Self {
        match load_dataset(path) {
            Ok(dataset) => Self {
                dataset,
                error: None,
            },
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to load lab results");
                Self {
                    dataset: Dataset::empty(),
                    error: Some(format!("Error loading data: {err}")),
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct DatasetCache {
    source: PathBuf,
    slot: Mutex<Option<Arc<DatasetState>>>,
}

impl DatasetCache {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            slot: Mutex::new(None),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the cached state, reading the workbook on first use.
    pub fn get_or_load(&self) -> Arc<DatasetState> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(state) = slot.as_ref() {
            debug!("dataset cache hit");
            return Arc::clone(state);
        }

        let state = Arc::new(DatasetState::load(&self.source));
        *slot = Some(Arc::clone(&state));
        state
    }

    pub fn is_loaded(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Drops the cached table so the next [`get_or_load`](Self::get_or_load) re-reads it.
    pub fn invalidate(&self) {
        debug!(path = %self.source.display(), "dataset cache invalidated");
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}
