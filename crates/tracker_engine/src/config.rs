use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use tracker_core::Catalog;

/// Timestamp source for audit records.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Clone)]
pub struct TrackerConfig {
    /// Directory of the file-backed store.
    pub storage_dir: PathBuf,
    pub clock: Clock,
    pub catalog: Catalog,
}

impl TrackerConfig {
    pub fn with_storage_dir(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            ..Self::default()
        }
    }

    /// Uses a fixed timestamp for every audit record.
    pub fn with_fixed_clock(mut self, timestamp: impl Into<String>) -> Self {
        let timestamp = timestamp.into();
        self.clock = Arc::new(move || timestamp.clone());
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./tracker_state"),
            clock: Arc::new(|| Local::now().to_rfc3339()),
            catalog: Catalog::seed(),
        }
    }
}

impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("storage_dir", &self.storage_dir)
            .field("catalog_len", &self.catalog.len())
            .finish_non_exhaustive()
    }
}
