//! Tracker engine: storage, effect execution and the session owning state.
mod adapter;
mod config;
mod persist;
mod session;
mod store;
mod types;

pub use adapter::JsonStore;
pub use config::{Clock, TrackerConfig};
pub use persist::{ensure_storage_dir, AtomicFileWriter};
pub use session::{ApplyOutcome, Session};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use types::{SessionError, StoreError, WriteFailure};
