use std::io;

use thiserror::Error;
use tracker_core::{CoreError, Document};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage directory missing or not writable: {0}")]
    Directory(String),
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("storage quota exceeded writing {key}: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },
    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("rejected: {0}")]
    Core(#[from] CoreError),
}

/// A write that did not reach the store. In-memory state still holds the change.
#[derive(Debug)]
pub struct WriteFailure {
    pub document: Document,
    pub error: StoreError,
}
