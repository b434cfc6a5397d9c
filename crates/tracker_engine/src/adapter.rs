use serde::de::DeserializeOwned;
use serde::Serialize;
use tracker_logging::{tracker_debug, tracker_warn};

use crate::{KeyValueStore, StoreError};

/// JSON encoding over a [`KeyValueStore`].
///
/// Loads fail soft to the caller's default; saves report errors and leave the
/// decision to the caller.
#[derive(Debug, Clone)]
pub struct JsonStore<S> {
    store: S,
}

impl<S: KeyValueStore> JsonStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Returns the stored value, or `default` when it is missing, unreadable
    /// or not the expected shape.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracker_debug!("No stored value for {key}; using default");
                return default;
            }
            Err(err) => {
                tracker_warn!("Failed to read {key}: {err}; using default");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracker_warn!("Stored value for {key} is corrupt ({err}); using default");
                default
            }
        }
    }

    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let content = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &content)
    }
}
