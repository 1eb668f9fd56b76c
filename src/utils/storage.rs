//! Persistent key-value storage.
//!
//! The session reads history and theme once at construction and rewrites a
//! key wholesale on every change. [`BrowserStore`] backs this with
//! localStorage; [`MemoryStore`] keeps values in memory for tests and for
//! browsers where localStorage is blocked.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use leptos::logging::warn;
use serde::{Serialize, de::DeserializeOwned};

use super::dom;
use crate::core::error::StorageError;

/// String key-value store.
pub trait KeyValueStore {
    /// Get the raw value for a key.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value for a key.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// localStorage-backed store.
///
/// Holds no handle; storage is looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    /// Check whether localStorage can be reached at all.
    pub fn is_available() -> bool {
        dom::local_storage().is_some()
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = dom::local_storage()?;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `(key, value)` pairs.
    pub fn with_values<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.extend(pairs.into_iter().map(|(k, v)| (k.to_string(), v.to_string())));
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError::WriteFailed(key.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read and deserialize a JSON value.
///
/// A missing key is `None`. An unparseable value is logged and treated as missing.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("[storage] ignoring unreadable '{}': {}", key, e);
            None
        }
    }
}

/// Serialize and write a JSON value.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json =
        serde_json::to_string(value).map_err(|_| StorageError::Serialize(key.to_string()))?;
    store.set(key, &json)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_store_round_trips() {
        let store = BrowserStore;
        assert!(BrowserStore::is_available());
        store.set("termfolio_test_key", "[\"pwd\"]").unwrap();
        let loaded: Option<Vec<String>> = load_json(&store, "termfolio_test_key");
        assert_eq!(loaded, Some(vec!["pwd".to_string()]));
    }
}
