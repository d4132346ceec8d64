//! Client-side storage model.
//!
//! The browser app keeps its records in client-side storage under well-known
//! keys. Here that store is an explicit object handed to load/save calls
//! rather than ambient global state: callers own the backend (in-memory,
//! disk, IndexedDB bridge) and the record types own the (de)serialization.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

use crate::error::StorageError;

/// Well-known storage keys.
pub mod keys {
    /// Persisted tag-style registry override.
    pub const TAG_STYLES: &str = "bible.tagStyles";
    /// Reader settings.
    pub const SETTINGS: &str = "bible.settings";
    /// Reading history.
    pub const HISTORY: &str = "bible.history";
    /// Reading plans.
    pub const PLANS: &str = "bible.plans";
}

/// String key-value store, the shape client-side storage exposes.
pub trait Storage {
    /// Fetch the raw value at `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` at `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: String);
    /// Remove the value at `key`, if any.
    fn remove(&mut self, key: &str);
}

/// In-memory store; also the test double.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Load a record, falling back to its default on absent or malformed data.
///
/// Malformed data is recovered locally and logged; it never reaches the
/// caller as an error.
pub fn load_or_default<T>(store: &dyn Storage, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("ignoring malformed record at {key}: {err}");
            T::default()
        }
    }
}

/// Serialize a record and store it under `key`.
pub fn save<T: Serialize>(
    store: &mut dyn Storage,
    key: &'static str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)
        .map_err(|source| StorageError::Serialize { key, source })?;
    store.put(key, raw);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        store.put("k", "v".to_string());
        assert_eq!(store.get("k"), Some("v".to_string()));
        assert_eq!(store.len(), 1);
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn load_falls_back_on_missing_and_malformed() {
        let mut store = MemoryStore::new();
        let missing: Vec<u32> = load_or_default(&store, "absent");
        assert!(missing.is_empty());

        store.put("bad", "not-json".to_string());
        let malformed: Vec<u32> = load_or_default(&store, "bad");
        assert!(malformed.is_empty());
    }

    #[test]
    fn save_then_load() {
        let mut store = MemoryStore::new();
        save(&mut store, "nums", &vec![1u32, 2, 3]).unwrap();
        let back: Vec<u32> = load_or_default(&store, "nums");
        assert_eq!(back, vec![1, 2, 3]);
    }
}
