//! The key-value persistence seam.
//!
//! The core never talks to a concrete storage backend; it holds a
//! `Box<dyn KeyValueStore>` and reads/writes whole serialized collections
//! by named key.  `MemoryStore` is the reference implementation, also used
//! throughout the tests.

use std::collections::HashMap;
use std::sync::Mutex;

use compass_contracts::{CompassError, CompassResult};

/// A string-keyed store holding one serialized value per named record.
///
/// Implementations must treat each `set` as an atomic whole-collection
/// replacement; the core coalesces writes so a single user command produces
/// at most one `set` per collection.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> CompassResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> CompassResult<()>;

    /// Delete the value stored under `key`.  Removing an absent key is not
    /// an error.
    fn remove(&self, key: &str) -> CompassResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> CompassResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> CompassResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> CompassResult<()> {
        (**self).remove(key)
    }
}

/// An in-memory `KeyValueStore` backed by a mutex-protected map.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.  Test helper.
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CompassResult<Option<String>> {
        let records = self.records.lock().map_err(|e| CompassError::Storage {
            reason: format!("store lock poisoned: {}", e),
        })?;
        Ok(records.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CompassResult<()> {
        let mut records = self.records.lock().map_err(|e| CompassError::Storage {
            reason: format!("store lock poisoned: {}", e),
        })?;
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CompassResult<()> {
        let mut records = self.records.lock().map_err(|e| CompassError::Storage {
            reason: format!("store lock poisoned: {}", e),
        })?;
        records.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v1".to_string()));

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v2".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn removing_absent_key_is_ok() {
        let store = MemoryStore::new();
        store.remove("missing").unwrap();
    }
}
