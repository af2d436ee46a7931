//! In-memory store implementation

use crate::error::{StoreError, StoreResult};
use crate::KeyValueStore;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// An in-memory store implementation.
///
/// Values live in a `BTreeMap`, making it suitable for tests and for
/// sessions that should not touch the disk. Clones share the same data.
///
/// # Example
/// ```
/// use simcc_store::{KeyValueStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.set("k", "v").unwrap();
/// assert!(store.contains("k"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        match self.entries.read() {
            Ok(entries) => entries.contains_key(key),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(!store.contains("anything"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("c-programs", "[]").unwrap();
        assert_eq!(store.get("c-programs").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_overwrite() {
        let store = MemoryStore::new();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::with_entries([("k", "v")]);
        store.remove("k").unwrap();
        assert!(!store.contains("k"));
        // removing again is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_clone_shares_data() {
        let store1 = MemoryStore::new();
        store1.set("shared", "1").unwrap();

        let store2 = store1.clone();
        assert!(store2.contains("shared"));

        store2.set("shared", "2").unwrap();
        assert_eq!(store1.get("shared").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_concurrent_writes() {
        let store = MemoryStore::new();
        let mut handles = vec![];

        for i in 0..10 {
            let store_clone = store.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..10 {
                    store_clone.set("concurrent", &format!("data{}", i)).unwrap();
                    let _ = store_clone.get("concurrent");
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(store.contains("concurrent"));
    }
}
