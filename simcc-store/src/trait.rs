//! KeyValueStore trait definition

use crate::error::StoreResult;

/// Key-value store trait
///
/// Maps a string key to a string value (the serialized program list).
///
/// # Implementations
/// - `MemoryStore`: In-memory store
/// - `FileStore`: One file per key under a directory
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `Ok(None)` when the key has never been written
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Check if `key` holds a value
    fn contains(&self, key: &str) -> bool;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }
}
