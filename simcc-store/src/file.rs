//! On-disk store implementation

use crate::error::{StoreError, StoreResult};
use crate::KeyValueStore;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A store that keeps each key in its own file.
///
/// `key` maps to `<dir>/<key>.json`. The directory is created on the first
/// write. Keys that could escape the directory are rejected.
///
/// # Example
/// ```
/// use simcc_store::FileStore;
///
/// let store = FileStore::new(std::env::temp_dir().join("simcc_doc_example"));
/// assert!(store.path_for("../escape").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory of this store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let invalid = |reason: &str| StoreError::InvalidKey {
            key: key.to_string(),
            reason: reason.to_string(),
        };
        if key.is_empty() {
            return Err(invalid("empty"));
        }
        if key.contains(['/', '\\']) {
            return Err(invalid("contains a path separator"));
        }
        if key.contains("..") {
            return Err(invalid("contains '..'"));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, value)?;
        debug!(target: "simcc::store", path = %path.display(), bytes = value.len(), "value written");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.path_for(key).map(|p| p.is_file()).unwrap_or(false)
    }
}
