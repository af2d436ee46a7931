//! Program repository
//!
//! The ordered list of saved programs, kept in memory and written through to
//! a [`KeyValueStore`] as one JSON array under a single key. The front end
//! owns one repository and passes it by reference to whatever needs it.

use crate::error::ApiError;
use crate::types::{now_millis, ProgramDraft, ProgramRecord};
use simcc_store::KeyValueStore;
use tracing::{debug, error, info, warn};

pub struct ProgramRepository<S: KeyValueStore> {
    store: S,
    key: String,
    programs: Vec<ProgramRecord>,
}

impl<S: KeyValueStore> ProgramRepository<S> {
    /// Empty repository; call [`load`](Self::load) to read existing programs
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            programs: Vec::new(),
        }
    }

    /// Repository loaded from the store
    pub fn open(store: S, key: impl Into<String>) -> Result<Self, ApiError> {
        let mut repo = Self::new(store, key);
        repo.load()?;
        Ok(repo)
    }

    /// Replace the in-memory list with what the store holds
    ///
    /// A missing key yields an empty list. Data that does not parse is
    /// logged and discarded (also yielding an empty list); only storage
    /// failures are errors. Returns the number of programs loaded.
    pub fn load(&mut self) -> Result<usize, ApiError> {
        self.programs = match self.store.get(&self.key)? {
            None => Vec::new(),
            Some(text) => match serde_json::from_str(&text) {
                Ok(programs) => programs,
                Err(e) => {
                    error!(target: "simcc::store", key = %self.key, "Error loading programs: {}", e);
                    Vec::new()
                }
            },
        };
        debug!(target: "simcc::store", count = self.programs.len(), "programs loaded");
        Ok(self.programs.len())
    }

    /// Write the whole list to the store
    pub fn save(&self) -> Result<(), ApiError> {
        self.persist(&self.programs)
    }

    /// Append a program and save; returns its index
    ///
    /// The in-memory list only changes once the store accepted the write.
    pub fn add(&mut self, draft: ProgramDraft) -> Result<usize, ApiError> {
        let record = draft.into_record(now_millis())?;
        let mut next = self.programs.clone();
        next.push(record);
        self.commit(next)?;

        let index = self.programs.len() - 1;
        info!(target: "simcc::store", index, title = %self.programs[index].title, "program added");
        Ok(index)
    }

    /// Replace the program at `index` and save
    pub fn update(&mut self, index: usize, draft: ProgramDraft) -> Result<(), ApiError> {
        self.check_index(index)?;
        let record = draft.into_record(now_millis())?;
        let mut next = self.programs.clone();
        next[index] = record;
        self.commit(next)?;

        info!(target: "simcc::store", index, title = %self.programs[index].title, "program updated");
        Ok(())
    }

    /// Remove the program at `index` and save; returns the removed record
    pub fn delete(&mut self, index: usize) -> Result<ProgramRecord, ApiError> {
        self.check_index(index)?;
        let mut next = self.programs.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!(target: "simcc::store", index, title = %removed.title, "program deleted");
        Ok(removed)
    }

    pub fn get(&self, index: usize) -> Option<&ProgramRecord> {
        self.programs.get(index)
    }

    /// Program at `index`, or `ProgramNotFound`
    pub fn require(&self, index: usize) -> Result<&ProgramRecord, ApiError> {
        self.check_index(index)?;
        Ok(&self.programs[index])
    }

    pub fn list(&self) -> &[ProgramRecord] {
        &self.programs
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Save `next`, then make it the current list
    fn commit(&mut self, next: Vec<ProgramRecord>) -> Result<(), ApiError> {
        if let Err(e) = self.persist(&next) {
            warn!(target: "simcc::store", key = %self.key, error = %e, "save failed, keeping previous list");
            return Err(e);
        }
        self.programs = next;
        Ok(())
    }

    fn persist(&self, programs: &[ProgramRecord]) -> Result<(), ApiError> {
        let text = serde_json::to_string(programs)?;
        self.store.set(&self.key, &text)?;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ApiError> {
        if index < self.programs.len() {
            Ok(())
        } else {
            Err(ApiError::ProgramNotFound {
                index,
                len: self.programs.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simcc_store::{MemoryStore, StoreError, StoreResult};
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Memory store whose writes can be switched off
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        failing: AtomicBool,
    }

    impl FlakyStore {
        fn fail_writes(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> StoreResult<()> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(StoreError::Io {
                    message: "disk full".to_string(),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> StoreResult<()> {
            self.inner.remove(key)
        }

        fn contains(&self, key: &str) -> bool {
            self.inner.contains(key)
        }
    }

    const KEY: &str = "c-programs";

    fn draft(title: &str) -> ProgramDraft {
        ProgramDraft::new(title, "", "int main() { return 0; }")
    }

    #[test]
    fn test_open_missing_key_is_empty() {
        let repo = ProgramRepository::open(MemoryStore::new(), KEY).unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn test_add_persists() {
        let store = MemoryStore::new();
        let mut repo = ProgramRepository::new(store.clone(), KEY);
        assert_eq!(repo.add(draft("first")).unwrap(), 0);
        assert_eq!(repo.add(draft("second")).unwrap(), 1);

        let reopened = ProgramRepository::open(store, KEY).unwrap();
        let titles: Vec<&str> = reopened.list().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert!(reopened.list()[0].timestamp > 0);
    }

    #[test]
    fn test_invalid_draft_is_not_added() {
        let store = MemoryStore::new();
        let mut repo = ProgramRepository::new(store.clone(), KEY);
        assert!(matches!(
            repo.add(ProgramDraft::new("", "", "x")),
            Err(ApiError::MissingTitle)
        ));
        assert!(repo.is_empty());
        assert!(!store.contains(KEY));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut repo = ProgramRepository::new(MemoryStore::new(), KEY);
        repo.add(draft("a")).unwrap();
        repo.add(draft("b")).unwrap();

        repo.update(0, ProgramDraft::new("a2", "edited", "int main() {}"))
            .unwrap();
        assert_eq!(repo.get(0).unwrap().title, "a2");
        assert_eq!(repo.get(0).unwrap().description, "edited");
        assert_eq!(repo.get(1).unwrap().title, "b");
    }

    #[test]
    fn test_update_out_of_range() {
        let mut repo = ProgramRepository::new(MemoryStore::new(), KEY);
        assert_eq!(
            repo.update(0, draft("x")),
            Err(ApiError::ProgramNotFound { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        let mut repo = ProgramRepository::new(store.clone(), KEY);
        repo.add(draft("a")).unwrap();
        repo.add(draft("b")).unwrap();

        let removed = repo.delete(0).unwrap();
        assert_eq!(removed.title, "a");
        assert_eq!(repo.len(), 1);
        assert_eq!(ProgramRepository::open(store, KEY).unwrap().len(), 1);
        assert!(repo.delete(5).is_err());
    }

    #[test]
    fn test_corrupt_data_loads_empty() {
        let store = MemoryStore::with_entries([(KEY, "{not json")]);
        let repo = ProgramRepository::open(store, KEY).unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn test_loads_existing_json() {
        let stored = r#"[{"title":"Hi","description":"","code":"int main() {}","timestamp":1700000000000}]"#;
        let repo = ProgramRepository::open(MemoryStore::with_entries([(KEY, stored)]), KEY).unwrap();
        assert_eq!(repo.require(0).unwrap().timestamp, 1_700_000_000_000);
        assert!(repo.require(1).is_err());
    }

    #[test]
    fn test_failed_save_leaves_list_unchanged() {
        let store = FlakyStore::default();
        let mut repo = ProgramRepository::new(&store, KEY);
        repo.add(draft("kept")).unwrap();

        store.fail_writes(true);
        assert!(matches!(repo.add(draft("lost")), Err(ApiError::Store(_))));
        assert_eq!(repo.len(), 1);
        assert!(repo.update(0, draft("renamed")).is_err());
        assert_eq!(repo.require(0).unwrap().title, "kept");
        assert!(repo.delete(0).is_err());
        assert_eq!(repo.len(), 1);

        store.fail_writes(false);
        repo.add(draft("second")).unwrap();
        let reopened = ProgramRepository::open(&store, KEY).unwrap();
        let titles: Vec<&str> = reopened.list().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["kept", "second"]);
    }

    #[test]
    fn test_invalid_store_key_does_not_add() {
        let dir = std::env::temp_dir().join(format!("simcc_repo_badkey_{}", std::process::id()));
        let mut repo = ProgramRepository::new(simcc_store::FileStore::new(&dir), "../bad");
        assert!(repo.add(draft("x")).is_err());
        assert!(repo.is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
