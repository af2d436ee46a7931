//! simcc Key-Value Store
//!
//! A string-keyed storage abstraction with multiple backend implementations,
//! standing in for the browser's local storage.
//!
//! # Usage
//! ```rust
//! use simcc_store::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("c-programs", "[]").unwrap();
//! assert_eq!(store.get("c-programs").unwrap().as_deref(), Some("[]"));
//! ```

mod error;
mod file;
mod memory;
mod r#trait;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use r#trait::KeyValueStore;
