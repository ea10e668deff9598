//! Durable key-value storage.
//!
//! The layout layer persists exactly one small preference, so the storage
//! contract is a flat string-to-string map with asynchronous access:
//!
//! ```ignore
//! use evenshare::store::{JsonFileStore, KeyValueStore};
//!
//! let store = JsonFileStore::new("preferences.json");
//! store.set("selectedLanguage", "ar").await?;
//! assert_eq!(store.get("selectedLanguage").await?, Some("ar".to_string()));
//! store.remove("selectedLanguage").await?;
//! ```
//!
//! # Ordering
//!
//! Every backend guarantees that a completed `set` or `remove` is visible to
//! any later `get` of the same key. Nothing is promised across keys.

mod error;
mod json_file;
mod memory;

use std::future::Future;

pub use error::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::{MemoryStore, StoreWrite};

/// An asynchronous, durable string map.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> impl Future<Output = StoreResult<Option<String>>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = StoreResult<()>> + Send;

    /// Remove `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> impl Future<Output = StoreResult<()>> + Send;
}

impl<S: KeyValueStore> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> impl Future<Output = StoreResult<Option<String>>> + Send {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> impl Future<Output = StoreResult<()>> + Send {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> impl Future<Output = StoreResult<()>> + Send {
        (**self).remove(key)
    }
}
