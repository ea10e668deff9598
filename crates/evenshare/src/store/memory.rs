//! In-process store, used by tests and previews.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use super::error::{StoreError, StoreResult};
use super::KeyValueStore;

/// A write observed by a [`MemoryStore`], in completion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreWrite {
    /// `set(key, value)`.
    Set(String, String),
    /// `remove(key)`.
    Remove(String),
}

/// A [`KeyValueStore`] held in memory, with switches for simulating a
/// failing or slow medium.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<StoreWrite>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    write_delay: Mutex<Option<Duration>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store.data.lock().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }

    /// Make every `get` fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every `set` and `remove` fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Delay every write by `delay` before it lands.
    pub fn set_write_delay(&self, delay: Option<Duration>) {
        *self.write_delay.lock() = delay;
    }

    /// Current value of `key`, bypassing failure injection.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.data.lock().get(key).cloned()
    }

    /// All writes that landed so far.
    pub fn writes(&self) -> Vec<StoreWrite> {
        self.writes.lock().clone()
    }

    async fn before_write(&self) -> StoreResult<()> {
        let delay = *self.write_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("reads disabled".to_string()));
        }
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.before_write().await?;
        self.data.lock().insert(key.to_string(), value.to_string());
        self.writes
            .lock()
            .push(StoreWrite::Set(key.to_string(), value.to_string()));
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        self.before_write().await?;
        self.data.lock().remove(key);
        self.writes.lock().push(StoreWrite::Remove(key.to_string()));
        Ok(())
    }
}
