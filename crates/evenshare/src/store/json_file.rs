//! File-backed store: one JSON object of string values.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use evenshare_core::logging::targets;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::error::{StoreError, StoreResult};
use super::KeyValueStore;

/// File name used inside the platform data directory.
pub const DEFAULT_FILE_NAME: &str = "preferences.json";

/// A [`KeyValueStore`] persisted as a single JSON file.
///
/// Writes replace the file atomically (write and sync a sibling temp file,
/// then rename), so a crash mid-write leaves either the old or the new contents.
/// All operations go through one async mutex, which gives write-before-read
/// visibility for every key.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Create a store in the platform data directory for Evenshare.
    pub fn in_data_dir() -> StoreResult<Self> {
        let dirs = ProjectDirs::from("app", "Evenshare", "Evenshare").ok_or_else(|| {
            StoreError::Unavailable("could not determine application directories".to_string())
        })?;
        Ok(Self::new(dirs.data_dir().join(DEFAULT_FILE_NAME)))
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> StoreResult<BTreeMap<String, String>> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| StoreError::corrupt(&self.path, e.to_string()))?;
        let serde_json::Value::Object(object) = value else {
            return Err(StoreError::corrupt(&self.path, "top-level value is not an object"));
        };

        let mut map = BTreeMap::new();
        for (key, value) in object {
            match value {
                serde_json::Value::String(s) => {
                    map.insert(key, s);
                }
                other => {
                    tracing::warn!(
                        target: targets::STORE,
                        key = %key,
                        kind = ?other,
                        "ignoring non-string entry in store file"
                    );
                }
            }
        }
        Ok(map)
    }

    async fn write_map(&self, map: &BTreeMap<String, String>) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(map)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        let mut file = tokio::fs::File::create(&temp)
            .await
            .map_err(|e| StoreError::io(&temp, e))?;
        file.write_all(&json).await.map_err(|e| StoreError::io(&temp, e))?;
        file.sync_all().await.map_err(|e| StoreError::io(&temp, e))?;
        drop(file);
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        tracing::trace!(target: targets::STORE, path = %self.path.display(), entries = map.len(), "store written");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        Ok(map.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}
