//! Implements KeyValueStorePort using a JSON file.
//!
//! The whole store is one JSON object (key -> string value), cached in memory
//! and rewritten on every `set`.

use crate::domain::DomainError;
use crate::ports::KeyValueStorePort;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    values: BTreeMap<String, String>,
}

/// JSON file-based key-value store.
pub struct JsonFileStore {
    path: PathBuf,
    cache: tokio::sync::RwLock<StoreData>,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: tokio::sync::RwLock::new(StoreData::default()),
        }
    }

    /// Load the store from disk. A missing file is an empty store; an unreadable
    /// or corrupt one is logged and treated as empty (the next `set` overwrites it).
    pub async fn load(&self) -> Result<(), DomainError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "store file is corrupt, ignoring");
                StoreData::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "store file is unreadable, ignoring");
                StoreData::default()
            }
        };
        *self.cache.write().await = data;
        Ok(())
    }

    /// Atomic save using write-replace pattern.
    /// 1. Write to temp file
    /// 2. sync_all() to ensure flush to disk
    /// 3. Atomic rename to target path
    async fn save(&self, data: &StoreData) -> Result<(), DomainError> {
        let json =
            serde_json::to_string_pretty(data).map_err(|e| DomainError::Storage(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Storage(format!("create store dir: {}", e)))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Storage(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Storage(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Storage(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Storage(format!("atomic rename failed: {}", e)))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStorePort for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let cache = self.cache.read().await;
        Ok(cache.values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        // Held across save so concurrent sets cannot persist out of order.
        let mut cache = self.cache.write().await;
        cache.values.insert(key.to_string(), value.to_string());
        self.save(&cache).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("store.json"));
        store.load().await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = JsonFileStore::new(&path);
        store.load().await.unwrap();
        store.set("wordlens.history", r#"["run"]"#).await.unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        let reopened = JsonFileStore::new(&path);
        reopened.load().await.unwrap();
        assert_eq!(
            reopened.get("wordlens.history").await.unwrap().as_deref(),
            Some(r#"["run"]"#)
        );
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{{{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        store.load().await.unwrap();
        assert_eq!(store.get("wordlens.history").await.unwrap(), None);

        store.set("a", "1").await.unwrap();
        let reopened = JsonFileStore::new(&path);
        reopened.load().await.unwrap();
        assert_eq!(reopened.get("a").await.unwrap().as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_unreadable_path_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be: read fails with something other than NotFound.
        let path = dir.path().join("store.json");
        std::fs::create_dir(&path).unwrap();

        let store = JsonFileStore::new(&path);
        store.load().await.unwrap();
        assert_eq!(store.get("wordlens.history").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalid_utf8_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        let store = JsonFileStore::new(&path);
        store.load().await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);
    }
}
