// ============================
// schedura-lib/src/storage.rs
// ============================
//! Key/value store abstraction with in-memory and flat-file implementations.
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::{fs as tokio_fs, sync::Mutex};

use crate::error::AppError;

/// File the flat-file store keeps its entries in
pub const STORE_FILE_NAME: &str = "storage.json";

/// Trait for persisted key/value backends
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Write a value, replacing any previous one. Empty values are rejected.
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Remove a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<(), AppError>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        (**self).remove(key).await
    }
}

fn reject_empty(key: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "Value for '{key}' must not be empty"
        )));
    }
    Ok(())
}

/// Process-local store, used by tests and as a fallback
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        reject_empty(key, value)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Flat-file implementation: one JSON object under the data directory
#[derive(Clone)]
pub struct FlatFileStore {
    path: PathBuf,
    // serialises read-modify-write cycles within the process
    write_lock: Arc<Mutex<()>>,
}

impl FlatFileStore {
    pub fn new<P: AsRef<Path>>(root: P) -> anyhow::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self {
            path: root.join(STORE_FILE_NAME),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, AppError> {
        if !tokio_fs::try_exists(&self.path).await? {
            return Ok(BTreeMap::new());
        }

        let content = tokio_fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(entries)?;

        // write next to the target, then rename over it
        let tmp = self.path.with_extension("json.tmp");
        tokio_fs::write(&tmp, json).await?;
        tokio_fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FlatFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self.load().await?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        reject_empty(key, value)?;

        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.save(&entries).await?;
        }
        Ok(())
    }
}
