use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum LocalStateError {
    #[error("Local state I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Local state is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// File-backed key/value state shared by the whole process
pub struct LocalStateStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl LocalStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>, LocalStateError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Store `value` serialized as a JSON string under `key`, replacing any previous value
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), LocalStateError> {
        let serialized = serde_json::to_string(value)?;

        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), serialized);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write to a sibling file then rename so readers never see a partial file
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, serde_json::to_vec_pretty(&entries)?).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        tracing::debug!("Local state key '{}' written to {}", key, self.path.display());
        Ok(())
    }

    /// Raw JSON string stored under `key`
    pub async fn get(&self, key: &str) -> Result<Option<String>, LocalStateError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_entries().await?.remove(key))
    }
}
