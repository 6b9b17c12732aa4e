// Standard library
use std::fs;
use std::path::PathBuf;

// 3rd party crates
use tokio::sync::Mutex;
use tracing::debug;

// Current module imports
use super::errors::StoreError;
use super::types::{DomainMap, RecordStore};

impl RecordStore {
    /// Opens a store at the given document path. The document is created on
    /// the first write; a missing document reads as an empty map.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// A snapshot of the whole document.
    pub async fn load(&self) -> Result<DomainMap, StoreError> {
        let _guard = self.lock.lock().await;
        self.read_document()
    }

    /// Runs one load→mutate→save cycle under the store lock and returns the
    /// closure's result. The document is rewritten whether or not the
    /// closure changed anything; callers signal "no change" through `T`.
    pub async fn update<T>(&self, mutate: impl FnOnce(&mut DomainMap) -> T) -> Result<T, StoreError> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_document()?;
        let out = mutate(&mut map);
        self.write_document(&map)?;
        Ok(out)
    }

    fn read_document(&self) -> Result<DomainMap, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Record store document missing, starting empty");
            return Ok(DomainMap::default());
        }

        let raw: String = fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        serde_json::from_str(&raw).map_err(|e| StoreError::Malformed {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write_document(&self, map: &DomainMap) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(map).map_err(|e| StoreError::Malformed {
            path: self.path.clone(),
            source: e,
        })?;
        fs::write(&self.path, raw).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
