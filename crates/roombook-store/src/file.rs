//! JSON-file store implementation.
//!
//! The whole store is one JSON object of string values. It is read once
//! on open and replaced on every mutation via a temp file and rename.
//! Memory only changes once the new file is in place.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use roombook_core::error::AppError;
use roombook_core::result::AppResult;
use roombook_core::traits::store::KeyValueStore;

/// Key-value store persisted to a JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, creating an empty one if the file is missing.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::with_source(
                    roombook_core::error::ErrorKind::Storage,
                    format!("Corrupt store file {}: {e}", path.display()),
                    e,
                )
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), keys = entries.len(), "Opened file store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `op` to a copy and keeps it only once it is on disk.
    fn mutate<F>(&self, op: F) -> AppResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::storage("File store lock poisoned"))?;
        let mut next = entries.clone();
        op(&mut next);
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }

    /// Writes a sibling temp file, then renames it over the store file.
    fn flush(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.temp_path()?;
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&tmp, json)?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(AppError::with_source(
                roombook_core::error::ErrorKind::Storage,
                format!("Failed to replace store file {}", self.path.display()),
                e,
            ));
        }
        Ok(())
    }

    fn temp_path(&self) -> AppResult<PathBuf> {
        let mut name = self
            .path
            .file_name()
            .ok_or_else(|| {
                AppError::storage(format!("Store path {} has no file name", self.path.display()))
            })?
            .to_os_string();
        name.push(".tmp");
        Ok(self.path.with_file_name(name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| AppError::storage("File store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.mutate(|entries| {
            entries.remove(key);
        })
    }
}
