//! JSON-file key-value store.
//!
//! The whole map is read on every `get` and rewritten on every `set`. The
//! store holds a handful of keys, so there is no caching.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;
use crate::port::KeyValueStore;

/// Key-value store persisted as a flat JSON object.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or written.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read()?;
        map.insert(key.to_string(), value.to_string());
        self.write(&map)
    }

    /// Remove `key`. Returns whether it was present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or written.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let mut map = self.read()?;
        let removed = map.remove(key).is_some();
        if removed {
            self.write(&map)?;
        }
        Ok(removed)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.read() {
            Ok(mut map) => map.remove(key),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable client store");
                None
            }
        }
    }
}
