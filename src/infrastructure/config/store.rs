//! Persistent client store configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::adapter::inbound::cli::paths;

/// Location of the persistent key-value store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Store file. Defaults to `~/.catascan/store.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(paths::default_store)
    }
}
