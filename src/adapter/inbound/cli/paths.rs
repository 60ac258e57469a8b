//! Path utilities for catascan.
//!
//! All data lives under `~/.catascan/`:
//! - `~/.catascan/config.toml` - main configuration
//! - `~/.catascan/store.json` - persistent client store (signed-in user)

use std::path::PathBuf;

/// Returns the catascan home directory (`~/.catascan/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".catascan")
}

/// Returns the default config file path (`~/.catascan/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default client store path (`~/.catascan/store.json`).
pub fn default_store() -> PathBuf {
    home_dir().join("store.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_catascan_home() {
        let home = home_dir();
        assert!(home.to_string_lossy().contains(".catascan"));
        assert!(default_config().starts_with(&home));
        assert!(default_store().starts_with(&home));
        assert!(default_store().ends_with("store.json"));
    }
}
