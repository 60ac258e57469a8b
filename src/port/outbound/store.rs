//! Persistent client-side key-value store port.

/// Key under which the signed-in user's identifier is stored.
pub const USER_ID_KEY: &str = "user_id";

/// Read access to the persistent client store.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}
