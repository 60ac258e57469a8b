//! Persistent client store adapters.

pub mod file;

pub use file::FileStore;
