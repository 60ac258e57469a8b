//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`geolocation`] - `ScriptedPosition`, a scripted position source (optionally gated).
//! - [`facility`] - `StaticFacilities` (optionally gated) and `SequencedFacilities` query backends.
//! - [`scan`] - `ScriptedScanBackend`, recording upload and prediction calls.
//! - [`store`] - `MemoryStore`, an in-memory key-value store.
//! - [`recording`] - `RecordingNotifier` and `RecordingNavigator`.
//! - [`domain`] - builders for raw features and images.

pub mod domain;
pub mod facility;
pub mod geolocation;
pub mod recording;
pub mod scan;
pub mod store;

use tokio::sync::Notify;

/// Suspends a scripted call until the test releases it.
///
/// Lets tests act (abandon, resubmit, reselect) while a flow is parked at
/// a suspension point.
#[derive(Debug, Default)]
pub struct Gate {
    entered: Notify,
    release: Notify,
}

impl Gate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called by the scripted double: signal arrival, then wait.
    pub async fn pass(&self) {
        self.entered.notify_one();
        self.release.notified().await;
    }

    /// Wait until a call is parked at the gate.
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    /// Let the parked call continue.
    pub fn open(&self) {
        self.release.notify_one();
    }
}
