//! Device geolocation capability port.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Coordinate, LocationError};

/// Options passed with every position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    /// Request the most accurate fix the device can produce.
    pub high_accuracy: bool,
    /// Give up after this long.
    pub timeout: Duration,
    /// Oldest cached position the caller accepts. Zero forces a fresh fix.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::ZERO,
        }
    }
}

/// Source of the device's current position.
///
/// One call is one attempt; implementations never retry.
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Return the source name for logging.
    fn name(&self) -> &'static str;

    /// Whether the host exposes a geolocation capability at all.
    fn is_available(&self) -> bool {
        true
    }

    /// Request the current position.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError`] when permission is denied, the fix times
    /// out, or no position can be determined.
    async fn request_position(&self, options: &PositionOptions)
        -> Result<Coordinate, LocationError>;
}
