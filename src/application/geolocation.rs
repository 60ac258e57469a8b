//! Geolocation provider: one fresh position fix per discovery.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{Coordinate, GeolocationError, LocationError};
use crate::port::{PositionOptions, PositionSource};

/// Acquires the device position through a [`PositionSource`].
///
/// A single attempt per call, bounded by the configured timeout. Never
/// retries.
pub struct GeolocationProvider {
    source: Arc<dyn PositionSource>,
    options: PositionOptions,
}

impl GeolocationProvider {
    /// Create a provider with default options (high accuracy, 10 s
    /// timeout, no cached positions).
    #[must_use]
    pub fn new(source: Arc<dyn PositionSource>) -> Self {
        Self::with_options(source, PositionOptions::default())
    }

    #[must_use]
    pub fn with_options(source: Arc<dyn PositionSource>, options: PositionOptions) -> Self {
        Self { source, options }
    }

    #[must_use]
    pub fn options(&self) -> &PositionOptions {
        &self.options
    }

    /// Acquire the current position.
    ///
    /// # Errors
    ///
    /// - [`GeolocationError::CapabilityUnavailable`] when the source reports
    ///   no capability; no request is made.
    /// - [`LocationError::Timeout`] when no fix arrives within the timeout.
    /// - Any [`LocationError`] reported by the source. A fix outside WGS84
    ///   bounds is reported as `PositionUnavailable`.
    pub async fn acquire(&self) -> Result<Coordinate, GeolocationError> {
        if !self.source.is_available() {
            warn!(source = self.source.name(), "Geolocation capability unavailable");
            return Err(GeolocationError::CapabilityUnavailable);
        }

        debug!(
            source = self.source.name(),
            high_accuracy = self.options.high_accuracy,
            timeout_ms = self.options.timeout.as_millis() as u64,
            "Requesting position"
        );

        let request = self.source.request_position(&self.options);
        let coordinate = match tokio::time::timeout(self.options.timeout, request).await {
            Ok(result) => result?,
            Err(_) => return Err(LocationError::Timeout.into()),
        };

        if !coordinate.is_valid() {
            return Err(LocationError::PositionUnavailable(format!(
                "coordinate out of range: {coordinate}"
            ))
            .into());
        }

        debug!(lat = coordinate.lat, lng = coordinate.lng, "Position acquired");
        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testkit::geolocation::ScriptedPosition;

    #[tokio::test]
    async fn test_acquire_returns_fix() {
        let source = Arc::new(ScriptedPosition::fix(37.0, -122.0));
        let provider = GeolocationProvider::new(source.clone());

        assert_eq!(provider.acquire().await, Ok(Coordinate::new(37.0, -122.0)));
        assert_eq!(source.requests(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_capability_makes_no_request() {
        let source = Arc::new(ScriptedPosition::unavailable());
        let provider = GeolocationProvider::new(source.clone());

        assert_eq!(
            provider.acquire().await,
            Err(GeolocationError::CapabilityUnavailable)
        );
        assert_eq!(source.requests(), 0);
    }

    #[tokio::test]
    async fn test_source_error_is_surfaced() {
        let source = Arc::new(ScriptedPosition::error(LocationError::PermissionDenied(
            "User denied Geolocation".into(),
        )));
        let provider = GeolocationProvider::new(source);

        assert_eq!(
            provider.acquire().await,
            Err(GeolocationError::Location(LocationError::PermissionDenied(
                "User denied Geolocation".into()
            )))
        );
    }

    #[tokio::test]
    async fn test_hanging_source_times_out() {
        let options = PositionOptions {
            timeout: Duration::from_millis(20),
            ..PositionOptions::default()
        };
        let provider =
            GeolocationProvider::with_options(Arc::new(ScriptedPosition::hang()), options);

        assert_eq!(
            provider.acquire().await,
            Err(GeolocationError::Location(LocationError::Timeout))
        );
    }

    #[tokio::test]
    async fn test_out_of_range_fix_is_unavailable() {
        let provider = GeolocationProvider::new(Arc::new(ScriptedPosition::fix(123.0, 0.0)));
        assert!(matches!(
            provider.acquire().await,
            Err(GeolocationError::Location(LocationError::PositionUnavailable(_)))
        ));
    }

    #[test]
    fn test_default_options() {
        let provider = GeolocationProvider::new(Arc::new(ScriptedPosition::fix(0.0, 0.0)));
        let options = provider.options();
        assert!(options.high_accuracy);
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.maximum_age, Duration::ZERO);
    }
}
