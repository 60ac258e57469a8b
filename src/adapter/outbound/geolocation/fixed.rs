//! Static position sources.

use async_trait::async_trait;

use crate::domain::{Coordinate, LocationError};
use crate::port::{PositionOptions, PositionSource};

/// Always reports the same coordinate.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition {
    coordinate: Coordinate,
}

impl FixedPosition {
    #[must_use]
    pub const fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

#[async_trait]
impl PositionSource for FixedPosition {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn request_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinate, LocationError> {
        Ok(self.coordinate)
    }
}

/// A host with no geolocation capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeolocation;

#[async_trait]
impl PositionSource for NoGeolocation {
    fn name(&self) -> &'static str {
        "disabled"
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn request_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinate, LocationError> {
        Err(LocationError::PositionUnavailable(
            "geolocation is disabled".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_position() {
        let source = FixedPosition::new(Coordinate::new(6.5244, 3.3792));
        let fix = source
            .request_position(&PositionOptions::default())
            .await
            .unwrap();
        assert_eq!(fix, Coordinate::new(6.5244, 3.3792));
        assert!(source.is_available());
    }

    #[test]
    fn test_disabled_is_unavailable() {
        assert!(!NoGeolocation.is_available());
    }
}
