//! Geospatial query backend port.

use async_trait::async_trait;

use crate::domain::{QueryError, QuerySpec, RawFeature};

/// Executes facility queries against a geospatial backend.
#[async_trait]
pub trait FacilitySource: Send + Sync {
    /// Run `query` and return the raw `elements` of the response.
    ///
    /// An empty vector is a successful answer, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] for transport failures, non-2xx statuses,
    /// and unparseable bodies.
    async fn fetch(&self, query: &QuerySpec) -> Result<Vec<RawFeature>, QueryError>;
}
