//! Declarative facility query.

use serde::Serialize;

use super::coordinate::Coordinate;

/// A geospatial query ready to send to the query backend.
///
/// `text` is the complete filter-language query. Two specs built from the
/// same center and radius carry byte-identical text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySpec {
    pub center: Coordinate,
    pub radius_m: u32,
    pub text: String,
}

impl QuerySpec {
    /// Form fields for the URL-encoded request body.
    #[must_use]
    pub fn form(&self) -> [(&'static str, &str); 1] {
        [("data", self.text.as_str())]
    }
}
