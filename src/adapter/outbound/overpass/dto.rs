//! Overpass API response shapes.

use serde::Deserialize;

use crate::domain::RawFeature;

/// Body of an `[out:json]` interpreter response.
///
/// Only `elements` is consumed; `remark` carries runtime errors the server
/// reports with a 200 status (for example a query timeout).
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<RawFeature>,
    #[serde(default)]
    pub remark: Option<String>,
}

impl OverpassResponse {
    /// Remark text when it reports a runtime error.
    #[must_use]
    pub fn runtime_error(&self) -> Option<&str> {
        self.remark
            .as_deref()
            .filter(|remark| remark.to_ascii_lowercase().contains("error"))
    }
}
