//! Geospatial query backend configuration.

use serde::Deserialize;

use crate::application::query::{DEFAULT_RADIUS_M, DEFAULT_SERVER_TIMEOUT_SECS};
use crate::application::FacilityQueryBuilder;

/// Overpass API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassConfig {
    /// Interpreter endpoint.
    #[serde(default = "default_url")]
    pub url: String,

    /// Search radius in meters. Defaults to 10000.
    #[serde(default = "default_radius_m")]
    pub radius_m: u32,

    /// Server-side evaluation timeout in seconds. Defaults to 25.
    #[serde(default = "default_server_timeout_secs")]
    pub server_timeout_secs: u32,
}

impl OverpassConfig {
    #[must_use]
    pub fn query_builder(&self) -> FacilityQueryBuilder {
        FacilityQueryBuilder::new(self.radius_m).with_server_timeout(self.server_timeout_secs)
    }
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            radius_m: default_radius_m(),
            server_timeout_secs: default_server_timeout_secs(),
        }
    }
}

fn default_url() -> String {
    "https://overpass-api.de/api/interpreter".into()
}

fn default_radius_m() -> u32 {
    DEFAULT_RADIUS_M
}

fn default_server_timeout_secs() -> u32 {
    DEFAULT_SERVER_TIMEOUT_SECS
}
