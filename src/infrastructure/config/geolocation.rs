//! Geolocation provider configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::port::PositionOptions;

/// Which position source to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeolocationProvider {
    /// Approximate position from the public IP address.
    #[default]
    Ip,
    /// A fixed position from `latitude`/`longitude`.
    Fixed,
    /// No geolocation capability.
    Disabled,
}

/// Geolocation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeolocationConfig {
    #[serde(default)]
    pub provider: GeolocationProvider,

    /// Latitude for the `fixed` provider.
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude for the `fixed` provider.
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Lookup endpoint for the `ip` provider.
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,

    /// Request the most accurate fix available. Defaults to true.
    #[serde(default = "default_high_accuracy")]
    pub high_accuracy: bool,

    /// Give up after this many milliseconds. Defaults to 10000.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Oldest acceptable cached fix. Defaults to 0 (always fresh).
    #[serde(default)]
    pub maximum_age_ms: u64,
}

impl GeolocationConfig {
    /// Options passed with each position request.
    #[must_use]
    pub fn options(&self) -> PositionOptions {
        PositionOptions {
            high_accuracy: self.high_accuracy,
            timeout: Duration::from_millis(self.timeout_ms),
            maximum_age: Duration::from_millis(self.maximum_age_ms),
        }
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            provider: GeolocationProvider::default(),
            latitude: None,
            longitude: None,
            lookup_url: default_lookup_url(),
            high_accuracy: default_high_accuracy(),
            timeout_ms: default_timeout_ms(),
            maximum_age_ms: 0,
        }
    }
}

fn default_lookup_url() -> String {
    "http://ip-api.com/json/?fields=status,message,lat,lon".into()
}

fn default_high_accuracy() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    10_000
}
