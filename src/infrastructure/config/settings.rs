//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Every section is optional; an empty file yields the defaults.
//!
//! # Example
//!
//! ```no_run
//! use catascan::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::backend::{BackendConfig, HttpConfig};
use super::geolocation::{GeolocationConfig, GeolocationProvider};
use super::logging::LoggingConfig;
use super::overpass::OverpassConfig;
use super::store::StoreConfig;
use crate::domain::Coordinate;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Where the user's position comes from.
    #[serde(default)]
    pub geolocation: GeolocationConfig,

    /// Geospatial query backend.
    #[serde(default)]
    pub overpass: OverpassConfig,

    /// Upload and prediction backend.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Shared HTTP client settings.
    #[serde(default)]
    pub http: HttpConfig,

    /// Persistent client store.
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation
    /// fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] when the file exists.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        check_url("overpass.url", &self.overpass.url)?;
        check_url("backend.base_url", &self.backend.base_url)?;

        if self.overpass.radius_m == 0 {
            return Err(invalid("overpass.radius_m", "must be greater than 0"));
        }
        if self.overpass.server_timeout_secs == 0 {
            return Err(invalid(
                "overpass.server_timeout_secs",
                "must be greater than 0",
            ));
        }
        if self.geolocation.timeout_ms == 0 {
            return Err(invalid("geolocation.timeout_ms", "must be greater than 0"));
        }
        if self.http.timeout_ms == 0 {
            return Err(invalid("http.timeout_ms", "must be greater than 0"));
        }
        if self.http.connect_timeout_ms == 0 {
            return Err(invalid("http.connect_timeout_ms", "must be greater than 0"));
        }

        match self.geolocation.provider {
            GeolocationProvider::Fixed => {
                let latitude = self.geolocation.latitude.ok_or(ConfigError::MissingField {
                    field: "geolocation.latitude",
                })?;
                let longitude = self.geolocation.longitude.ok_or(ConfigError::MissingField {
                    field: "geolocation.longitude",
                })?;
                if !Coordinate::new(latitude, longitude).is_valid() {
                    return Err(invalid(
                        "geolocation.latitude",
                        "coordinate must be within [-90, 90] x [-180, 180]",
                    ));
                }
            }
            GeolocationProvider::Ip => {
                check_url("geolocation.lookup_url", &self.geolocation.lookup_url)?;
            }
            GeolocationProvider::Disabled => {}
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
    .into()
}

#[allow(clippy::result_large_err)]
fn check_url(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    let url = Url::parse(value).map_err(|e| invalid(field, &e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(field, "scheme must be http or https"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.overpass.radius_m, 10_000);
        assert_eq!(config.overpass.server_timeout_secs, 25);
        assert_eq!(config.geolocation.provider, GeolocationProvider::Ip);
        assert!(config.geolocation.high_accuracy);
        assert_eq!(config.geolocation.timeout_ms, 10_000);
        assert_eq!(config.geolocation.maximum_age_ms, 0);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_fixed_provider_requires_coordinates() {
        let result = Config::parse_toml(
            r#"
[geolocation]
provider = "fixed"
latitude = 6.5244
"#,
        );
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField {
                field: "geolocation.longitude"
            }))
        ));
    }

    #[test]
    fn test_fixed_provider_rejects_out_of_range() {
        let result = Config::parse_toml(
            r#"
[geolocation]
provider = "fixed"
latitude = 95.0
longitude = 3.3792
"#,
        );
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_zero_radius_rejected() {
        let result = Config::parse_toml("[overpass]\nradius_m = 0\n");
        match result {
            Err(Error::Config(ConfigError::InvalidValue { field, .. })) => {
                assert_eq!(field, "overpass.radius_m");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_non_http_backend_rejected() {
        let result = Config::parse_toml("[backend]\nbase_url = \"ftp://example.com\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "backend.base_url",
                ..
            }))
        ));
    }

    #[test]
    fn test_disabled_provider_skips_lookup_url() {
        let config = Config::parse_toml(
            r#"
[geolocation]
provider = "disabled"
lookup_url = ""
"#,
        )
        .unwrap();
        assert_eq!(config.geolocation.provider, GeolocationProvider::Disabled);
    }
}
