//! Approximate position from an IP geolocation lookup.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Coordinate, LocationError};
use crate::port::{PositionOptions, PositionSource};

/// IP lookup service answering with `status`, `lat`, `lon`.
pub struct IpGeolocation {
    http: HttpClient,
    lookup_url: String,
}

impl IpGeolocation {
    #[must_use]
    pub fn new(http: HttpClient, lookup_url: impl Into<String>) -> Self {
        Self {
            http,
            lookup_url: lookup_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

impl LookupResponse {
    fn into_coordinate(self) -> Result<Coordinate, LocationError> {
        if let Some(status) = self.status.as_deref() {
            if status != "success" {
                return Err(LocationError::PositionUnavailable(
                    self.message.unwrap_or_else(|| status.to_string()),
                ));
            }
        }
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinate::new(lat, lon)),
            _ => Err(LocationError::PositionUnavailable(
                "lookup returned no coordinates".into(),
            )),
        }
    }
}

#[async_trait]
impl PositionSource for IpGeolocation {
    fn name(&self) -> &'static str {
        "ip"
    }

    async fn request_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinate, LocationError> {
        debug!(url = %self.lookup_url, "Looking up approximate position");

        let response = self
            .http
            .get(&self.lookup_url)
            .timeout(options.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LocationError::Timeout
                } else {
                    LocationError::PositionUnavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if status.as_u16() == 403 {
            return Err(LocationError::PermissionDenied(format!(
                "lookup refused with status {status}"
            )));
        }
        if !status.is_success() {
            return Err(LocationError::PositionUnavailable(format!(
                "lookup failed with status {status}"
            )));
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| LocationError::PositionUnavailable(e.to_string()))?;
        body.into_coordinate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<Coordinate, LocationError> {
        serde_json::from_str::<LookupResponse>(body)
            .unwrap()
            .into_coordinate()
    }

    #[test]
    fn test_success_response() {
        let fix = parse(r#"{"status": "success", "lat": 6.45, "lon": 3.39}"#).unwrap();
        assert_eq!(fix, Coordinate::new(6.45, 3.39));
    }

    #[test]
    fn test_fail_status_uses_message() {
        let err = parse(r#"{"status": "fail", "message": "reserved range"}"#).unwrap_err();
        assert_eq!(
            err,
            LocationError::PositionUnavailable("reserved range".into())
        );
    }

    #[test]
    fn test_missing_coordinates() {
        assert!(matches!(
            parse(r#"{"status": "success"}"#),
            Err(LocationError::PositionUnavailable(_))
        ));
    }
}
