//! Overpass interpreter HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::dto::OverpassResponse;
use crate::domain::{QueryError, QuerySpec, RawFeature};
use crate::infrastructure::config::backend::HttpConfig;
use crate::infrastructure::config::overpass::OverpassConfig;
use crate::port::FacilitySource;

/// Sent on every request; the public instances ask clients to identify.
pub(crate) const USER_AGENT: &str = concat!("catascan/", env!("CARGO_PKG_VERSION"));

/// HTTP client for an Overpass API interpreter endpoint.
pub struct OverpassClient {
    http: HttpClient,
    url: String,
}

impl OverpassClient {
    /// Create a client for the configured interpreter endpoint.
    #[must_use]
    pub fn from_config(config: &OverpassConfig, http: &HttpConfig) -> Self {
        Self {
            http: build_http(http),
            url: config.url.clone(),
        }
    }
}

/// Shared client builder for the outbound HTTP adapters.
pub(crate) fn build_http(config: &HttpConfig) -> HttpClient {
    HttpClient::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_millis(config.timeout_ms))
        .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
        .build()
        .unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        })
}

#[async_trait]
impl FacilitySource for OverpassClient {
    async fn fetch(&self, query: &QuerySpec) -> Result<Vec<RawFeature>, QueryError> {
        debug!(url = %self.url, radius_m = query.radius_m, "Posting Overpass query");

        let response = self
            .http
            .post(&self.url)
            .form(&query.form())
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;
        parse_body(&body)
    }
}

fn parse_body(body: &str) -> Result<Vec<RawFeature>, QueryError> {
    let parsed: OverpassResponse =
        serde_json::from_str(body).map_err(|e| QueryError::Parse(e.to_string()))?;
    if let Some(remark) = parsed.runtime_error() {
        return Err(QueryError::Transport(remark.to_string()));
    }
    Ok(parsed.elements)
}
