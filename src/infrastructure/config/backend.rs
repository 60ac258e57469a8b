//! Scan backend and HTTP client configuration.

use serde::Deserialize;

/// Upload and prediction backend endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_upload_path")]
    pub upload_path: String,

    #[serde(default = "default_predict_path")]
    pub predict_path: String,
}

impl BackendConfig {
    /// Full upload endpoint URL.
    #[must_use]
    pub fn upload_url(&self) -> String {
        join_url(&self.base_url, &self.upload_path)
    }

    /// Full prediction endpoint URL.
    #[must_use]
    pub fn predict_url(&self) -> String {
        join_url(&self.base_url, &self.predict_path)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            upload_path: default_upload_path(),
            predict_path: default_predict_path(),
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn default_base_url() -> String {
    "https://catascan-app-backend.onrender.com".into()
}

fn default_upload_path() -> String {
    "/upload-image".into()
}

fn default_predict_path() -> String {
    "/predict".into()
}

/// HTTP client settings shared by all adapters.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout in milliseconds. Defaults to 60000; the
    /// scan backend can take a while to wake up.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Connection timeout in milliseconds. Defaults to 10000.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    60_000
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = BackendConfig::default();
        assert_eq!(
            config.upload_url(),
            "https://catascan-app-backend.onrender.com/upload-image"
        );
        assert_eq!(
            config.predict_url(),
            "https://catascan-app-backend.onrender.com/predict"
        );
    }

    #[test]
    fn test_join_tolerates_slashes() {
        assert_eq!(join_url("http://a/", "/b"), "http://a/b");
        assert_eq!(join_url("http://a", "b"), "http://a/b");
    }
}
