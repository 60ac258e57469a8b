//! HTTP client for the upload and prediction endpoints.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, Response};
use tracing::debug;

use super::dto::{error_message, parse_upload, PredictRequest, FILE_FIELD, USER_ID_FIELD};
use crate::adapter::outbound::overpass::client::build_http;
use crate::domain::{PredictionResult, SelectedImage, StageError, UploadIdentity, UploadResult};
use crate::infrastructure::config::backend::{BackendConfig, HttpConfig};
use crate::port::ScanBackend;

/// Client for the scan backend.
pub struct ScanClient {
    http: HttpClient,
    upload_url: String,
    predict_url: String,
}

impl ScanClient {
    #[must_use]
    pub fn from_config(config: &BackendConfig, http: &HttpConfig) -> Self {
        Self {
            http: build_http(http),
            upload_url: config.upload_url(),
            predict_url: config.predict_url(),
        }
    }
}

fn transport(err: reqwest::Error) -> StageError {
    StageError::Transport(err.to_string())
}

/// Read the body and split on status.
async fn read_body(response: Response) -> Result<String, StageError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(StageError::Rejected {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

#[async_trait]
impl ScanBackend for ScanClient {
    async fn upload(
        &self,
        image: &SelectedImage,
        identity: &UploadIdentity,
    ) -> Result<UploadResult, StageError> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.mime_type())
            .map_err(|e| StageError::Transport(e.to_string()))?;
        let form = Form::new()
            .part(FILE_FIELD, part)
            .text(USER_ID_FIELD, identity.as_str().to_string());

        debug!(url = %self.upload_url, bytes = image.len(), "Uploading image");
        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        let body = read_body(response).await?;
        parse_upload(&body)
    }

    async fn predict(
        &self,
        upload: &UploadResult,
        identity: &UploadIdentity,
    ) -> Result<PredictionResult, StageError> {
        let request = PredictRequest {
            image_url: &upload.image_url,
            scan_id: &upload.scan_id,
            user_id: identity.as_str(),
        };

        debug!(url = %self.predict_url, scan_id = %upload.scan_id, "Requesting prediction");
        let response = self
            .http
            .post(&self.predict_url)
            .json(&request)
            .send()
            .await
            .map_err(transport)?;

        let body = read_body(response).await?;
        let payload =
            serde_json::from_str(&body).map_err(|e| StageError::Malformed(e.to_string()))?;
        Ok(PredictionResult::new(payload))
    }
}
