//! Scripted scan backend.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::Gate;
use crate::domain::{
    PredictionResult, SelectedImage, StageError, UploadIdentity, UploadResult,
};
use crate::port::ScanBackend;

/// A recorded upload call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCall {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: usize,
    pub identity: UploadIdentity,
}

/// A recorded prediction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictCall {
    pub upload: UploadResult,
    pub identity: UploadIdentity,
}

/// Scan backend with scripted stage outcomes that records every call.
#[derive(Debug)]
pub struct ScriptedScanBackend {
    upload: Result<UploadResult, StageError>,
    predict: Result<PredictionResult, StageError>,
    uploads: Mutex<Vec<UploadCall>>,
    predictions: Mutex<Vec<PredictCall>>,
    upload_gate: Option<Arc<Gate>>,
}

impl ScriptedScanBackend {
    /// Both stages succeed.
    #[must_use]
    pub fn succeeding(upload: UploadResult, prediction: PredictionResult) -> Self {
        Self {
            upload: Ok(upload),
            predict: Ok(prediction),
            uploads: Mutex::new(Vec::new()),
            predictions: Mutex::new(Vec::new()),
            upload_gate: None,
        }
    }

    /// Make the upload stage fail with `error`.
    #[must_use]
    pub fn failing_upload(mut self, error: StageError) -> Self {
        self.upload = Err(error);
        self
    }

    /// Make the prediction stage fail with `error`.
    #[must_use]
    pub fn failing_predict(mut self, error: StageError) -> Self {
        self.predict = Err(error);
        self
    }

    /// Park every upload at `gate` before answering.
    #[must_use]
    pub fn gated_upload(mut self, gate: Arc<Gate>) -> Self {
        self.upload_gate = Some(gate);
        self
    }

    #[must_use]
    pub fn uploads(&self) -> Vec<UploadCall> {
        self.uploads.lock().clone()
    }

    #[must_use]
    pub fn predictions(&self) -> Vec<PredictCall> {
        self.predictions.lock().clone()
    }
}

#[async_trait]
impl ScanBackend for ScriptedScanBackend {
    async fn upload(
        &self,
        image: &SelectedImage,
        identity: &UploadIdentity,
    ) -> Result<UploadResult, StageError> {
        self.uploads.lock().push(UploadCall {
            file_name: image.file_name().to_string(),
            mime_type: image.mime_type().to_string(),
            bytes: image.len(),
            identity: identity.clone(),
        });
        if let Some(gate) = &self.upload_gate {
            gate.pass().await;
        }
        self.upload.clone()
    }

    async fn predict(
        &self,
        upload: &UploadResult,
        identity: &UploadIdentity,
    ) -> Result<PredictionResult, StageError> {
        self.predictions.lock().push(PredictCall {
            upload: upload.clone(),
            identity: identity.clone(),
        });
        self.predict.clone()
    }
}
