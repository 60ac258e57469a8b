//! Results of the two scan stages.

use serde::{Deserialize, Serialize};

/// Output of the upload stage, consumed exactly once by the prediction stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub image_url: String,
    pub scan_id: String,
}

/// Inference payload, passed to the results screen without interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionResult(serde_json::Value);

impl PredictionResult {
    #[must_use]
    pub fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }

    #[must_use]
    pub fn payload(&self) -> &serde_json::Value {
        &self.0
    }
}
