//! Upload and prediction backend port.

use async_trait::async_trait;

use crate::domain::{PredictionResult, SelectedImage, StageError, UploadIdentity, UploadResult};

/// The two remote stages of an image scan.
///
/// Each method is a single attempt. The diagnosis flow calls `predict`
/// only with the result of a successful `upload`.
#[async_trait]
pub trait ScanBackend: Send + Sync {
    /// Store the image and register a scan for `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`StageError`] on transport failure, non-2xx status, or a
    /// success body missing `image_url`/`scan_id`.
    async fn upload(
        &self,
        image: &SelectedImage,
        identity: &UploadIdentity,
    ) -> Result<UploadResult, StageError>;

    /// Run inference on an uploaded image.
    ///
    /// # Errors
    ///
    /// Returns [`StageError`] on transport failure or non-2xx status.
    async fn predict(
        &self,
        upload: &UploadResult,
        identity: &UploadIdentity,
    ) -> Result<PredictionResult, StageError>;
}
