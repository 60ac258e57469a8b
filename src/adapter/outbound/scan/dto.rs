//! Scan backend wire shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{StageError, UploadResult};

/// Multipart field carrying the image bytes.
pub const FILE_FIELD: &str = "file";

/// Multipart field carrying the user identifier.
pub const USER_ID_FIELD: &str = "user_id";

/// Body of a prediction request.
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub image_url: &'a str,
    pub scan_id: &'a str,
    pub user_id: &'a str,
}

/// Error body the backend sends with non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Server message from an error body, when the body is JSON with an
/// `error` string.
#[must_use]
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
}

/// Extract `image_url` and `scan_id` from a successful upload body.
///
/// `scan_id` is accepted as a string or a number.
///
/// # Errors
///
/// Returns [`StageError::Malformed`] when the body is not JSON or either
/// field is missing.
pub fn parse_upload(body: &str) -> Result<UploadResult, StageError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| StageError::Malformed(e.to_string()))?;

    let image_url = value
        .get("image_url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| StageError::Malformed("missing image_url".into()))?;

    let scan_id = match value.get("scan_id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => return Err(StageError::Malformed("missing scan_id".into())),
    };

    Ok(UploadResult {
        image_url: image_url.to_string(),
        scan_id,
    })
}
