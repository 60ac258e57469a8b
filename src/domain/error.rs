//! Error taxonomy for both flows.
//!
//! Each stage has its own error type. At the flow boundary every stage
//! error is reduced to a [`FlowError`], which carries a [`Stage`] tag and
//! renders as the message shown to the user. Nothing past the flow
//! boundary sees the stage-specific types.

use thiserror::Error;

use super::flow::Stage;

/// Failure reported by the device geolocation capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("timed out waiting for a position fix")]
    Timeout,

    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
}

/// Failure of the geolocation provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    /// The host exposes no geolocation capability; nothing was attempted.
    #[error("geolocation is not supported on this device")]
    CapabilityUnavailable,

    #[error(transparent)]
    Location(#[from] LocationError),
}

/// Transport or parse failure of the geospatial query backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP error! Status: {status}")]
    Status { status: u16 },

    #[error("invalid response: {0}")]
    Parse(String),
}

/// The persistent store holds no user identifier.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityError {
    #[error("no user ID found")]
    Missing,
}

/// Image validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select an image file (got {mime_type})")]
    NotAnImage { mime_type: String },

    #[error("Please upload or capture an image first")]
    NothingSelected,
}

/// Why a new selection was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("the image cannot change while a scan is in progress")]
    InFlight,
}

/// Failure of a remote scan stage (upload or prediction).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    /// Network unreachable, connection reset, timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx status, with the server's `error` message when it sent one.
    #[error("rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// 2xx status but the body lacks required fields or is not JSON.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl StageError {
    /// The server-provided message, falling back to `generic`.
    #[must_use]
    pub fn display_message(&self, generic: &str) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => generic.to_string(),
        }
    }
}

/// A state transition that the current flow state does not allow.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("a submission is already in progress")]
    AlreadyLoading,

    #[error("no submission is in progress")]
    NotLoading,
}

/// Stage-tagged failure stored in [`FlowState::Failed`](super::flow::FlowState).
///
/// `Display` yields the message presentation code shows to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Geolocation is not supported on this device.")]
    CapabilityUnavailable,

    #[error("Failed to get location: {0}")]
    Location(LocationError),

    #[error("Failed to fetch facilities: {0}")]
    QueryTransport(String),

    #[error("No user ID found. Please sign in or sign up.")]
    IdentityMissing,

    #[error("{0}")]
    Validation(ValidationError),

    #[error("{0}")]
    UploadFailed(String),

    #[error("{0}")]
    PredictionFailed(String),
}

impl FlowError {
    /// The stage that raised this error.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::CapabilityUnavailable | Self::Location(_) => Stage::Geolocation,
            Self::QueryTransport(_) => Stage::Query,
            Self::IdentityMissing => Stage::Identity,
            Self::Validation(_) => Stage::Validation,
            Self::UploadFailed(_) => Stage::Upload,
            Self::PredictionFailed(_) => Stage::Prediction,
        }
    }
}

impl From<GeolocationError> for FlowError {
    fn from(err: GeolocationError) -> Self {
        match err {
            GeolocationError::CapabilityUnavailable => Self::CapabilityUnavailable,
            GeolocationError::Location(err) => Self::Location(err),
        }
    }
}

impl From<QueryError> for FlowError {
    fn from(err: QueryError) -> Self {
        Self::QueryTransport(err.to_string())
    }
}

impl From<IdentityError> for FlowError {
    fn from(_: IdentityError) -> Self {
        Self::IdentityMissing
    }
}

impl From<ValidationError> for FlowError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}
