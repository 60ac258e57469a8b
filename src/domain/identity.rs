//! Upload identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque user identifier attached to uploads and predictions.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UploadIdentity(String);

impl UploadIdentity {
    /// Create a new `UploadIdentity` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UploadIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UploadIdentity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
