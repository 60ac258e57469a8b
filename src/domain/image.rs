//! Image candidates and validated selections.

use std::fmt;
use std::sync::Arc;

/// A file offered for scanning, before validation.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageCandidate {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

impl fmt::Debug for ImageCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageCandidate")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// An image that passed validation.
///
/// Held in memory only. Cloning shares the underlying bytes, so an
/// in-flight submission keeps its own read-only view even if the user
/// later clears or replaces the selection.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedImage {
    file_name: String,
    mime_type: String,
    bytes: Arc<[u8]>,
}

impl SelectedImage {
    /// Only constructed by the validator.
    pub(crate) fn from_candidate(candidate: ImageCandidate) -> Self {
        Self {
            file_name: candidate.file_name,
            mime_type: candidate.mime_type,
            bytes: candidate.bytes.into(),
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
