//! Image validation and the current selection.

use parking_lot::RwLock;

use crate::domain::{ImageCandidate, SelectedImage, ValidationError};

const IMAGE_MIME_PREFIX: &str = "image/";

/// Validate a candidate image.
///
/// The only rule: the declared MIME type starts with `image/` (compared
/// case-insensitively, as MIME types are).
///
/// # Errors
///
/// Returns [`ValidationError::NotAnImage`] otherwise; the candidate is
/// dropped.
pub fn validate(candidate: ImageCandidate) -> Result<SelectedImage, ValidationError> {
    let is_image = candidate
        .mime_type
        .get(..IMAGE_MIME_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(IMAGE_MIME_PREFIX));

    if !is_image {
        return Err(ValidationError::NotAnImage {
            mime_type: candidate.mime_type,
        });
    }
    Ok(SelectedImage::from_candidate(candidate))
}

/// The image currently chosen for scanning.
///
/// Re-selection replaces it wholesale; a rejected candidate leaves it
/// untouched.
#[derive(Debug, Default)]
pub struct ImageSelection {
    current: RwLock<Option<SelectedImage>>,
}

impl ImageSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `candidate` and make it the current selection.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] from [`validate`]; the prior
    /// selection is retained.
    pub fn select(&self, candidate: ImageCandidate) -> Result<(), ValidationError> {
        let image = validate(candidate)?;
        *self.current.write() = Some(image);
        Ok(())
    }

    /// Drop the current selection.
    pub fn clear(&self) {
        *self.current.write() = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<SelectedImage> {
        self.current.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str) -> ImageCandidate {
        ImageCandidate::new(name, "image/png", vec![0x89, b'P', b'N', b'G'])
    }

    #[test]
    fn test_accepts_image_types() {
        for mime in ["image/png", "image/jpeg", "IMAGE/HEIC"] {
            assert!(validate(ImageCandidate::new("x", mime, vec![1])).is_ok(), "{mime}");
        }
    }

    #[test]
    fn test_rejects_non_images() {
        for mime in ["text/plain", "application/pdf", "", "image"] {
            assert_eq!(
                validate(ImageCandidate::new("x", mime, vec![1])),
                Err(ValidationError::NotAnImage {
                    mime_type: mime.to_string()
                })
            );
        }
    }

    #[test]
    fn test_rejected_candidate_keeps_prior_selection() {
        let selection = ImageSelection::new();
        selection.select(png("eye.png")).unwrap();

        let err = selection
            .select(ImageCandidate::new("notes.txt", "text/plain", b"hello".to_vec()))
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotAnImage { .. }));
        assert_eq!(selection.current().unwrap().file_name(), "eye.png");
    }

    #[test]
    fn test_reselection_replaces_and_clear_removes() {
        let selection = ImageSelection::new();
        selection.select(png("first.png")).unwrap();
        selection.select(png("second.png")).unwrap();
        assert_eq!(selection.current().unwrap().file_name(), "second.png");

        selection.clear();
        assert!(selection.current().is_none());
    }
}
