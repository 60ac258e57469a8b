//! Identity resolver.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{IdentityError, UploadIdentity};
use crate::port::{KeyValueStore, USER_ID_KEY};

/// Looks up the signed-in user's identifier in the persistent store.
pub struct IdentityResolver {
    store: Arc<dyn KeyValueStore>,
}

impl IdentityResolver {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Resolve the upload identity.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Missing`] when no non-blank `user_id` is
    /// stored.
    pub fn resolve(&self) -> Result<UploadIdentity, IdentityError> {
        let identity = self
            .store
            .get(USER_ID_KEY)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(UploadIdentity::new)
            .ok_or(IdentityError::Missing)?;
        debug!(user_id = %identity, "Resolved upload identity");
        Ok(identity)
    }
}
