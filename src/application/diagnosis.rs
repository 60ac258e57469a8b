//! Image diagnosis flow.
//!
//! The identity is resolved once, when the flow is created. A submission
//! then runs two strictly sequential stages: upload, then prediction on
//! the upload's output. The first failing stage short-circuits the
//! pipeline and the flow lands in `Failed` with that stage's tag.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::identity::IdentityResolver;
use super::selection::ImageSelection;
use super::state::{FlowStore, FlowView, Halt, Ticket};
use crate::domain::{
    FlowError, FlowState, ImageCandidate, PredictionResult, SelectError, SelectedImage,
    TransitionError, UploadIdentity, UploadResult, ValidationError,
};
use crate::port::{Event, Navigator, Notifier, ScanBackend};

/// Message used when the upload backend gives no reason.
pub const UPLOAD_FAILED: &str = "Failed to upload image";

/// Message used when the prediction backend gives no reason.
pub const PREDICTION_FAILED: &str = "Failed to process image";

/// One image diagnosis flow instance.
pub struct ImageDiagnosis {
    identity: Option<UploadIdentity>,
    selection: ImageSelection,
    backend: Arc<dyn ScanBackend>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    store: FlowStore<PredictionResult>,
}

impl ImageDiagnosis {
    /// Create the flow, resolving the upload identity once.
    ///
    /// When no identity is stored the flow starts in
    /// `Failed(IdentityMissing)`, one advisory is published and the user is
    /// redirected to sign in. Later submissions fail the same way without
    /// touching the backend.
    pub fn new(
        resolver: &IdentityResolver,
        backend: Arc<dyn ScanBackend>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let identity = resolver.resolve().ok();
        let flow = Self {
            identity,
            selection: ImageSelection::new(),
            backend,
            navigator,
            notifier,
            store: FlowStore::new(),
        };

        if flow.identity.is_none() {
            if let Err(err) = flow.fail_precondition(FlowError::IdentityMissing) {
                warn!(error = %err, "Could not record missing identity");
            }
        }
        flow
    }

    /// The identity resolved at construction.
    #[must_use]
    pub fn identity(&self) -> Option<&UploadIdentity> {
        self.identity.as_ref()
    }

    /// Read-only state for presentation.
    #[must_use]
    pub fn view(&self) -> FlowView<PredictionResult> {
        self.store.view()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> FlowState<PredictionResult> {
        self.store.current()
    }

    /// The image that the next submission would send.
    #[must_use]
    pub fn selected(&self) -> Option<SelectedImage> {
        self.selection.current()
    }

    /// Validate and select an image.
    ///
    /// # Errors
    ///
    /// - [`SelectError::InFlight`] while a submission is in progress.
    /// - [`SelectError::Invalid`] when validation fails; one advisory is
    ///   published and the prior selection is kept.
    pub fn select(&self, candidate: ImageCandidate) -> Result<(), SelectError> {
        if self.store.is_loading() {
            return Err(SelectError::InFlight);
        }
        match self.selection.select(candidate) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.notifier.notify(Event::ImageRejected(err.clone()));
                Err(err.into())
            }
        }
    }

    /// Clear the selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::InFlight`] while a submission is in progress.
    pub fn clear(&self) -> Result<(), SelectError> {
        if self.store.is_loading() {
            return Err(SelectError::InFlight);
        }
        self.selection.clear();
        Ok(())
    }

    /// Abandon any in-flight submission and return to `Idle`.
    pub fn abandon(&self) {
        let generation = self.store.reset();
        info!(generation, "Diagnosis abandoned");
    }

    /// Submit the selected image for upload and prediction.
    ///
    /// On success the prediction is handed to the [`Navigator`] unmodified.
    /// Returns the state after the submission.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AlreadyLoading`] if a submission is
    /// already in flight.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<FlowState<PredictionResult>, TransitionError> {
        if self.store.is_loading() {
            return Err(TransitionError::AlreadyLoading);
        }
        let Some(identity) = self.identity.clone() else {
            return self.fail_precondition(FlowError::IdentityMissing);
        };
        let Some(image) = self.selection.current() else {
            return self.fail_precondition(ValidationError::NothingSelected.into());
        };

        let ticket = self.store.begin()?;
        info!(
            generation = ticket.generation(),
            file = image.file_name(),
            bytes = image.len(),
            "Submitting image for scanning"
        );

        match self.pipeline(ticket, &image, &identity).await {
            Ok((upload, prediction)) => {
                if self.store.settle(ticket, Ok(prediction.clone())) {
                    info!(scan_id = %upload.scan_id, "Scan completed");
                    self.notifier.notify(Event::ScanCompleted {
                        scan_id: upload.scan_id,
                    });
                    self.navigator.show_results(&prediction);
                }
            }
            Err(Halt::Failed(err)) => {
                warn!(stage = %err.stage(), error = %err, "Scan failed");
                if self.store.settle(ticket, Err(err.clone())) {
                    self.notifier.notify(Event::FlowFailed(err));
                }
            }
            Err(Halt::Superseded) => {
                info!(generation = ticket.generation(), "Scan abandoned before prediction");
            }
        }
        Ok(self.store.current())
    }

    /// Upload, then predict on the upload's output. Stops after the upload
    /// when the submission was abandoned meanwhile.
    async fn pipeline(
        &self,
        ticket: Ticket,
        image: &SelectedImage,
        identity: &UploadIdentity,
    ) -> Result<(UploadResult, PredictionResult), Halt> {
        let upload = self
            .backend
            .upload(image, identity)
            .await
            .map_err(|err| {
                warn!(error = %err, "Upload stage failed");
                FlowError::UploadFailed(err.display_message(UPLOAD_FAILED))
            })?;
        info!(image_url = %upload.image_url, scan_id = %upload.scan_id, "Image uploaded");
        self.store.checkpoint(ticket)?;

        let prediction = self
            .backend
            .predict(&upload, identity)
            .await
            .map_err(|err| {
                warn!(error = %err, "Prediction stage failed");
                FlowError::PredictionFailed(err.display_message(PREDICTION_FAILED))
            })?;

        Ok((upload, prediction))
    }

    /// Fail before any submission starts: record, notify once, and hand
    /// off to sign-in when the identity is missing.
    fn fail_precondition(
        &self,
        error: FlowError,
    ) -> Result<FlowState<PredictionResult>, TransitionError> {
        self.store.reject(error.clone())?;
        let redirect = error == FlowError::IdentityMissing;
        self.notifier.notify(Event::FlowFailed(error));
        if redirect {
            self.navigator.redirect_to_sign_in();
        }
        Ok(self.store.current())
    }
}
