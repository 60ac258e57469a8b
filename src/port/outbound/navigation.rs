//! Navigation handoff port.

use crate::domain::PredictionResult;

/// Hands control to the next screen once a flow reaches a terminal state.
pub trait Navigator: Send + Sync {
    /// Show the scan results screen with the prediction, unmodified.
    fn show_results(&self, result: &PredictionResult);

    /// Send the user to the authentication entry point.
    fn redirect_to_sign_in(&self);
}
