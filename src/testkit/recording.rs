//! Recording notifier and navigator.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::PredictionResult;
use crate::port::{Event, Navigator, Notifier};

/// Thread-safe event collector for notification assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: Event) {
        self.events.lock().push(event);
    }
}

/// Records navigation handoffs.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    results: Arc<Mutex<Vec<PredictionResult>>>,
    sign_in_redirects: Arc<Mutex<usize>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Predictions handed to the results screen.
    #[must_use]
    pub fn results(&self) -> Vec<PredictionResult> {
        self.results.lock().clone()
    }

    /// Number of redirects to the sign-in entry point.
    #[must_use]
    pub fn sign_in_redirects(&self) -> usize {
        *self.sign_in_redirects.lock()
    }
}

impl Navigator for RecordingNavigator {
    fn show_results(&self, result: &PredictionResult) {
        self.results.lock().push(result.clone());
    }

    fn redirect_to_sign_in(&self) {
        *self.sign_in_redirects.lock() += 1;
    }
}
