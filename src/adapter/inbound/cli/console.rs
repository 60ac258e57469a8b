//! Terminal implementations of the notification and navigation ports.
//!
//! Flows publish while a spinner is on screen, so both adapters queue what
//! they receive and the command prints it once the spinner is gone.

use std::mem;

use parking_lot::Mutex;

use super::output;
use crate::domain::PredictionResult;
use crate::port::{Event, Navigator, Notifier, Severity};

/// Queues advisories for printing after the current step.
#[derive(Default)]
pub struct ConsoleNotifier {
    pending: Mutex<Vec<Event>>,
}

impl ConsoleNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Print and drop every queued advisory.
    pub fn flush(&self) {
        let events = mem::take(&mut *self.pending.lock());
        for event in events {
            let message = event.message();
            match event.severity() {
                Severity::Info => output::success(&message),
                Severity::Warning => output::warning(&message),
                Severity::Error => output::error(&message),
            }
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, event: Event) {
        self.pending.lock().push(event);
    }
}

/// Where the diagnosis flow handed control.
#[derive(Debug, Clone, PartialEq)]
pub enum Handoff {
    Results(PredictionResult),
    SignIn,
}

/// Records the last navigation request.
#[derive(Default)]
pub struct ConsoleNavigator {
    handoff: Mutex<Option<Handoff>>,
}

impl ConsoleNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending handoff, if any.
    pub fn take(&self) -> Option<Handoff> {
        self.handoff.lock().take()
    }
}

impl Navigator for ConsoleNavigator {
    fn show_results(&self, result: &PredictionResult) {
        *self.handoff.lock() = Some(Handoff::Results(result.clone()));
    }

    fn redirect_to_sign_in(&self) {
        *self.handoff.lock() = Some(Handoff::SignIn);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_notifier_queues_until_flush() {
        let notifier = ConsoleNotifier::new();
        notifier.notify(Event::NoFacilitiesNearby { radius_m: 10_000 });
        notifier.notify(Event::ScanCompleted {
            scan_id: "s-1".into(),
        });
        assert_eq!(notifier.pending.lock().len(), 2);

        notifier.flush();
        assert!(notifier.pending.lock().is_empty());
    }

    #[test]
    fn test_navigator_keeps_last_handoff() {
        let navigator = ConsoleNavigator::new();
        assert_eq!(navigator.take(), None);

        let result = PredictionResult::new(json!({"prediction": "normal"}));
        navigator.redirect_to_sign_in();
        navigator.show_results(&result);

        assert_eq!(navigator.take(), Some(Handoff::Results(result)));
        assert_eq!(navigator.take(), None);
    }
}
