//! Notifier port for user-facing advisories.
//!
//! Every flow outcome worth telling the user about is published as exactly
//! one [`Event`]. Presentation adapters decide how to show it (toast,
//! terminal line, log entry).

use std::sync::Arc;

use crate::domain::{FlowError, ValidationError};

/// Events that can trigger notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Facilities were found around the user.
    FacilitiesFound {
        /// Number of facilities in the result set.
        count: usize,
        /// Search radius in meters.
        radius_m: u32,
    },
    /// The query succeeded with zero matches. Informational, not an error.
    NoFacilitiesNearby {
        /// Search radius in meters.
        radius_m: u32,
    },
    /// A candidate image was refused; the prior selection is unchanged.
    ImageRejected(ValidationError),
    /// Upload and prediction both succeeded.
    ScanCompleted {
        /// Scan identifier assigned by the upload backend.
        scan_id: String,
    },
    /// A flow failed at one of its stages.
    FlowFailed(FlowError),
}

/// How prominently an event should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Event {
    /// Presentation severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::FacilitiesFound { .. } | Self::ScanCompleted { .. } => Severity::Info,
            Self::NoFacilitiesNearby { .. } => Severity::Warning,
            Self::ImageRejected(_) | Self::FlowFailed(_) => Severity::Error,
        }
    }

    /// Message shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::FacilitiesFound { count, radius_m } => {
                format!("Found {count} eye care facilities within {}", format_radius(*radius_m))
            }
            Self::NoFacilitiesNearby { radius_m } => {
                format!("No eye care facilities found within {}.", format_radius(*radius_m))
            }
            Self::ImageRejected(err) => err.to_string(),
            Self::ScanCompleted { scan_id } => format!("Scan {scan_id} completed"),
            Self::FlowFailed(err) => err.to_string(),
        }
    }
}

fn format_radius(radius_m: u32) -> String {
    if radius_m % 1000 == 0 {
        format!("{}km", radius_m / 1000)
    } else {
        format!("{radius_m}m")
    }
}

/// Trait for notification handlers.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - The `notify` method should not block or perform slow I/O synchronously
pub trait Notifier: Send + Sync {
    /// Handle an event.
    fn notify(&self, event: Event);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, event: Event) {
        (**self).notify(event);
    }
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts events to all registered notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Notifier for NotifierRegistry {
    fn notify(&self, event: Event) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: Event) {}
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        use tracing::{info, warn};
        match &event {
            Event::FacilitiesFound { count, radius_m } => {
                info!(count, radius_m, "Facilities found");
            }
            Event::NoFacilitiesNearby { radius_m } => {
                info!(radius_m, "No facilities nearby");
            }
            Event::ImageRejected(err) => {
                warn!(reason = %err, "Image rejected");
            }
            Event::ScanCompleted { scan_id } => {
                info!(scan_id = %scan_id, "Scan completed");
            }
            Event::FlowFailed(err) => {
                warn!(stage = %err.stage(), error = %err, "Flow failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingNotifier {
        count: Arc<AtomicUsize>,
    }

    impl Notifier for CountingNotifier {
        fn notify(&self, _event: Event) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_registry_notify_all() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut registry = NotifierRegistry::new();

        registry.register(Box::new(CountingNotifier {
            count: count.clone(),
        }));
        registry.register(Box::new(CountingNotifier {
            count: count.clone(),
        }));

        registry.notify(Event::NoFacilitiesNearby { radius_m: 10_000 });

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_registry_len_and_is_empty() {
        let mut registry = NotifierRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        registry.register(Box::new(NullNotifier));
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_result_is_a_warning_not_an_error() {
        let event = Event::NoFacilitiesNearby { radius_m: 10_000 };
        assert_eq!(event.severity(), Severity::Warning);
        assert_eq!(event.message(), "No eye care facilities found within 10km.");
    }

    #[test]
    fn test_failure_message_is_flow_error_display() {
        let event = Event::FlowFailed(FlowError::UploadFailed("disk full".into()));
        assert_eq!(event.severity(), Severity::Error);
        assert_eq!(event.message(), "disk full");
    }

    #[test]
    fn test_radius_formatting() {
        assert_eq!(format_radius(10_000), "10km");
        assert_eq!(format_radius(2_500), "2500m");
    }
}
