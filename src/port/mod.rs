//! Port definitions (hexagonal architecture).
//!
//! Ports are the traits the application core talks to. Adapters under
//! [`crate::adapter`] implement them for real devices and backends; the
//! [`crate::testkit`] module implements them with scripted doubles.

pub mod outbound;

pub use outbound::facility::FacilitySource;
pub use outbound::geolocation::{PositionOptions, PositionSource};
pub use outbound::navigation::Navigator;
pub use outbound::notifier::{
    Event, LogNotifier, Notifier, NotifierRegistry, NullNotifier, Severity,
};
pub use outbound::scan::ScanBackend;
pub use outbound::store::{KeyValueStore, USER_ID_KEY};
