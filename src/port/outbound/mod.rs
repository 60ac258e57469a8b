//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the collaborators the two flows consume: the
//! device geolocation capability, the geospatial query backend, the scan
//! backends, the persistent client store, navigation, and notifications.

pub mod facility;
pub mod geolocation;
pub mod navigation;
pub mod notifier;
pub mod scan;
pub mod store;
