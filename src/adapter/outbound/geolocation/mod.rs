//! Position sources for hosts without a device geolocation API.

pub mod fixed;
pub mod ip;

pub use fixed::{FixedPosition, NoGeolocation};
pub use ip::IpGeolocation;
