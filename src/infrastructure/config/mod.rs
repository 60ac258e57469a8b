//! Infrastructure configuration modules.

pub mod backend;
pub mod geolocation;
pub mod logging;
pub mod overpass;
pub mod settings;
pub mod store;
