//! Outbound adapters: geolocation sources, the Overpass client, the scan
//! backend client, and the file-backed client store.

pub mod geolocation;
pub mod overpass;
pub mod scan;
pub mod store;
