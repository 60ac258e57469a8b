//! CataScan - eye care facility discovery and eye-image scanning.
//!
//! Two independent flows share one state model:
//!
//! - **Facility discovery** - acquire the user's position, query the
//!   Overpass API for eye-care facilities within a radius, and normalize
//!   the heterogeneous results into [`domain::FacilityRecord`]s.
//! - **Image diagnosis** - resolve the signed-in user, validate a selected
//!   image, upload it, and run the cataract prediction on the upload.
//!
//! Each flow instance owns a [`application::FlowStore`]: a four-state
//! machine (`Idle`, `Loading`, `Success`, `Failed`) with generation
//! tokens so that a response from an abandoned submission never
//! overwrites fresher state.
//!
//! # Modules
//!
//! - [`domain`] - pure types: coordinates, facilities, images, flow state
//! - [`port`] - traits for geolocation, queries, scan backends, storage,
//!   navigation and notifications
//! - [`application`] - the two flows and their stages
//! - [`adapter`] - HTTP clients, position sources, the file store and the CLI
//! - [`infrastructure`] - TOML configuration and wiring
//! - [`error`] - crate-level error types
//!
//! # Features
//!
//! - `testkit` - scripted port doubles for integration tests

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
