//! Adapters (hexagonal architecture).
//!
//! - [`inbound`] - the command-line driver
//! - [`outbound`] - implementations of the outbound ports

pub mod inbound;
pub mod outbound;
