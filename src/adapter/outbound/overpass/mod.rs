//! Overpass API adapter for the facility query.

pub mod client;
pub mod dto;

pub use client::OverpassClient;
