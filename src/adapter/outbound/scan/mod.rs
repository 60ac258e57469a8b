//! Scan backend adapter: multipart upload and JSON prediction.

pub mod client;
pub mod dto;

pub use client::ScanClient;
