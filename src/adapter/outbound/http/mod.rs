//! HTTP adapter for the business backend.
//!
//! - [`client`] - `reqwest` implementation of the [`Backend`](crate::port::Backend) port
//! - [`dto`] - wire rows and mutation payloads
//! - [`endpoint`] - endpoint paths and URL construction

pub mod client;
pub mod dto;
pub mod endpoint;

pub use client::HttpBackend;
pub use endpoint::Endpoint;
