//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - the command-line console that drives the application
//! - [`outbound`] - the REST client behind the [`Backend`](crate::port::Backend) port

pub mod inbound;
pub mod outbound;
