//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`backend`] - `FakeBackend`, a recording in-memory [`Backend`](crate::port::Backend)
//! - [`domain`] - Builders for vendors, products, orders and stock-outs

pub mod backend;
pub mod domain;
