//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!          ┌──────────────────────────┐
//!          │  CLI (inbound adapter)   │
//!          └────────────┬─────────────┘
//!                       ▼
//!          ┌──────────────────────────┐
//!          │ Application page services│
//!          │   Domain + Backend port  │
//!          └────────────┬─────────────┘
//!                       ▼
//!          ┌──────────────────────────┐
//!          │ HTTP backend (outbound)  │
//!          └──────────────────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`Backend`] - the REST API behind every page

mod backend;

pub use backend::Backend;
