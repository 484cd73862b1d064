//! opsdesk - operator console for a small manufacturing and distribution
//! business.
//!
//! The console fronts a REST backend partitioned by a schema (`v_db`) and
//! offers one page per task: vendor lookup, stock inquiry, order
//! registration, production progress and stock-out results.
//!
//! # Architecture
//!
//! - **`domain`** - Records, drafts and the date-range query normalizer
//! - **`port`** - The [`Backend`](port::Backend) trait every page talks to
//! - **`application`** - One service per page, generic over the backend
//! - **`adapter`** - The `reqwest` REST client and the `clap` console
//! - **`infrastructure`** - TOML configuration and `tracing` setup
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use opsdesk::domain::{RangePolicy, YearWidth};
//! use opsdesk::domain::date_range::normalize_for_display;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
//! let params = RangePolicy::StartOfMonth.range_at(today).to_query_params();
//! assert_eq!((params.from_dt.as_str(), params.to_dt.as_str()), ("20250301", "20250314"));
//! assert_eq!(normalize_for_display("20250314", YearWidth::Full), "2025-03-14");
//! ```
//!
//! # Features
//!
//! - `testkit` - Expose the in-memory backend and record builders to
//!   integration tests

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
