//! Domain validation errors.
//!
//! These cover the required-field checks a form would enforce before a
//! request is sent. Nothing in the date-range normalizer produces one.
//!
//! # Examples
//!
//! ```
//! use opsdesk::domain::error::DomainError;
//! use opsdesk::domain::order::OrderDraft;
//!
//! let draft = OrderDraft::new("", "V001");
//! assert!(matches!(
//!     draft.validate(),
//!     Err(DomainError::MissingField { field: "product" })
//! ));
//! ```

use thiserror::Error;

/// Errors that occur when a draft or identifier is not fit to send.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was left blank.
    #[error("{field} is required")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// Quantities start at one.
    #[error("{field} must be at least 1, got {value}")]
    NonPositiveQuantity {
        /// Name of the quantity field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// The schema selector cannot be empty.
    #[error("schema cannot be empty")]
    EmptySchema,
}
