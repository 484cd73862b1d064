//! Record identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned order number (`suju_cd`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderCode(String);

impl OrderCode {
    /// Create a new `OrderCode` from a string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the order code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for OrderCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Backend-assigned stock movement number (`inout_no`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockOutNo(String);

impl StockOutNo {
    /// Create a new `StockOutNo` from a string.
    pub fn new(no: impl Into<String>) -> Self {
        Self(no.into())
    }

    /// Get the stock-out number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StockOutNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StockOutNo {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for StockOutNo {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
