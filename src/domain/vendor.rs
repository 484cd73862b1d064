//! Trading partners.

use serde::Serialize;

use super::search::matches_any;

/// A vendor (trading partner) record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vendor {
    pub code: String,
    pub name: String,
    pub city: Option<String>,
    /// Detail street address.
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl Vendor {
    /// Search by code or name.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        matches_any(&[Some(&self.code), Some(&self.name)], query)
    }
}
