//! Vendor lookup page.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::{Schema, Vendor};
use crate::error::{ApiError, Result};
use crate::port::Backend;

/// Which vendor list the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendorScope {
    /// Every vendor.
    #[default]
    All,
    /// Only vendors that receive shipments.
    Sales,
}

/// Lists vendors, filters them, and shows one vendor's address.
pub struct VendorLookup<B> {
    backend: Arc<B>,
    schema: Schema,
    scope: VendorScope,
    vendors: Vec<Vendor>,
}

impl<B: Backend> VendorLookup<B> {
    pub fn new(backend: Arc<B>, schema: Schema, scope: VendorScope) -> Self {
        Self {
            backend,
            schema,
            scope,
            vendors: Vec::new(),
        }
    }

    /// Fetch the vendor list for the page's scope.
    pub async fn load(&mut self) -> Result<&[Vendor]> {
        let fetched = match self.scope {
            VendorScope::All => self.backend.vendors(&self.schema).await,
            VendorScope::Sales => self.backend.sales_vendors(&self.schema).await,
        };
        match fetched {
            Ok(vendors) => {
                debug!(count = vendors.len(), scope = ?self.scope, "Loaded vendors");
                self.vendors = vendors;
                Ok(&self.vendors)
            }
            Err(e) => {
                error!(error = %e, schema = %self.schema, "Vendor lookup failed");
                Err(e)
            }
        }
    }

    /// Vendors whose code or name contains `query`, ignoring case.
    pub fn filter(&self, query: &str) -> Vec<&Vendor> {
        self.vendors.iter().filter(|v| v.matches(query)).collect()
    }

    /// The loaded vendor with this exact code.
    pub fn show(&self, code: &str) -> Result<&Vendor> {
        let code = code.trim();
        self.vendors.iter().find(|v| v.code == code).ok_or_else(|| {
            ApiError::NotFound {
                kind: "vendor",
                id: code.to_string(),
            }
            .into()
        })
    }
}
