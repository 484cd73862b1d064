//! Reference lists that feed the order and stock-out forms.
//!
//! The original forms offered product and vendor pickers; here the lists are
//! used to describe a draft by name before it is sent.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::{Product, Schema, Vendor};
use crate::error::Result;
use crate::port::Backend;

/// Finished products and sales vendors for one schema.
pub struct ReferenceLists<B> {
    backend: Arc<B>,
    schema: Schema,
    products: Vec<Product>,
    sales_vendors: Vec<Vendor>,
}

impl<B: Backend> ReferenceLists<B> {
    pub fn new(backend: Arc<B>, schema: Schema) -> Self {
        Self {
            backend,
            schema,
            products: Vec::new(),
            sales_vendors: Vec::new(),
        }
    }

    /// Fetch finished products.
    pub async fn load_products(&mut self) -> Result<&[Product]> {
        match self.backend.products(&self.schema).await {
            Ok(products) => {
                debug!(count = products.len(), "Loaded products");
                self.products = products;
                Ok(&self.products)
            }
            Err(e) => {
                error!(error = %e, schema = %self.schema, "Product lookup failed");
                Err(e)
            }
        }
    }

    /// Fetch sales vendors.
    pub async fn load_sales_vendors(&mut self) -> Result<&[Vendor]> {
        match self.backend.sales_vendors(&self.schema).await {
            Ok(vendors) => {
                debug!(count = vendors.len(), "Loaded sales vendors");
                self.sales_vendors = vendors;
                Ok(&self.sales_vendors)
            }
            Err(e) => {
                error!(error = %e, schema = %self.schema, "Sales vendor lookup failed");
                Err(e)
            }
        }
    }

    /// Fetch both lists.
    pub async fn load(&mut self) -> Result<()> {
        self.load_products().await?;
        self.load_sales_vendors().await?;
        Ok(())
    }

    /// Products whose code or name contains `query`, ignoring case.
    pub fn filter_products(&self, query: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.matches(query)).collect()
    }

    pub fn product_name(&self, code: &str) -> Option<&str> {
        self.products
            .iter()
            .find(|p| p.code == code)
            .map(|p| p.name.as_str())
    }

    pub fn vendor_name(&self, code: &str) -> Option<&str> {
        self.sales_vendors
            .iter()
            .find(|v| v.code == code)
            .map(|v| v.name.as_str())
    }

    /// `name (code)` when the product is known, the bare code otherwise.
    pub fn describe_product(&self, code: &str) -> String {
        super::display::named(code, self.product_name(code).unwrap_or_default())
    }

    /// `name (code)` when the vendor is known, the bare code otherwise.
    pub fn describe_vendor(&self, code: &str) -> String {
        super::display::named(code, self.vendor_name(code).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::backend::{Call, FakeBackend};
    use crate::testkit::domain::{product, schema, vendor};

    #[tokio::test]
    async fn load_fetches_both_lists_and_resolves_names() {
        let backend = Arc::new(
            FakeBackend::new()
                .with_products(vec![product("P100", "Bracket")])
                .with_sales_vendors(vec![vendor("C100", "Northwind")]),
        );
        let mut lists = ReferenceLists::new(backend.clone(), schema());
        lists.load().await.unwrap();

        assert_eq!(backend.calls(), vec![Call::Products, Call::SalesVendors]);
        assert_eq!(lists.describe_product("P100"), "Bracket (P100)");
        assert_eq!(lists.describe_vendor("C100"), "Northwind (C100)");
        assert_eq!(lists.describe_vendor("C999"), "C999");
        assert_eq!(lists.filter_products("brack").len(), 1);
    }
}
