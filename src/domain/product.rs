//! Finished products and their stock levels.

use serde::Serialize;

use super::search::matches_any;

/// A finished product selectable on order and stock-out forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub code: String,
    pub name: String,
}

impl Product {
    /// Search by code or name.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        matches_any(&[Some(&self.code), Some(&self.name)], query)
    }
}

/// Current stock of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockItem {
    pub code: String,
    pub name: String,
    pub spec: Option<String>,
    pub quantity: i64,
}

impl StockItem {
    /// Search by code, name, or spec when the product has one.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        matches_any(
            &[Some(&self.code), Some(&self.name), self.spec.as_deref()],
            query,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(spec: Option<&str>) -> StockItem {
        StockItem {
            code: "P100".into(),
            name: "Steel Bracket".into(),
            spec: spec.map(str::to_string),
            quantity: 12,
        }
    }

    #[test]
    fn stock_search_covers_spec() {
        assert!(item(Some("40x40mm")).matches("40X40"));
        assert!(!item(None).matches("40x40"));
        assert!(item(None).matches("bracket"));
    }
}
