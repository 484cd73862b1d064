//! Backend endpoint table and URL construction.

use url::Url;

use crate::domain::Schema;

/// Query parameter naming the data partition.
const SCHEMA_PARAM: &str = "v_db";

/// Every backend endpoint the console calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Vendors,
    SalesVendors,
    Products,
    Stock,
    Orders,
    RegisterOrder,
    UpdateOrder,
    DeleteOrder,
    StockOuts,
    RegisterStockOut,
    UpdateStockOut,
    DeleteStockOut,
}

impl Endpoint {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Vendors => "/api/select/vender/all",
            Self::SalesVendors => "/api/select/vender/out",
            Self::Products => "/api/select/jepum/jepum",
            Self::Stock => "/api/select/stock/jepum",
            Self::Orders => "/api/select/suju/all",
            Self::RegisterOrder => "/api/insert/suju/register",
            Self::UpdateOrder => "/api/update/suju/update",
            Self::DeleteOrder => "/api/delete/suju/delete",
            Self::StockOuts => "/api/select/stock/jepum-out",
            Self::RegisterStockOut => "/api/insert/stock/out",
            Self::UpdateStockOut => "/api/update/stock/update",
            Self::DeleteStockOut => "/api/delete/stock/delete",
        }
    }

    /// Human-readable operation name used in logs and errors.
    #[must_use]
    pub const fn operation(self) -> &'static str {
        match self {
            Self::Vendors => "vendor lookup",
            Self::SalesVendors => "sales vendor lookup",
            Self::Products => "product lookup",
            Self::Stock => "stock inquiry",
            Self::Orders => "order lookup",
            Self::RegisterOrder => "order registration",
            Self::UpdateOrder => "order update",
            Self::DeleteOrder => "order deletion",
            Self::StockOuts => "stock-out lookup",
            Self::RegisterStockOut => "stock-out registration",
            Self::UpdateStockOut => "stock-out update",
            Self::DeleteStockOut => "stock-out deletion",
        }
    }

    /// Build the full URL: base path prefix, endpoint path, `v_db`, then `extra`.
    #[must_use]
    pub fn url(self, base: &Url, schema: &Schema, extra: &[(&str, &str)]) -> Url {
        let mut url = base.clone();
        let prefix = base.path().trim_end_matches('/');
        url.set_path(&format!("{prefix}{}", self.path()));
        url.set_fragment(None);
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            query.append_pair(SCHEMA_PARAM, schema.as_str());
            for (key, value) in extra {
                query.append_pair(key, value);
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::try_new("25_DO").unwrap()
    }

    #[test]
    fn range_url_carries_schema_and_bounds() {
        let base = Url::parse("http://erp.local:8999").unwrap();
        let url = Endpoint::Orders.url(
            &base,
            &schema(),
            &[("from_dt", "20250301"), ("to_dt", "20250331")],
        );
        assert_eq!(
            url.as_str(),
            "http://erp.local:8999/api/select/suju/all?v_db=25_DO&from_dt=20250301&to_dt=20250331"
        );
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let base = Url::parse("https://erp.local/backend/").unwrap();
        let url = Endpoint::StockOuts.url(&base, &schema(), &[]);
        assert_eq!(
            url.as_str(),
            "https://erp.local/backend/api/select/stock/jepum-out?v_db=25_DO"
        );
    }

    #[test]
    fn identifiers_are_query_encoded() {
        let base = Url::parse("http://erp.local").unwrap();
        let url = Endpoint::DeleteOrder.url(&base, &schema(), &[("suju_cd", "A&B 1")]);
        assert_eq!(
            url.query(),
            Some("v_db=25_DO&suju_cd=A%26B+1")
        );
    }
}
