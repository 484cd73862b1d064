//! Handlers for `opsdesk products` and `opsdesk stock`.

use serde::Serialize;
use serde_json::json;
use tabled::Tabled;

use super::command::SearchArg;
use super::output;
use super::session::Session;
use crate::application::{ReferenceLists, StockInquiry};
use crate::domain::{Product, StockItem};
use crate::error::Result;
use crate::port::Backend;

#[derive(Serialize, Tabled)]
struct ProductRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            code: product.code.clone(),
            name: product.name.clone(),
        }
    }
}

#[derive(Serialize, Tabled)]
struct StockRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Spec")]
    spec: String,
    #[tabled(rename = "Qty")]
    quantity: i64,
}

impl From<&StockItem> for StockRow {
    fn from(item: &StockItem) -> Self {
        Self {
            code: item.code.clone(),
            name: item.name.clone(),
            spec: item.spec.clone().unwrap_or_default(),
            quantity: item.quantity,
        }
    }
}

/// Execute `products list`.
pub async fn list_products<B: Backend>(session: &Session<B>, args: &SearchArg) -> Result<()> {
    let mut lists = ReferenceLists::new(session.backend.clone(), session.schema.clone());

    let pb = output::spinner("Loading products");
    let loaded = lists.load_products().await.map(|_| ());
    output::spinner_clear(&pb);
    loaded?;

    let query = args.search.as_deref().unwrap_or_default();
    let rows: Vec<ProductRow> = lists
        .filter_products(query)
        .into_iter()
        .map(ProductRow::from)
        .collect();

    if output::is_json() {
        output::json_output(json!({
            "command": "products.list",
            "schema": session.schema,
            "products": rows,
        }));
        return Ok(());
    }

    output::section("Finished products");
    output::table(&rows, "No products match.");
    Ok(())
}

/// Execute `stock list`.
pub async fn list_stock<B: Backend>(session: &Session<B>, args: &SearchArg) -> Result<()> {
    let mut page = StockInquiry::new(session.backend.clone(), session.schema.clone());

    let pb = output::spinner("Loading stock");
    let loaded = page.load().await.map(|_| ());
    output::spinner_clear(&pb);
    loaded?;

    let query = args.search.as_deref().unwrap_or_default();
    let rows: Vec<StockRow> = page.filter(query).into_iter().map(StockRow::from).collect();

    if output::is_json() {
        output::json_output(json!({
            "command": "stock.list",
            "schema": session.schema,
            "stock": rows,
        }));
        return Ok(());
    }

    output::section("Product stock");
    output::table(&rows, "No stock items match.");
    Ok(())
}
