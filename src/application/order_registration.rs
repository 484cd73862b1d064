//! Order registration page.
//!
//! Shows the orders placed in the current range (today by default) and
//! registers, updates and deletes orders. Every successful mutation is
//! followed by a re-fetch of the range.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, error, info};

use super::display::{date_cell, named};
use crate::domain::{
    DateRange, DomainError, Order, OrderCode, OrderDraft, RangePolicy, Schema, YearWidth,
};
use crate::error::{ApiError, Result};
use crate::port::Backend;

/// The page opens on today's orders.
pub const DEFAULT_POLICY: RangePolicy = RangePolicy::Today;

/// Registration dates show the full year.
pub const DATE_WIDTH: YearWidth = YearWidth::Full;

/// One line of the registration table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct OrderRow {
    #[tabled(rename = "Order")]
    pub code: String,
    #[tabled(rename = "Ordered")]
    pub ordered_on: String,
    #[tabled(rename = "Due")]
    pub due_on: String,
    #[tabled(rename = "Product")]
    pub product: String,
    #[tabled(rename = "Vendor")]
    pub vendor: String,
    #[tabled(rename = "Qty")]
    pub quantity: i64,
    #[tabled(rename = "Note")]
    pub note: String,
}

impl OrderRow {
    fn from_order(order: &Order) -> Self {
        Self {
            code: order.code.to_string(),
            ordered_on: date_cell(order.ordered_on.as_deref(), DATE_WIDTH),
            due_on: date_cell(order.due_on.as_deref(), DATE_WIDTH),
            product: named(&order.product_code, &order.product_name),
            vendor: named(&order.vendor_code, &order.vendor_name),
            quantity: order.quantity,
            note: order.note.clone(),
        }
    }
}

/// A single order as the detail form shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetail {
    pub code: String,
    pub ordered_on: String,
    pub due_on: String,
    pub product_code: String,
    pub product_name: String,
    pub vendor_code: String,
    pub vendor_name: String,
    pub quantity: i64,
    pub note: String,
    pub status: String,
}

impl From<&Order> for OrderDetail {
    fn from(order: &Order) -> Self {
        Self {
            code: order.code.to_string(),
            ordered_on: date_cell(order.ordered_on.as_deref(), DATE_WIDTH),
            due_on: date_cell(order.due_on.as_deref(), DATE_WIDTH),
            product_code: order.product_code.clone(),
            product_name: order.product_name.clone(),
            vendor_code: order.vendor_code.clone(),
            vendor_name: order.vendor_name.clone(),
            quantity: order.quantity,
            note: order.note.clone(),
            status: order.status.label().to_string(),
        }
    }
}

/// Order registration page state.
pub struct OrderRegistration<B> {
    backend: Arc<B>,
    schema: Schema,
    range: DateRange,
    orders: Vec<Order>,
}

impl<B: Backend> OrderRegistration<B> {
    pub fn new(backend: Arc<B>, schema: Schema, today: NaiveDate) -> Self {
        Self {
            backend,
            schema,
            range: DEFAULT_POLICY.range_at(today),
            orders: Vec::new(),
        }
    }

    #[must_use]
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Replace the range and fetch it once.
    pub async fn search(&mut self, range: DateRange) -> Result<&[Order]> {
        self.range = range;
        self.load().await
    }

    /// Fetch orders for the current range.
    pub async fn load(&mut self) -> Result<&[Order]> {
        let params = self.range.to_query_params();
        match self.backend.orders(&self.schema, &params).await {
            Ok(orders) => {
                debug!(count = orders.len(), range = %self.range, "Loaded orders");
                self.orders = orders;
                Ok(&self.orders)
            }
            Err(e) => {
                error!(error = %e, schema = %self.schema, range = %self.range, "Order lookup failed");
                Err(e)
            }
        }
    }

    pub fn rows(&self) -> Vec<OrderRow> {
        self.orders.iter().map(OrderRow::from_order).collect()
    }

    /// The loaded order with this code.
    pub fn show(&self, code: &OrderCode) -> Result<&Order> {
        self.orders.iter().find(|o| &o.code == code).ok_or_else(|| {
            ApiError::NotFound {
                kind: "order",
                id: code.to_string(),
            }
            .into()
        })
    }

    /// Detail view of a loaded order.
    pub fn detail(&self, code: &OrderCode) -> Result<OrderDetail> {
        self.show(code).map(OrderDetail::from)
    }

    /// Register a new order, then re-fetch.
    pub async fn register(&mut self, draft: &OrderDraft) -> Result<Option<OrderCode>> {
        draft.validate()?;
        let code = self
            .backend
            .register_order(&self.schema, draft)
            .await
            .inspect_err(|e| error!(error = %e, "Order registration failed"))?;
        info!(code = ?code.as_ref().map(OrderCode::as_str), "Order registered");
        self.load().await?;
        Ok(code)
    }

    /// Replace an order's fields, then re-fetch.
    pub async fn update(&mut self, code: &OrderCode, draft: &OrderDraft) -> Result<()> {
        require_code(code)?;
        draft.validate()?;
        self.backend
            .update_order(&self.schema, code, draft)
            .await
            .inspect_err(|e| error!(error = %e, code = %code, "Order update failed"))?;
        info!(code = %code, "Order updated");
        self.load().await?;
        Ok(())
    }

    /// Delete an order, then re-fetch.
    pub async fn delete(&mut self, code: &OrderCode) -> Result<()> {
        require_code(code)?;
        self.backend
            .delete_order(&self.schema, code)
            .await
            .inspect_err(|e| error!(error = %e, code = %code, "Order deletion failed"))?;
        info!(code = %code, "Order deleted");
        self.load().await?;
        Ok(())
    }
}

fn require_code(code: &OrderCode) -> std::result::Result<(), DomainError> {
    if code.as_str().trim().is_empty() {
        return Err(DomainError::MissingField { field: "order code" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testkit::backend::{Call, FakeBackend};
    use crate::testkit::domain::{date, order, product, schema, vendor};

    fn backend() -> Arc<FakeBackend> {
        Arc::new(
            FakeBackend::new()
                .with_products(vec![product("P100", "Bracket"), product("P200", "Hinge")])
                .with_sales_vendors(vec![vendor("C100", "Northwind")])
                .with_orders(vec![order("S0100", "20250314"), order("S0099", "20250313")]),
        )
    }

    #[tokio::test]
    async fn opens_on_today_with_full_year_dates() {
        let backend = backend();
        let mut page = OrderRegistration::new(backend.clone(), schema(), date(2025, 3, 14));

        page.load().await.unwrap();

        let rows = page.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ordered_on, "2025-03-14");
        assert_eq!(rows[0].due_on, "");
        assert_eq!(rows[0].vendor, "Acme (V001)");
        match &backend.calls()[0] {
            Call::Orders(params) => {
                assert_eq!(params.from_dt, "20250314");
                assert_eq!(params.to_dt, "20250314");
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn register_refetches_and_shows_server_names() {
        let backend = backend();
        let mut page = OrderRegistration::new(backend.clone(), schema(), date(2025, 3, 14));
        page.load().await.unwrap();

        let draft = OrderDraft::new("P200", "C100")
            .with_quantity(5)
            .with_dates(Some(date(2025, 3, 14)), None);
        let code = page.register(&draft).await.unwrap();

        assert!(code.is_some());
        let calls = backend.calls();
        assert!(matches!(calls[1], Call::RegisterOrder(_)));
        assert!(matches!(calls[2], Call::Orders(_)));
        let rows = page.rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().any(|r| r.product == "Hinge (P200)" && r.quantity == 5));
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_backend() {
        let backend = backend();
        let mut page = OrderRegistration::new(backend.clone(), schema(), date(2025, 3, 14));

        let err = page
            .register(&OrderDraft::new("P100", " "))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Domain(DomainError::MissingField { field: "vendor" })
        ));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn rejected_mutation_skips_refetch() {
        let backend = backend();
        let mut page = OrderRegistration::new(backend.clone(), schema(), date(2025, 3, 14));
        backend.reject_mutations("duplicate order");

        let err = page.delete(&OrderCode::new("S0100")).await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Rejected { .. })));
        assert_eq!(backend.calls(), vec![Call::DeleteOrder(OrderCode::new("S0100"))]);
    }

    #[tokio::test]
    async fn update_and_delete_by_code() {
        let backend = backend();
        let mut page = OrderRegistration::new(backend.clone(), schema(), date(2025, 3, 14));
        page.load().await.unwrap();

        let code = OrderCode::new("S0100");
        let draft = OrderDraft::new("P100", "C100")
            .with_quantity(3)
            .with_dates(Some(date(2025, 3, 14)), Some(date(2025, 3, 31)));
        page.update(&code, &draft).await.unwrap();
        let shown = page.show(&code).unwrap();
        assert_eq!(shown.quantity, 3);
        assert_eq!(shown.due_on.as_deref(), Some("20250331"));

        page.delete(&code).await.unwrap();
        assert!(page.show(&code).is_err());
        assert!(page.rows().is_empty());
    }

    #[tokio::test]
    async fn blank_code_is_rejected_locally() {
        let backend = backend();
        let mut page = OrderRegistration::new(backend.clone(), schema(), date(2025, 3, 14));

        assert!(page.delete(&OrderCode::new("")).await.is_err());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn detail_uses_display_dates() {
        let backend = backend();
        let mut page = OrderRegistration::new(backend, schema(), date(2025, 3, 14));
        page.load().await.unwrap();

        let detail = page.detail(&OrderCode::new("S0100")).unwrap();

        assert_eq!(detail.ordered_on, "2025-03-14");
        assert_eq!(detail.due_on, "");
        assert_eq!(detail.status, "in progress");
    }
}
