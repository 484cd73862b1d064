//! Production order progress page.
//!
//! Lists orders in a date range and labels their production status. Each
//! edit to a bound goes through the [`DateRange`] repair rules and is
//! followed by exactly one fetch with the repaired range.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, error};

use super::display::{date_cell, named};
use crate::domain::{DateRange, Order, RangePolicy, Schema, YearWidth};
use crate::error::Result;
use crate::port::Backend;

/// One month back up to today.
pub const DEFAULT_POLICY: RangePolicy = RangePolicy::MonthAgo;

/// Progress dates drop the century.
pub const DATE_WIDTH: YearWidth = YearWidth::Short;

/// Shown in the due column while no due date has been set.
pub const UNDECIDED: &str = "undecided";

/// One line of the progress table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ProgressRow {
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
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&Order> for ProgressRow {
    fn from(order: &Order) -> Self {
        let due_on = date_cell(order.due_on.as_deref(), DATE_WIDTH);
        Self {
            code: order.code.to_string(),
            ordered_on: date_cell(order.ordered_on.as_deref(), DATE_WIDTH),
            due_on: if due_on.is_empty() {
                UNDECIDED.to_string()
            } else {
                due_on
            },
            product: named(&order.product_code, &order.product_name),
            vendor: named(&order.vendor_code, &order.vendor_name),
            quantity: order.quantity,
            status: order.status.label().to_string(),
        }
    }
}

/// Order progress page state.
pub struct OrderProgress<B> {
    backend: Arc<B>,
    schema: Schema,
    range: DateRange,
    orders: Vec<Order>,
}

impl<B: Backend> OrderProgress<B> {
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

    /// Fetch orders for the current range.
    pub async fn load(&mut self) -> Result<&[Order]> {
        let params = self.range.to_query_params();
        match self.backend.orders(&self.schema, &params).await {
            Ok(orders) => {
                debug!(count = orders.len(), range = %self.range, "Loaded order progress");
                self.orders = orders;
                Ok(&self.orders)
            }
            Err(e) => {
                error!(error = %e, schema = %self.schema, range = %self.range, "Order progress lookup failed");
                Err(e)
            }
        }
    }

    /// Move the lower bound, then fetch once.
    pub async fn edit_from(&mut self, from: Option<NaiveDate>) -> Result<&[Order]> {
        self.range.set_from(from);
        self.load().await
    }

    /// Move the upper bound, then fetch once.
    pub async fn edit_to(&mut self, to: Option<NaiveDate>) -> Result<&[Order]> {
        self.range.set_to(to);
        self.load().await
    }

    /// Replace the whole range, then fetch once.
    pub async fn search(&mut self, range: DateRange) -> Result<&[Order]> {
        self.range = range;
        self.load().await
    }

    pub fn rows(&self) -> Vec<ProgressRow> {
        self.orders.iter().map(ProgressRow::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProcessStatus, QueryParams};
    use crate::testkit::backend::{Call, FakeBackend};
    use crate::testkit::domain::{date, order, schema};

    fn params(from: &str, to: &str) -> QueryParams {
        QueryParams {
            from_dt: from.into(),
            to_dt: to.into(),
        }
    }

    #[tokio::test]
    async fn default_range_is_one_month_back() {
        let backend = Arc::new(FakeBackend::new());
        let mut page = OrderProgress::new(backend.clone(), schema(), date(2025, 3, 31));

        page.load().await.unwrap();

        assert_eq!(backend.calls(), vec![Call::Orders(params("20250228", "20250331"))]);
    }

    #[tokio::test]
    async fn each_edit_fetches_once_with_repaired_range() {
        let backend = Arc::new(FakeBackend::new());
        let mut page = OrderProgress::new(backend.clone(), schema(), date(2025, 3, 14));

        page.edit_from(Some(date(2025, 3, 20))).await.unwrap();
        page.edit_to(None).await.unwrap();
        page.edit_from(None).await.unwrap();

        assert_eq!(
            backend.calls(),
            vec![
                Call::Orders(params("20250320", "20250320")),
                Call::Orders(params("20250320", "20991231")),
                Call::Orders(params("19990101", "20991231")),
            ]
        );
    }

    #[tokio::test]
    async fn rows_use_short_dates_and_status_labels() {
        let mut done = order("S0002", "20250310");
        done.due_on = Some("20250325".into());
        done.status = ProcessStatus::Done;
        let mut odd = order("S0003", "20250311");
        odd.status = ProcessStatus::from_code(Some("15"));
        let backend = Arc::new(FakeBackend::new().with_orders(vec![
            order("S0001", "20250309"),
            done,
            odd,
        ]));
        let mut page = OrderProgress::new(backend, schema(), date(2025, 3, 14));
        page.load().await.unwrap();

        let rows = page.rows();
        assert_eq!(rows[0].ordered_on, "25-03-09");
        assert_eq!(rows[0].due_on, UNDECIDED);
        assert_eq!(rows[0].status, "in progress");
        assert_eq!(rows[1].due_on, "25-03-25");
        assert_eq!(rows[1].status, "done");
        assert_eq!(rows[2].status, "15");
    }

    #[tokio::test]
    async fn malformed_wire_dates_pass_through() {
        let mut odd = order("S0004", "2025031");
        odd.due_on = Some(String::new());
        let backend = Arc::new(FakeBackend::new().with_orders(vec![odd]));
        let mut page = OrderProgress::new(backend, schema(), date(2025, 3, 14));

        page.search(DateRange::unbounded()).await.unwrap();

        let rows = page.rows();
        assert_eq!(rows[0].ordered_on, "2025031");
        assert_eq!(rows[0].due_on, UNDECIDED);
    }

    #[tokio::test]
    async fn failed_fetch_is_reported() {
        let backend = Arc::new(FakeBackend::new());
        backend.fail_with_status(502);
        let mut page = OrderProgress::new(backend.clone(), schema(), date(2025, 3, 14));

        assert!(page.edit_to(Some(date(2025, 3, 1))).await.is_err());
        assert_eq!(page.range().from(), Some(date(2025, 2, 14)));
        assert_eq!(page.range().to(), Some(date(2025, 3, 1)));
    }
}
