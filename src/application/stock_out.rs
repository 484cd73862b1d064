//! Stock-out (shipment) results page.
//!
//! The table shows short dates; the detail view of a single stock-out uses
//! the full year. Mutations are followed by a re-fetch of the range.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, error, info};

use super::display::{date_cell, named};
use crate::domain::{
    DateRange, DomainError, RangePolicy, Schema, StockOut, StockOutDraft, StockOutNo, YearWidth,
};
use crate::error::{ApiError, Result};
use crate::port::Backend;

/// First day of the month up to today.
pub const DEFAULT_POLICY: RangePolicy = RangePolicy::StartOfMonth;

pub const TABLE_WIDTH: YearWidth = YearWidth::Short;
pub const DETAIL_WIDTH: YearWidth = YearWidth::Full;

/// One line of the stock-out table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct StockOutRow {
    #[tabled(rename = "No")]
    pub no: String,
    #[tabled(rename = "Shipped")]
    pub shipped_on: String,
    #[tabled(rename = "Product")]
    pub product: String,
    #[tabled(rename = "Vendor")]
    pub vendor: String,
    #[tabled(rename = "Qty")]
    pub quantity: i64,
    #[tabled(rename = "Note")]
    pub note: String,
}

/// A single stock-out as the detail form shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockOutDetail {
    pub no: String,
    pub shipped_on: String,
    pub product_code: String,
    pub product_name: String,
    pub vendor_code: String,
    pub vendor_name: String,
    pub quantity: i64,
    pub note: String,
}

fn vendor_cell(out: &StockOut) -> String {
    match (&out.vendor_code, &out.vendor_name) {
        (Some(code), Some(name)) => named(code, name),
        (Some(code), None) => code.clone(),
        (None, _) => String::new(),
    }
}

impl From<&StockOut> for StockOutRow {
    fn from(out: &StockOut) -> Self {
        Self {
            no: out.no.to_string(),
            shipped_on: date_cell(out.shipped_on.as_deref(), TABLE_WIDTH),
            product: named(&out.product_code, &out.product_name),
            vendor: vendor_cell(out),
            quantity: out.quantity,
            note: out.note.clone(),
        }
    }
}

impl From<&StockOut> for StockOutDetail {
    fn from(out: &StockOut) -> Self {
        Self {
            no: out.no.to_string(),
            shipped_on: date_cell(out.shipped_on.as_deref(), DETAIL_WIDTH),
            product_code: out.product_code.clone(),
            product_name: out.product_name.clone(),
            vendor_code: out.vendor_code.clone().unwrap_or_default(),
            vendor_name: out.vendor_name.clone().unwrap_or_default(),
            quantity: out.quantity,
            note: out.note.clone(),
        }
    }
}

/// Stock-out page state.
pub struct StockOutResults<B> {
    backend: Arc<B>,
    schema: Schema,
    range: DateRange,
    records: Vec<StockOut>,
}

impl<B: Backend> StockOutResults<B> {
    pub fn new(backend: Arc<B>, schema: Schema, today: NaiveDate) -> Self {
        Self {
            backend,
            schema,
            range: DEFAULT_POLICY.range_at(today),
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Fetch stock-outs for the current range.
    pub async fn load(&mut self) -> Result<&[StockOut]> {
        let params = self.range.to_query_params();
        match self.backend.stock_outs(&self.schema, &params).await {
            Ok(records) => {
                debug!(count = records.len(), range = %self.range, "Loaded stock-outs");
                self.records = records;
                Ok(&self.records)
            }
            Err(e) => {
                error!(error = %e, schema = %self.schema, range = %self.range, "Stock-out lookup failed");
                Err(e)
            }
        }
    }

    /// Move the lower bound, then fetch once.
    pub async fn edit_from(&mut self, from: Option<NaiveDate>) -> Result<&[StockOut]> {
        self.range.set_from(from);
        self.load().await
    }

    /// Move the upper bound, then fetch once.
    pub async fn edit_to(&mut self, to: Option<NaiveDate>) -> Result<&[StockOut]> {
        self.range.set_to(to);
        self.load().await
    }

    /// Replace the whole range, then fetch once.
    pub async fn search(&mut self, range: DateRange) -> Result<&[StockOut]> {
        self.range = range;
        self.load().await
    }

    pub fn rows(&self) -> Vec<StockOutRow> {
        self.records.iter().map(StockOutRow::from).collect()
    }

    /// The loaded stock-out with this number.
    pub fn record(&self, no: &StockOutNo) -> Result<&StockOut> {
        self.records.iter().find(|o| &o.no == no).ok_or_else(|| {
            ApiError::NotFound {
                kind: "stock-out",
                id: no.to_string(),
            }
            .into()
        })
    }

    /// Detail view of a loaded stock-out.
    pub fn detail(&self, no: &StockOutNo) -> Result<StockOutDetail> {
        self.record(no).map(StockOutDetail::from)
    }

    /// Register a stock-out, then re-fetch.
    pub async fn register(&mut self, draft: &StockOutDraft) -> Result<()> {
        draft.validate()?;
        self.backend
            .register_stock_out(&self.schema, draft)
            .await
            .inspect_err(|e| error!(error = %e, "Stock-out registration failed"))?;
        info!(product = %draft.product_code, "Stock-out registered");
        self.load().await?;
        Ok(())
    }

    /// Replace a stock-out's fields, then re-fetch.
    pub async fn update(&mut self, no: &StockOutNo, draft: &StockOutDraft) -> Result<()> {
        require_no(no)?;
        draft.validate()?;
        self.backend
            .update_stock_out(&self.schema, no, draft)
            .await
            .inspect_err(|e| error!(error = %e, no = %no, "Stock-out update failed"))?;
        info!(no = %no, "Stock-out updated");
        self.load().await?;
        Ok(())
    }

    /// Delete a stock-out, then re-fetch.
    pub async fn delete(&mut self, no: &StockOutNo) -> Result<()> {
        require_no(no)?;
        self.backend
            .delete_stock_out(&self.schema, no)
            .await
            .inspect_err(|e| error!(error = %e, no = %no, "Stock-out deletion failed"))?;
        info!(no = %no, "Stock-out deleted");
        self.load().await?;
        Ok(())
    }
}

fn require_no(no: &StockOutNo) -> std::result::Result<(), DomainError> {
    if no.as_str().trim().is_empty() {
        return Err(DomainError::MissingField {
            field: "stock-out number",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QueryParams;
    use crate::testkit::backend::{Call, FakeBackend};
    use crate::testkit::domain::{date, product, schema, stock_out, vendor};

    fn backend() -> Arc<FakeBackend> {
        Arc::new(
            FakeBackend::new()
                .with_products(vec![product("P100", "Bracket")])
                .with_sales_vendors(vec![vendor("C100", "Northwind")])
                .with_stock_outs(vec![
                    stock_out("7", "20250302"),
                    stock_out("6", "20250227"),
                ]),
        )
    }

    #[tokio::test]
    async fn opens_on_month_to_date() {
        let backend = backend();
        let mut page = StockOutResults::new(backend.clone(), schema(), date(2025, 3, 14));

        page.load().await.unwrap();

        assert_eq!(
            backend.calls(),
            vec![Call::StockOuts(QueryParams {
                from_dt: "20250301".into(),
                to_dt: "20250314".into(),
            })]
        );
        assert_eq!(page.rows().len(), 1);
        assert_eq!(page.rows()[0].shipped_on, "25-03-02");
    }

    #[tokio::test]
    async fn detail_uses_full_year() {
        let mut page = StockOutResults::new(backend(), schema(), date(2025, 3, 14));
        page.load().await.unwrap();

        let detail = page.detail(&StockOutNo::new("7")).unwrap();
        assert_eq!(detail.shipped_on, "2025-03-02");
        assert_eq!(detail.vendor_name, "Acme");
        assert!(page.detail(&StockOutNo::new("6")).is_err());
    }

    #[tokio::test]
    async fn register_without_vendor_refetches() {
        let backend = backend();
        let mut page = StockOutResults::new(backend.clone(), schema(), date(2025, 3, 14));

        let draft = StockOutDraft::new(Some(date(2025, 3, 10)), "P100")
            .with_vendor(Some(String::new()))
            .with_quantity(4);
        page.register(&draft).await.unwrap();

        let calls = backend.calls();
        assert!(matches!(&calls[0], Call::RegisterStockOut(d) if d.vendor_code.is_none()));
        assert!(matches!(calls[1], Call::StockOuts(_)));
        let rows = page.rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().any(|r| r.quantity == 4 && r.vendor.is_empty()));
    }

    #[tokio::test]
    async fn draft_without_date_is_rejected_locally() {
        let backend = backend();
        let mut page = StockOutResults::new(backend.clone(), schema(), date(2025, 3, 14));

        assert!(page.register(&StockOutDraft::new(None, "P100")).await.is_err());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn update_then_delete() {
        let backend = backend();
        let mut page = StockOutResults::new(backend.clone(), schema(), date(2025, 3, 14));
        page.load().await.unwrap();
        let no = StockOutNo::new("7");

        let draft = StockOutDraft::new(Some(date(2025, 3, 3)), "P100")
            .with_vendor(Some("C100".into()))
            .with_note(Some("split shipment".into()));
        page.update(&no, &draft).await.unwrap();
        let detail = page.detail(&no).unwrap();
        assert_eq!(detail.shipped_on, "2025-03-03");
        assert_eq!(detail.vendor_name, "Northwind");
        assert_eq!(detail.note, "split shipment");

        page.delete(&no).await.unwrap();
        assert!(page.rows().is_empty());
        assert_eq!(backend.stored_stock_outs().len(), 1);
    }

    #[tokio::test]
    async fn range_edits_repair_ordering() {
        let backend = backend();
        let mut page = StockOutResults::new(backend.clone(), schema(), date(2025, 3, 14));

        page.edit_to(Some(date(2025, 2, 27))).await.unwrap();

        assert_eq!(page.range().from(), Some(date(2025, 2, 27)));
        assert_eq!(page.rows().len(), 1);
        assert_eq!(page.rows()[0].no, "6");
    }
}
