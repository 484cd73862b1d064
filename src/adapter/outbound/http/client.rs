//! REST client for the business backend.
//!
//! Implements the [`Backend`] port over `reqwest`. List endpoints return a
//! JSON array of rows; mutation endpoints return an object that carries an
//! `error` field when the backend refuses the change.

use std::time::Duration;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use super::dto::{
    MutationResponse, OrderPayload, OrderRow, ProductRow, StockOutPayload, StockOutRow, StockRow,
    VendorRow,
};
use super::endpoint::Endpoint;
use crate::domain::{
    Order, OrderCode, OrderDraft, Product, QueryParams, Schema, StockItem, StockOut, StockOutDraft,
    StockOutNo, Vendor,
};
use crate::error::{ApiError, Result};
use crate::port::Backend;

/// HTTP client for the business backend.
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Create a client rooted at `base_url` with a per-request timeout.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        schema: &Schema,
        extra: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let url = endpoint.url(&self.base_url, schema, extra);
        info!(url = %url, operation = endpoint.operation(), "Fetching rows");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                operation: endpoint.operation(),
                status: status.as_u16(),
            }
            .into());
        }

        let rows: Vec<T> = response.json().await?;
        debug!(count = rows.len(), operation = endpoint.operation(), "Fetched rows");
        Ok(rows)
    }

    async fn mutate<B: Serialize + Sync>(
        &self,
        method: Method,
        endpoint: Endpoint,
        schema: &Schema,
        extra: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<MutationResponse> {
        let url = endpoint.url(&self.base_url, schema, extra);
        info!(url = %url, method = %method, operation = endpoint.operation(), "Sending mutation");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let reply = if text.trim().is_empty() {
            MutationResponse::default()
        } else {
            serde_json::from_str::<MutationResponse>(&text).unwrap_or_else(|e| {
                debug!(error = %e, status = status.as_u16(), "Mutation body was not JSON");
                MutationResponse::default()
            })
        };

        if let Some(message) = reply.rejection() {
            warn!(operation = endpoint.operation(), %message, "Backend rejected mutation");
            return Err(ApiError::Rejected {
                operation: endpoint.operation(),
                message,
            }
            .into());
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                operation: endpoint.operation(),
                status: status.as_u16(),
            }
            .into());
        }
        Ok(reply)
    }
}

impl Backend for HttpBackend {
    async fn vendors(&self, schema: &Schema) -> Result<Vec<Vendor>> {
        let rows: Vec<VendorRow> = self.fetch_rows(Endpoint::Vendors, schema, &[]).await?;
        Ok(rows.into_iter().map(VendorRow::into_domain).collect())
    }

    async fn sales_vendors(&self, schema: &Schema) -> Result<Vec<Vendor>> {
        let rows: Vec<VendorRow> = self
            .fetch_rows(Endpoint::SalesVendors, schema, &[])
            .await?;
        Ok(rows.into_iter().map(VendorRow::into_domain).collect())
    }

    async fn products(&self, schema: &Schema) -> Result<Vec<Product>> {
        let rows: Vec<ProductRow> = self.fetch_rows(Endpoint::Products, schema, &[]).await?;
        Ok(rows.into_iter().map(ProductRow::into_domain).collect())
    }

    async fn stock(&self, schema: &Schema) -> Result<Vec<StockItem>> {
        let rows: Vec<StockRow> = self.fetch_rows(Endpoint::Stock, schema, &[]).await?;
        Ok(rows.into_iter().map(StockRow::into_domain).collect())
    }

    async fn orders(&self, schema: &Schema, range: &QueryParams) -> Result<Vec<Order>> {
        let rows: Vec<OrderRow> = self
            .fetch_rows(
                Endpoint::Orders,
                schema,
                &[("from_dt", range.from_dt.as_str()), ("to_dt", range.to_dt.as_str())],
            )
            .await?;
        Ok(rows.into_iter().map(OrderRow::into_domain).collect())
    }

    async fn register_order(&self, schema: &Schema, draft: &OrderDraft) -> Result<Option<OrderCode>> {
        let payload = OrderPayload::new(draft, None);
        let reply = self
            .mutate(Method::POST, Endpoint::RegisterOrder, schema, &[], Some(&payload))
            .await?;
        Ok(reply
            .suju_cd
            .map(|code| OrderCode::new(code.into_text()))
            .filter(|code| !code.as_str().is_empty()))
    }

    async fn update_order(&self, schema: &Schema, code: &OrderCode, draft: &OrderDraft) -> Result<()> {
        let payload = OrderPayload::new(draft, Some(code));
        self.mutate(Method::PUT, Endpoint::UpdateOrder, schema, &[], Some(&payload))
            .await?;
        Ok(())
    }

    async fn delete_order(&self, schema: &Schema, code: &OrderCode) -> Result<()> {
        self.mutate::<()>(
            Method::DELETE,
            Endpoint::DeleteOrder,
            schema,
            &[("suju_cd", code.as_str())],
            None,
        )
        .await?;
        Ok(())
    }

    async fn stock_outs(&self, schema: &Schema, range: &QueryParams) -> Result<Vec<StockOut>> {
        let rows: Vec<StockOutRow> = self
            .fetch_rows(
                Endpoint::StockOuts,
                schema,
                &[("from_dt", range.from_dt.as_str()), ("to_dt", range.to_dt.as_str())],
            )
            .await?;
        Ok(rows.into_iter().map(StockOutRow::into_domain).collect())
    }

    async fn register_stock_out(&self, schema: &Schema, draft: &StockOutDraft) -> Result<()> {
        let payload = StockOutPayload::new(draft, None);
        self.mutate(Method::POST, Endpoint::RegisterStockOut, schema, &[], Some(&payload))
            .await?;
        Ok(())
    }

    async fn update_stock_out(
        &self,
        schema: &Schema,
        no: &StockOutNo,
        draft: &StockOutDraft,
    ) -> Result<()> {
        let payload = StockOutPayload::new(draft, Some(no));
        self.mutate(Method::PUT, Endpoint::UpdateStockOut, schema, &[], Some(&payload))
            .await?;
        Ok(())
    }

    async fn delete_stock_out(&self, schema: &Schema, no: &StockOutNo) -> Result<()> {
        self.mutate::<()>(
            Method::DELETE,
            Endpoint::DeleteStockOut,
            schema,
            &[("inout_no", no.as_str())],
            None,
        )
        .await?;
        Ok(())
    }
}
