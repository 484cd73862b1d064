//! Backend port for the REST API every page talks to.
//!
//! Each method maps onto one backend endpoint. The schema is passed on every
//! call because it belongs to the calling page, not to the transport.

use std::future::Future;

use crate::domain::{
    Order, OrderCode, OrderDraft, Product, QueryParams, Schema, StockItem, StockOut, StockOutDraft,
    StockOutNo, Vendor,
};
use crate::error::Result;

/// Read and mutation operations offered by the business backend.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Range queries take already-normalized [`QueryParams`]; open bounds
///   arrive as sentinel dates and need no special handling
/// - A mutation the backend answers with an `error` field must surface as
///   [`ApiError::Rejected`](crate::error::ApiError::Rejected)
pub trait Backend: Send + Sync {
    /// Every vendor in the schema.
    fn vendors(&self, schema: &Schema) -> impl Future<Output = Result<Vec<Vendor>>> + Send;

    /// Vendors that can receive shipments (sales vendors).
    fn sales_vendors(&self, schema: &Schema)
        -> impl Future<Output = Result<Vec<Vendor>>> + Send;

    /// Finished products.
    fn products(&self, schema: &Schema) -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// Current stock per product.
    fn stock(&self, schema: &Schema) -> impl Future<Output = Result<Vec<StockItem>>> + Send;

    /// Orders whose order date falls inside the range, inclusive.
    fn orders(
        &self,
        schema: &Schema,
        range: &QueryParams,
    ) -> impl Future<Output = Result<Vec<Order>>> + Send;

    /// Register an order. Returns the new order code when the backend echoes one.
    fn register_order(
        &self,
        schema: &Schema,
        draft: &OrderDraft,
    ) -> impl Future<Output = Result<Option<OrderCode>>> + Send;

    /// Replace an existing order's fields.
    fn update_order(
        &self,
        schema: &Schema,
        code: &OrderCode,
        draft: &OrderDraft,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Delete an order.
    fn delete_order(
        &self,
        schema: &Schema,
        code: &OrderCode,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Stock-outs whose ship date falls inside the range, inclusive.
    fn stock_outs(
        &self,
        schema: &Schema,
        range: &QueryParams,
    ) -> impl Future<Output = Result<Vec<StockOut>>> + Send;

    /// Register a stock-out result.
    fn register_stock_out(
        &self,
        schema: &Schema,
        draft: &StockOutDraft,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Replace an existing stock-out's fields.
    fn update_stock_out(
        &self,
        schema: &Schema,
        no: &StockOutNo,
        draft: &StockOutDraft,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Delete a stock-out.
    fn delete_stock_out(
        &self,
        schema: &Schema,
        no: &StockOutNo,
    ) -> impl Future<Output = Result<()>> + Send;
}
