//! In-memory [`Backend`] that records every call.
//!
//! Range queries filter on the wire date exactly like the real backend
//! (inclusive, `YYYYMMDD` string comparison), and mutations edit the stored
//! rows so a re-fetch observes them.

use parking_lot::Mutex;

use crate::domain::date_range::wire_date;
use crate::domain::{
    Order, OrderCode, OrderDraft, ProcessStatus, Product, QueryParams, Schema, StockItem,
    StockOut, StockOutDraft, StockOutNo, Vendor,
};
use crate::error::{ApiError, Result};
use crate::port::Backend;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Vendors,
    SalesVendors,
    Products,
    Stock,
    Orders(QueryParams),
    RegisterOrder(OrderDraft),
    UpdateOrder(OrderCode, OrderDraft),
    DeleteOrder(OrderCode),
    StockOuts(QueryParams),
    RegisterStockOut(StockOutDraft),
    UpdateStockOut(StockOutNo, StockOutDraft),
    DeleteStockOut(StockOutNo),
}

#[derive(Default)]
struct State {
    vendors: Vec<Vendor>,
    sales_vendors: Vec<Vendor>,
    products: Vec<Product>,
    stock: Vec<StockItem>,
    orders: Vec<Order>,
    stock_outs: Vec<StockOut>,
    calls: Vec<(Schema, Call)>,
    reject_with: Option<String>,
    fail_status: Option<u16>,
    next_id: u32,
}

/// Scriptable in-memory backend.
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<State>,
}

impl FakeBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_vendors(self, vendors: Vec<Vendor>) -> Self {
        self.state.lock().vendors = vendors;
        self
    }

    #[must_use]
    pub fn with_sales_vendors(self, vendors: Vec<Vendor>) -> Self {
        self.state.lock().sales_vendors = vendors;
        self
    }

    #[must_use]
    pub fn with_products(self, products: Vec<Product>) -> Self {
        self.state.lock().products = products;
        self
    }

    #[must_use]
    pub fn with_stock(self, stock: Vec<StockItem>) -> Self {
        self.state.lock().stock = stock;
        self
    }

    #[must_use]
    pub fn with_orders(self, orders: Vec<Order>) -> Self {
        self.state.lock().orders = orders;
        self
    }

    #[must_use]
    pub fn with_stock_outs(self, stock_outs: Vec<StockOut>) -> Self {
        self.state.lock().stock_outs = stock_outs;
        self
    }

    /// Answer every later mutation with an `error` field.
    pub fn reject_mutations(&self, message: &str) {
        self.state.lock().reject_with = Some(message.to_string());
    }

    /// Answer every later call with this HTTP status.
    pub fn fail_with_status(&self, status: u16) {
        self.state.lock().fail_status = Some(status);
    }

    /// Calls received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.iter().map(|(_, c)| c.clone()).collect()
    }

    /// Schemas the calls were made with, oldest first.
    #[must_use]
    pub fn schemas(&self) -> Vec<Schema> {
        self.state.lock().calls.iter().map(|(s, _)| s.clone()).collect()
    }

    /// Number of list fetches (range or not) received so far.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    Call::Vendors
                        | Call::SalesVendors
                        | Call::Products
                        | Call::Stock
                        | Call::Orders(_)
                        | Call::StockOuts(_)
                )
            })
            .count()
    }

    #[must_use]
    pub fn stored_orders(&self) -> Vec<Order> {
        self.state.lock().orders.clone()
    }

    #[must_use]
    pub fn stored_stock_outs(&self) -> Vec<StockOut> {
        self.state.lock().stock_outs.clone()
    }

    fn record(&self, schema: &Schema, call: Call, operation: &'static str) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push((schema.clone(), call));
        if let Some(status) = state.fail_status {
            return Err(ApiError::Status { operation, status }.into());
        }
        Ok(())
    }

    fn check_rejection(&self, operation: &'static str) -> Result<()> {
        match self.state.lock().reject_with.clone() {
            Some(message) => Err(ApiError::Rejected { operation, message }.into()),
            None => Ok(()),
        }
    }

    fn product_name(state: &State, code: &str) -> String {
        state
            .products
            .iter()
            .find(|p| p.code == code)
            .map(|p| p.name.clone())
            .unwrap_or_default()
    }

    fn vendor_name(state: &State, code: &str) -> String {
        state
            .sales_vendors
            .iter()
            .chain(state.vendors.iter())
            .find(|v| v.code == code)
            .map(|v| v.name.clone())
            .unwrap_or_default()
    }

    fn apply_order(state: &State, order: &mut Order, draft: &OrderDraft) {
        order.ordered_on = draft.ordered_on.map(wire_date);
        order.due_on = draft.due_on.map(wire_date);
        order.product_code = draft.product_code.clone();
        order.product_name = Self::product_name(state, &draft.product_code);
        order.vendor_code = draft.vendor_code.clone();
        order.vendor_name = Self::vendor_name(state, &draft.vendor_code);
        order.quantity = draft.quantity;
        order.note = draft.note.clone().unwrap_or_default();
    }

    fn apply_stock_out(state: &State, out: &mut StockOut, draft: &StockOutDraft) {
        out.shipped_on = draft.shipped_on.map(wire_date);
        out.product_code = draft.product_code.clone();
        out.product_name = Self::product_name(state, &draft.product_code);
        out.vendor_code = draft.vendor_code.clone();
        out.vendor_name = draft
            .vendor_code
            .as_deref()
            .map(|code| Self::vendor_name(state, code));
        out.quantity = draft.quantity;
        out.note = draft.note.clone().unwrap_or_default();
    }
}

fn in_range(wire: Option<&str>, range: &QueryParams) -> bool {
    wire.is_some_and(|d| d >= range.from_dt.as_str() && d <= range.to_dt.as_str())
}

impl Backend for FakeBackend {
    async fn vendors(&self, schema: &Schema) -> Result<Vec<Vendor>> {
        self.record(schema, Call::Vendors, "vendor lookup")?;
        Ok(self.state.lock().vendors.clone())
    }

    async fn sales_vendors(&self, schema: &Schema) -> Result<Vec<Vendor>> {
        self.record(schema, Call::SalesVendors, "sales vendor lookup")?;
        Ok(self.state.lock().sales_vendors.clone())
    }

    async fn products(&self, schema: &Schema) -> Result<Vec<Product>> {
        self.record(schema, Call::Products, "product lookup")?;
        Ok(self.state.lock().products.clone())
    }

    async fn stock(&self, schema: &Schema) -> Result<Vec<StockItem>> {
        self.record(schema, Call::Stock, "stock inquiry")?;
        Ok(self.state.lock().stock.clone())
    }

    async fn orders(&self, schema: &Schema, range: &QueryParams) -> Result<Vec<Order>> {
        self.record(schema, Call::Orders(range.clone()), "order lookup")?;
        Ok(self
            .state
            .lock()
            .orders
            .iter()
            .filter(|o| in_range(o.ordered_on.as_deref(), range))
            .cloned()
            .collect())
    }

    async fn register_order(&self, schema: &Schema, draft: &OrderDraft) -> Result<Option<OrderCode>> {
        self.record(schema, Call::RegisterOrder(draft.clone()), "order registration")?;
        self.check_rejection("order registration")?;

        let mut state = self.state.lock();
        state.next_id += 1;
        let code = OrderCode::new(format!("S{:04}", state.next_id));
        let mut order = Order {
            code: code.clone(),
            ordered_on: None,
            due_on: None,
            product_code: String::new(),
            product_name: String::new(),
            vendor_code: String::new(),
            vendor_name: String::new(),
            quantity: 0,
            note: String::new(),
            status: ProcessStatus::InProgress,
        };
        Self::apply_order(&state, &mut order, draft);
        state.orders.push(order);
        Ok(Some(code))
    }

    async fn update_order(&self, schema: &Schema, code: &OrderCode, draft: &OrderDraft) -> Result<()> {
        self.record(
            schema,
            Call::UpdateOrder(code.clone(), draft.clone()),
            "order update",
        )?;
        self.check_rejection("order update")?;

        let mut state = self.state.lock();
        let Some(index) = state.orders.iter().position(|o| &o.code == code) else {
            return Err(ApiError::Rejected {
                operation: "order update",
                message: format!("no order {code}"),
            }
            .into());
        };
        let mut order = state.orders[index].clone();
        Self::apply_order(&state, &mut order, draft);
        state.orders[index] = order;
        Ok(())
    }

    async fn delete_order(&self, schema: &Schema, code: &OrderCode) -> Result<()> {
        self.record(schema, Call::DeleteOrder(code.clone()), "order deletion")?;
        self.check_rejection("order deletion")?;
        self.state.lock().orders.retain(|o| &o.code != code);
        Ok(())
    }

    async fn stock_outs(&self, schema: &Schema, range: &QueryParams) -> Result<Vec<StockOut>> {
        self.record(schema, Call::StockOuts(range.clone()), "stock-out lookup")?;
        Ok(self
            .state
            .lock()
            .stock_outs
            .iter()
            .filter(|o| in_range(o.shipped_on.as_deref(), range))
            .cloned()
            .collect())
    }

    async fn register_stock_out(&self, schema: &Schema, draft: &StockOutDraft) -> Result<()> {
        self.record(
            schema,
            Call::RegisterStockOut(draft.clone()),
            "stock-out registration",
        )?;
        self.check_rejection("stock-out registration")?;

        let mut state = self.state.lock();
        state.next_id += 1;
        let mut out = StockOut {
            no: StockOutNo::new(state.next_id.to_string()),
            shipped_on: None,
            product_code: String::new(),
            product_name: String::new(),
            vendor_code: None,
            vendor_name: None,
            quantity: 0,
            note: String::new(),
        };
        Self::apply_stock_out(&state, &mut out, draft);
        state.stock_outs.push(out);
        Ok(())
    }

    async fn update_stock_out(
        &self,
        schema: &Schema,
        no: &StockOutNo,
        draft: &StockOutDraft,
    ) -> Result<()> {
        self.record(
            schema,
            Call::UpdateStockOut(no.clone(), draft.clone()),
            "stock-out update",
        )?;
        self.check_rejection("stock-out update")?;

        let mut state = self.state.lock();
        let Some(index) = state.stock_outs.iter().position(|o| &o.no == no) else {
            return Err(ApiError::Rejected {
                operation: "stock-out update",
                message: format!("no stock-out {no}"),
            }
            .into());
        };
        let mut out = state.stock_outs[index].clone();
        Self::apply_stock_out(&state, &mut out, draft);
        state.stock_outs[index] = out;
        Ok(())
    }

    async fn delete_stock_out(&self, schema: &Schema, no: &StockOutNo) -> Result<()> {
        self.record(schema, Call::DeleteStockOut(no.clone()), "stock-out deletion")?;
        self.check_rejection("stock-out deletion")?;
        self.state.lock().stock_outs.retain(|o| &o.no != no);
        Ok(())
    }
}
