//! Backend-agnostic domain types.
//!
//! - [`date_range`] - the date-range query normalizer shared by the range pages
//! - [`schema`] - the `v_db` partition selector
//! - record types for vendors, products, stock, orders and stock-outs

pub mod date_range;
pub mod error;
pub mod id;
pub mod order;
pub mod product;
pub mod schema;
pub mod search;
pub mod stock_out;
pub mod vendor;

pub use date_range::{DateRange, QueryParams, RangePolicy, YearWidth};
pub use error::DomainError;
pub use id::{OrderCode, StockOutNo};
pub use order::{Order, OrderDraft, ProcessStatus};
pub use product::{Product, StockItem};
pub use schema::Schema;
pub use stock_out::{StockOut, StockOutDraft};
pub use vendor::Vendor;
