//! Application services (use cases).
//!
//! Each service plays one page of the console: it owns the page's schema,
//! its current list, and (for the range pages) its [`DateRange`]. Services
//! are generic over the [`Backend`](crate::port::Backend) port and never
//! splice local lists; after a mutation they re-fetch and take the server's
//! answer as the truth.
//!
//! [`DateRange`]: crate::domain::DateRange

pub mod order_progress;
pub mod order_registration;
pub mod reference;
pub mod stock_inquiry;
pub mod stock_out;
pub mod vendor_lookup;

mod display;

pub use order_progress::{OrderProgress, ProgressRow};
pub use order_registration::{OrderDetail, OrderRegistration, OrderRow};
pub use reference::ReferenceLists;
pub use stock_inquiry::StockInquiry;
pub use stock_out::{StockOutDetail, StockOutResults, StockOutRow};
pub use vendor_lookup::{VendorLookup, VendorScope};
