//! Builders for domain records used across tests.
//!
//! Dates are given in wire form (`YYYYMMDD`) because that is what the
//! backend hands the pages.

use chrono::NaiveDate;

use crate::domain::{
    Order, OrderCode, ProcessStatus, Product, Schema, StockItem, StockOut, StockOutNo, Vendor,
};

/// The schema used by tests unless a test needs a second one.
pub fn schema() -> Schema {
    Schema::try_new("25_DO").expect("valid schema")
}

/// Shorthand for a calendar date.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn vendor(code: &str, name: &str) -> Vendor {
    Vendor {
        code: code.to_string(),
        name: name.to_string(),
        city: None,
        address: None,
        phone: None,
    }
}

pub fn product(code: &str, name: &str) -> Product {
    Product {
        code: code.to_string(),
        name: name.to_string(),
    }
}

pub fn stock_item(code: &str, name: &str, spec: Option<&str>, quantity: i64) -> StockItem {
    StockItem {
        code: code.to_string(),
        name: name.to_string(),
        spec: spec.map(str::to_string),
        quantity,
    }
}

/// An in-progress order placed on `ordered_on` with no due date.
pub fn order(code: &str, ordered_on: &str) -> Order {
    Order {
        code: OrderCode::new(code),
        ordered_on: Some(ordered_on.to_string()),
        due_on: None,
        product_code: "P100".to_string(),
        product_name: "Bracket".to_string(),
        vendor_code: "V001".to_string(),
        vendor_name: "Acme".to_string(),
        quantity: 1,
        note: String::new(),
        status: ProcessStatus::InProgress,
    }
}

/// A stock-out of one unit shipped on `shipped_on`.
pub fn stock_out(no: &str, shipped_on: &str) -> StockOut {
    StockOut {
        no: StockOutNo::new(no),
        shipped_on: Some(shipped_on.to_string()),
        product_code: "P100".to_string(),
        product_name: "Bracket".to_string(),
        vendor_code: Some("V001".to_string()),
        vendor_name: Some("Acme".to_string()),
        quantity: 1,
        note: String::new(),
    }
}
