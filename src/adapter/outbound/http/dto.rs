//! Backend data transfer objects.
//!
//! Every response field is optional on the wire. Codes and quantities show
//! up as JSON strings on some schemas and as numbers on others, so they
//! deserialize through [`Loose`].
//!
//! Example list row:
//! ```json
//! {"suju_cd":"S2503140001","suju_dt":"20250314","out_dt_to":"","jepum_cd":"P100","amt":"12","process_cd":"01"}
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::date_range::payload_date;
use crate::domain::{
    Order, OrderCode, OrderDraft, ProcessStatus, Product, StockItem, StockOut, StockOutDraft,
    StockOutNo, Vendor,
};

/// A scalar that may arrive as a string or a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Loose {
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }

    /// Integer value; unparseable text counts as zero.
    #[must_use]
    pub fn as_int(&self) -> i64 {
        match self {
            Self::Int(n) => *n,
            Self::Float(n) => *n as i64,
            Self::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                    .unwrap_or(0)
            }
        }
    }
}

fn text(value: Option<Loose>) -> String {
    value.map(Loose::into_text).unwrap_or_default()
}

fn non_empty(value: Option<Loose>) -> Option<String> {
    value.map(Loose::into_text).filter(|s| !s.trim().is_empty())
}

fn int(value: Option<&Loose>) -> i64 {
    value.map_or(0, Loose::as_int)
}

#[derive(Debug, Default, Deserialize)]
pub struct VendorRow {
    #[serde(default)]
    pub vender_cd: Option<Loose>,
    #[serde(default)]
    pub vender_nm: Option<Loose>,
    #[serde(default)]
    pub city: Option<Loose>,
    #[serde(default)]
    pub address1: Option<Loose>,
    #[serde(default)]
    pub tel: Option<Loose>,
}

impl VendorRow {
    #[must_use]
    pub fn into_domain(self) -> Vendor {
        Vendor {
            code: text(self.vender_cd),
            name: text(self.vender_nm),
            city: non_empty(self.city),
            address: non_empty(self.address1),
            phone: non_empty(self.tel),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductRow {
    #[serde(default)]
    pub jepum_cd: Option<Loose>,
    #[serde(default)]
    pub jepum_nm: Option<Loose>,
}

impl ProductRow {
    #[must_use]
    pub fn into_domain(self) -> Product {
        Product {
            code: text(self.jepum_cd),
            name: text(self.jepum_nm),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StockRow {
    #[serde(default)]
    pub jepum_cd: Option<Loose>,
    #[serde(default)]
    pub jepum_nm: Option<Loose>,
    #[serde(default)]
    pub spec: Option<Loose>,
    #[serde(default)]
    pub amt: Option<Loose>,
}

impl StockRow {
    #[must_use]
    pub fn into_domain(self) -> StockItem {
        let quantity = int(self.amt.as_ref());
        StockItem {
            code: text(self.jepum_cd),
            name: text(self.jepum_nm),
            spec: non_empty(self.spec),
            quantity,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct OrderRow {
    #[serde(default)]
    pub suju_cd: Option<Loose>,
    #[serde(default)]
    pub suju_dt: Option<Loose>,
    #[serde(default)]
    pub out_dt_to: Option<Loose>,
    #[serde(default)]
    pub jepum_cd: Option<Loose>,
    #[serde(default)]
    pub jepum_nm: Option<Loose>,
    #[serde(default)]
    pub vender_cd: Option<Loose>,
    #[serde(default)]
    pub vender_nm: Option<Loose>,
    #[serde(default)]
    pub amt: Option<Loose>,
    #[serde(default)]
    pub bigo: Option<Loose>,
    #[serde(default)]
    pub process_cd: Option<Loose>,
}

impl OrderRow {
    #[must_use]
    pub fn into_domain(self) -> Order {
        let quantity = int(self.amt.as_ref());
        let status = non_empty(self.process_cd);
        Order {
            code: OrderCode::new(text(self.suju_cd)),
            ordered_on: non_empty(self.suju_dt),
            due_on: non_empty(self.out_dt_to),
            product_code: text(self.jepum_cd),
            product_name: text(self.jepum_nm),
            vendor_code: text(self.vender_cd),
            vendor_name: text(self.vender_nm),
            quantity,
            note: text(self.bigo),
            status: ProcessStatus::from_code(status.as_deref()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StockOutRow {
    #[serde(default)]
    pub inout_no: Option<Loose>,
    #[serde(default)]
    pub inout_dt: Option<Loose>,
    #[serde(default)]
    pub jepum_cd: Option<Loose>,
    #[serde(default)]
    pub jepum_nm: Option<Loose>,
    #[serde(default)]
    pub vender_cd: Option<Loose>,
    #[serde(default)]
    pub vender_nm: Option<Loose>,
    #[serde(default)]
    pub confirm_amt: Option<Loose>,
    #[serde(default)]
    pub bigo: Option<Loose>,
}

impl StockOutRow {
    #[must_use]
    pub fn into_domain(self) -> StockOut {
        let quantity = int(self.confirm_amt.as_ref());
        StockOut {
            no: StockOutNo::new(text(self.inout_no)),
            shipped_on: non_empty(self.inout_dt),
            product_code: text(self.jepum_cd),
            product_name: text(self.jepum_nm),
            vendor_code: non_empty(self.vender_cd),
            vendor_name: non_empty(self.vender_nm),
            quantity,
            note: text(self.bigo),
        }
    }
}

/// Body of every insert/update/delete response.
#[derive(Debug, Default, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub suju_cd: Option<Loose>,
}

impl MutationResponse {
    /// The rejection message, if the backend reported one.
    #[must_use]
    pub fn rejection(&self) -> Option<String> {
        match &self.error {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Order registration and update body.
#[derive(Debug, Serialize)]
pub struct OrderPayload<'a> {
    pub suju_dt: Option<String>,
    pub out_dt_to: Option<String>,
    pub jepum_cd: &'a str,
    pub vender_cd: &'a str,
    pub amt: i64,
    pub bigo: &'a str,
    pub suju_seq: &'a str,
    pub suju_gbn: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suju_cd: Option<&'a str>,
}

impl<'a> OrderPayload<'a> {
    #[must_use]
    pub fn new(draft: &'a OrderDraft, code: Option<&'a OrderCode>) -> Self {
        Self {
            suju_dt: draft.ordered_on.map(payload_date),
            out_dt_to: draft.due_on.map(payload_date),
            jepum_cd: &draft.product_code,
            vender_cd: &draft.vendor_code,
            amt: draft.quantity,
            bigo: draft.note.as_deref().unwrap_or_default(),
            suju_seq: &draft.sequence,
            suju_gbn: &draft.kind,
            suju_cd: code.map(OrderCode::as_str),
        }
    }
}

/// Stock-out registration and update body.
#[derive(Debug, Serialize)]
pub struct StockOutPayload<'a> {
    pub inout_dt: Option<String>,
    pub jepum_cd: &'a str,
    pub vender_cd: Option<&'a str>,
    pub confirm_amt: i64,
    pub bigo: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inout_no: Option<&'a str>,
}

impl<'a> StockOutPayload<'a> {
    #[must_use]
    pub fn new(draft: &'a StockOutDraft, no: Option<&'a StockOutNo>) -> Self {
        Self {
            inout_dt: draft.shipped_on.map(payload_date),
            jepum_cd: &draft.product_code,
            vender_cd: draft.vendor_code.as_deref(),
            confirm_amt: draft.quantity,
            bigo: draft.note.as_deref().unwrap_or_default(),
            inout_no: no.map(StockOutNo::as_str),
        }
    }
}
