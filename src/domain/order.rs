//! Customer orders (`suju`) and their production progress.

use chrono::NaiveDate;
use serde::Serialize;

use super::date_range::parse_date;
use super::error::DomainError;
use super::id::OrderCode;

const IN_PROGRESS_CODE: &str = "01";
const DONE_CODE: &str = "20";

/// Default order sequence sent with every registration.
pub const DEFAULT_SEQUENCE: &str = "01";

/// Default order kind sent with every registration.
pub const DEFAULT_KIND: &str = "02";

/// Production progress derived from `process_cd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    InProgress,
    Done,
    /// A code this console has no label for; shown verbatim.
    Other(String),
    Unset,
}

impl ProcessStatus {
    #[must_use]
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            None | Some("") => Self::Unset,
            Some(IN_PROGRESS_CODE) => Self::InProgress,
            Some(DONE_CODE) => Self::Done,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    /// Operator-facing label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::InProgress => "in progress",
            Self::Done => "done",
            Self::Other(code) => code,
            Self::Unset => "",
        }
    }
}

/// An order as the backend returns it. Date fields keep their wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub code: OrderCode,
    /// `YYYYMMDD`, or whatever the backend sent.
    pub ordered_on: Option<String>,
    /// `YYYYMMDD`; absent while the due date is undecided.
    pub due_on: Option<String>,
    pub product_code: String,
    pub product_name: String,
    pub vendor_code: String,
    pub vendor_name: String,
    pub quantity: i64,
    pub note: String,
    pub status: ProcessStatus,
}

/// Fields of the order registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub ordered_on: Option<NaiveDate>,
    pub due_on: Option<NaiveDate>,
    pub product_code: String,
    pub vendor_code: String,
    pub quantity: i64,
    pub note: Option<String>,
    pub sequence: String,
    pub kind: String,
}

impl OrderDraft {
    /// A draft with the form's initial values: quantity 1 and default sequence/kind.
    pub fn new(product_code: impl Into<String>, vendor_code: impl Into<String>) -> Self {
        Self {
            ordered_on: None,
            due_on: None,
            product_code: product_code.into(),
            vendor_code: vendor_code.into(),
            quantity: 1,
            note: None,
            sequence: DEFAULT_SEQUENCE.to_string(),
            kind: DEFAULT_KIND.to_string(),
        }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_dates(mut self, ordered_on: Option<NaiveDate>, due_on: Option<NaiveDate>) -> Self {
        self.ordered_on = ordered_on;
        self.due_on = due_on;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// Required-field checks: product, vendor, and a positive quantity.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.product_code.trim().is_empty() {
            return Err(DomainError::MissingField { field: "product" });
        }
        if self.vendor_code.trim().is_empty() {
            return Err(DomainError::MissingField { field: "vendor" });
        }
        if self.quantity < 1 {
            return Err(DomainError::NonPositiveQuantity {
                field: "quantity",
                value: self.quantity,
            });
        }
        Ok(())
    }
}

/// The edit form pre-filled from a stored order.
impl From<&Order> for OrderDraft {
    fn from(order: &Order) -> Self {
        Self::new(order.product_code.clone(), order.vendor_code.clone())
            .with_quantity(order.quantity)
            .with_dates(
                order.ordered_on.as_deref().and_then(parse_date),
                order.due_on.as_deref().and_then(parse_date),
            )
            .with_note((!order.note.is_empty()).then(|| order.note.clone()))
    }
}
