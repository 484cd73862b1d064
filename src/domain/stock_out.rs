//! Shipment (stock-out) results.

use chrono::NaiveDate;
use serde::Serialize;

use super::date_range::parse_date;
use super::error::DomainError;
use super::id::StockOutNo;

/// A registered stock-out as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockOut {
    pub no: StockOutNo,
    /// `YYYYMMDD`, or whatever the backend sent.
    pub shipped_on: Option<String>,
    pub product_code: String,
    pub product_name: String,
    pub vendor_code: Option<String>,
    pub vendor_name: Option<String>,
    pub quantity: i64,
    pub note: String,
}

/// Fields of the stock-out registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockOutDraft {
    pub shipped_on: Option<NaiveDate>,
    pub product_code: String,
    pub vendor_code: Option<String>,
    pub quantity: i64,
    pub note: Option<String>,
}

impl StockOutDraft {
    /// A draft with the form's initial quantity of 1.
    pub fn new(shipped_on: Option<NaiveDate>, product_code: impl Into<String>) -> Self {
        Self {
            shipped_on,
            product_code: product_code.into(),
            vendor_code: None,
            quantity: 1,
            note: None,
        }
    }

    #[must_use]
    pub fn with_vendor(mut self, vendor_code: Option<String>) -> Self {
        self.vendor_code = vendor_code.filter(|v| !v.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// Required-field checks: ship date, product, and a positive quantity.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.shipped_on.is_none() {
            return Err(DomainError::MissingField { field: "date" });
        }
        if self.product_code.trim().is_empty() {
            return Err(DomainError::MissingField { field: "product" });
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

/// The edit form pre-filled from a stored stock-out.
impl From<&StockOut> for StockOutDraft {
    fn from(out: &StockOut) -> Self {
        Self::new(
            out.shipped_on.as_deref().and_then(parse_date),
            out.product_code.clone(),
        )
        .with_vendor(out.vendor_code.clone())
        .with_quantity(out.quantity)
        .with_note((!out.note.is_empty()).then(|| out.note.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 3, 14)
    }

    #[test]
    fn date_is_required() {
        assert_eq!(
            StockOutDraft::new(None, "P100").validate(),
            Err(DomainError::MissingField { field: "date" })
        );
    }

    #[test]
    fn vendor_is_optional_and_blank_means_none() {
        let draft = StockOutDraft::new(day(), "P100").with_vendor(Some("  ".into()));
        assert_eq!(draft.vendor_code, None);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn quantity_must_be_positive() {
        let draft = StockOutDraft::new(day(), "P100").with_quantity(-2);
        assert!(matches!(
            draft.validate(),
            Err(DomainError::NonPositiveQuantity { value: -2, .. })
        ));
    }

    #[test]
    fn edit_draft_keeps_stored_fields() {
        let out = StockOut {
            no: StockOutNo::new("7"),
            shipped_on: Some("20250302".into()),
            product_code: "P100".into(),
            product_name: "Bracket".into(),
            vendor_code: Some("V001".into()),
            vendor_name: Some("Acme".into()),
            quantity: 3,
            note: String::new(),
        };

        let draft = StockOutDraft::from(&out);

        assert_eq!(draft.shipped_on, NaiveDate::from_ymd_opt(2025, 3, 2));
        assert_eq!(draft.vendor_code.as_deref(), Some("V001"));
        assert_eq!(draft.quantity, 3);
        assert_eq!(draft.note, None);
    }
}
