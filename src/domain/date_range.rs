//! Date-range query normalization.
//!
//! A [`DateRange`] holds two optional naive calendar dates. Edits go through
//! [`DateRange::set_from`] and [`DateRange::set_to`], which repair an ordering
//! violation by collapsing the range onto the edited bound instead of
//! rejecting the edit. The range never fails: missing bounds serialize to the
//! open-bound sentinels and malformed wire strings pass through unchanged.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use opsdesk::domain::date_range::{normalize_for_display, DateRange, YearWidth};
//!
//! let mut range = DateRange::unbounded();
//! range.set_to(NaiveDate::from_ymd_opt(2025, 3, 10));
//! range.set_from(NaiveDate::from_ymd_opt(2025, 3, 14));
//!
//! let params = range.to_query_params();
//! assert_eq!(params.from_dt, "20250314");
//! assert_eq!(params.to_dt, "20250314");
//!
//! assert_eq!(normalize_for_display("20250314", YearWidth::Short), "25-03-14");
//! ```

use std::borrow::Cow;
use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// Wire value sent for an absent lower bound.
pub const OPEN_FROM_SENTINEL: &str = "19990101";

/// Wire value sent for an absent upper bound.
pub const OPEN_TO_SENTINEL: &str = "20991231";

const WIRE_FORMAT: &str = "%Y%m%d";
const PAYLOAD_FORMAT: &str = "%Y-%m-%d";
const WIRE_LEN: usize = 8;

/// An inclusive `[from, to]` range of naive dates, either bound optional.
///
/// Invariant: `from <= to` whenever both bounds are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateRange {
    /// A range with both bounds open.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// A range covering exactly one day.
    #[must_use]
    pub const fn single_day(day: NaiveDate) -> Self {
        Self {
            from: Some(day),
            to: Some(day),
        }
    }

    /// Build a range by applying `from` then `to` as edits.
    ///
    /// When `from > to` the later edit wins and the range collapses onto `to`.
    #[must_use]
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        let mut range = Self::unbounded();
        range.set_from(from);
        range.set_to(to);
        range
    }

    /// Lower bound, if any.
    #[must_use]
    pub const fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    /// Upper bound, if any.
    #[must_use]
    pub const fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    /// Replace the lower bound.
    ///
    /// If the new lower bound lies after the current upper bound, the upper
    /// bound is moved onto it and the range becomes a single day.
    pub fn set_from(&mut self, new_from: Option<NaiveDate>) {
        self.from = new_from;
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                self.to = Some(from);
            }
        }
    }

    /// Replace the upper bound.
    ///
    /// If the new upper bound precedes the current lower bound, the lower
    /// bound is pulled forward onto it.
    pub fn set_to(&mut self, new_to: Option<NaiveDate>) {
        self.to = new_to;
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if to < from {
                self.from = Some(to);
            }
        }
    }

    /// Serialize both bounds as `YYYYMMDD`, substituting sentinels for open bounds.
    #[must_use]
    pub fn to_query_params(&self) -> QueryParams {
        QueryParams {
            from_dt: self
                .from
                .map_or_else(|| OPEN_FROM_SENTINEL.to_string(), wire_date),
            to_dt: self
                .to
                .map_or_else(|| OPEN_TO_SENTINEL.to_string(), wire_date),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |d: Option<NaiveDate>| d.map_or_else(|| "*".to_string(), payload_date);
        write!(f, "{} ~ {}", bound(self.from), bound(self.to))
    }
}

/// The `from_dt` / `to_dt` query pair sent to range endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    pub from_dt: String,
    pub to_dt: String,
}

/// Default range a page starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePolicy {
    /// One month before today up to today.
    MonthAgo,
    /// First day of the current month up to today.
    StartOfMonth,
    /// Today only.
    Today,
    /// Both bounds open.
    Unbounded,
}

impl RangePolicy {
    /// Materialize the policy relative to `today`.
    #[must_use]
    pub fn range_at(self, today: NaiveDate) -> DateRange {
        match self {
            Self::MonthAgo => {
                let from = today.checked_sub_months(Months::new(1)).unwrap_or(today);
                DateRange::new(Some(from), Some(today))
            }
            Self::StartOfMonth => {
                let from = today.with_day(1).unwrap_or(today);
                DateRange::new(Some(from), Some(today))
            }
            Self::Today => DateRange::single_day(today),
            Self::Unbounded => DateRange::unbounded(),
        }
    }
}

/// Year rendering for display dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearWidth {
    /// `YYYY-MM-DD`
    Full,
    /// `YY-MM-DD`
    Short,
}

/// Reformat an 8-digit `YYYYMMDD` wire string for display.
///
/// Slicing is positional and performs no calendar validation, so
/// `"20251399"` becomes `"2025-13-99"`. Anything that is not exactly eight
/// ASCII digits (including the empty string) is returned unchanged.
#[must_use]
pub fn normalize_for_display(wire: &str, width: YearWidth) -> Cow<'_, str> {
    if wire.len() != WIRE_LEN || !wire.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(wire);
    }

    let year = match width {
        YearWidth::Full => &wire[0..4],
        YearWidth::Short => &wire[2..4],
    };
    Cow::Owned(format!("{year}-{}-{}", &wire[4..6], &wire[6..8]))
}

/// [`normalize_for_display`] for fields the backend may omit.
#[must_use]
pub fn normalize_optional(wire: Option<&str>, width: YearWidth) -> Option<Cow<'_, str>> {
    wire.map(|w| normalize_for_display(w, width))
}

/// Format a date as a `YYYYMMDD` wire string.
#[must_use]
pub fn wire_date(date: NaiveDate) -> String {
    date.format(WIRE_FORMAT).to_string()
}

/// Format a date as `YYYY-MM-DD`, the form mutation payloads carry.
#[must_use]
pub fn payload_date(date: NaiveDate) -> String {
    date.format(PAYLOAD_FORMAT).to_string()
}

/// Parse an operator-entered date in `YYYY-MM-DD` or `YYYYMMDD` form.
#[must_use]
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, PAYLOAD_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(input, WIRE_FORMAT))
        .ok()
}
