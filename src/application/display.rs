//! Small formatting helpers shared by the page view rows.

use crate::domain::date_range::normalize_optional;
use crate::domain::YearWidth;

/// Display form of an optional wire date, empty when the backend sent none.
pub(crate) fn date_cell(wire: Option<&str>, width: YearWidth) -> String {
    normalize_optional(wire, width)
        .map(|d| d.into_owned())
        .unwrap_or_default()
}

/// `name (code)`, or just the code when the name is blank.
pub(crate) fn named(code: &str, name: &str) -> String {
    if name.trim().is_empty() {
        code.to_string()
    } else {
        format!("{name} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_cell_formats_and_defaults() {
        assert_eq!(date_cell(Some("20250314"), YearWidth::Full), "2025-03-14");
        assert_eq!(date_cell(Some("2025031"), YearWidth::Short), "2025031");
        assert_eq!(date_cell(None, YearWidth::Short), "");
    }

    #[test]
    fn named_falls_back_to_code() {
        assert_eq!(named("V001", "Acme"), "Acme (V001)");
        assert_eq!(named("V001", " "), "V001");
    }
}
