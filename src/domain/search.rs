//! Case-insensitive text search shared by the lookup pages.

/// True when `query` is empty or appears, ignoring case, in any present field.
#[must_use]
pub fn matches_any(fields: &[Option<&str>], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}
