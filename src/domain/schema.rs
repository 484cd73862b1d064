//! Backend data partition selector (`v_db`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Identifies which backend data partition every request targets.
///
/// Injected into each page service at construction; nothing reads it from
/// global state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Schema(String);

impl Schema {
    /// Create a schema selector, rejecting blank input.
    pub fn try_new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptySchema);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Schema {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for Schema {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Schema> for String {
    fn from(schema: Schema) -> Self {
        schema.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_keeps_name() {
        let schema = Schema::try_new("  25_DO ").unwrap();
        assert_eq!(schema.as_str(), "25_DO");
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(Schema::try_new("   "), Err(DomainError::EmptySchema));
        assert!("".parse::<Schema>().is_err());
    }
}
