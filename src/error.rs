use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Backend call failures that are not transport errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered a mutation with an `error` field.
    #[error("{operation} rejected: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },

    /// The backend answered with a non-success status code.
    #[error("{operation} failed with HTTP {status}")]
    Status { operation: &'static str, status: u16 },

    /// A lookup by identifier found nothing.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_mutation_message_names_operation() {
        let err: Error = ApiError::Rejected {
            operation: "order registration",
            message: "duplicate order".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "order registration rejected: duplicate order"
        );
    }

    #[test]
    fn domain_errors_pass_through() {
        let err: Error = DomainError::MissingField { field: "product" }.into();
        assert_eq!(err.to_string(), "product is required");
    }
}
