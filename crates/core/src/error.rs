use serde_json::Value;
use thiserror::Error;

use crate::schema::Violation;
use crate::table::InvalidKey;

/// Opaque transport failure from the store client.
///
/// The underlying error is preserved verbatim as the source; this layer
/// does not inspect or translate it.
#[derive(Debug, Error)]
#[error("store request failed: {0}")]
pub struct StoreError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

impl StoreError {
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }
}

/// Errors surfaced by table operations.
///
/// Every variant carries structured context so callers can branch on kind
/// without matching message strings.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The query's shape does not match the table's declared key. Raised
    /// before any network call.
    #[error("invalid key in query: {0}")]
    InvalidKey(#[from] InvalidKey),

    /// A lookup matched no item. Carries the exact attempted key.
    #[error("no item in `{table}` for key {key}")]
    NotFound { table: String, key: Value },

    /// A record or patch failed schema validation.
    #[error("schema validation failed with {} violation(s)", .0.len())]
    SchemaViolation(Vec<Violation>),

    /// The store accepted an update but returned no updated item.
    #[error("update on `{table}` returned no item for key {key}")]
    UpdateFailed { table: String, key: Value },

    /// The store client failed at the transport level.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Attribute encoding or decoding failed.
    #[error("attribute codec failed: {0}")]
    Codec(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, AccessError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found_display() {
        let error = AccessError::NotFound {
            table: "users".to_string(),
            key: json!({ "userId": "u-1" }),
        };
        assert_eq!(
            error.to_string(),
            "no item in `users` for key {\"userId\":\"u-1\"}"
        );
    }

    #[test]
    fn test_update_failed_display() {
        let error = AccessError::UpdateFailed {
            table: "users".to_string(),
            key: json!({ "userId": "u-1" }),
        };
        assert_eq!(
            error.to_string(),
            "update on `users` returned no item for key {\"userId\":\"u-1\"}"
        );
    }

    #[test]
    fn test_invalid_key_converts() {
        let error: AccessError = InvalidKey::EmptyQuery.into();
        assert!(matches!(error, AccessError::InvalidKey(InvalidKey::EmptyQuery)));
    }

    #[test]
    fn test_store_error_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::TimedOut, "connection timed out");
        let error = StoreError::new(source);
        assert_eq!(error.to_string(), "store request failed: connection timed out");
        assert!(std::error::Error::source(&error).is_some());
    }
}
