use thiserror::Error;

/// Ways a query can fail to match a table's declared key shape.
///
/// Raised before any network activity; the caller fixes the query and
/// retries at its own discretion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidKey {
    #[error("query has no key attribute")]
    EmptyQuery,
    #[error("query key `{found}` does not match hash attribute `{expected}`")]
    HashMismatch { expected: String, found: String },
    #[error("query is missing a value for range attribute `{range}`")]
    MissingRange { range: String },
}
