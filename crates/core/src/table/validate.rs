use serde_json::Value;

use super::{InvalidKey, Query, TableConfig};

/// A query that passed validation against a table's declared key shape.
///
/// Borrows the hash and range values from the query it was validated
/// against; nothing is copied until a lookup key is actually built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedKey<'a> {
    pub hash_attribute: &'a str,
    pub hash_value: &'a Value,
    pub range_value: Option<&'a Value>,
}

/// Checks a query against the declared key shape of a table.
///
/// The primary attribute is the query's first pair; later pairs are ignored
/// beyond locating the range value, so callers may carry unrelated extras.
/// When a range attribute is declared, its value is checked for presence
/// only; lookup keys are built from the hash attribute alone.
pub fn validate_key<'a>(
    query: &'a Query,
    config: &TableConfig,
) -> Result<ValidatedKey<'a>, InvalidKey> {
    let (attribute, hash_value) = query.primary().ok_or(InvalidKey::EmptyQuery)?;

    if attribute != config.hash_attribute() {
        return Err(InvalidKey::HashMismatch {
            expected: config.hash_attribute().to_string(),
            found: attribute.to_string(),
        });
    }

    let range_value = match config.range_attribute() {
        Some(range) => {
            let value = query.get(range).filter(|value| is_truthy(value));
            if value.is_none() {
                return Err(InvalidKey::MissingRange {
                    range: range.to_string(),
                });
            }
            value
        }
        None => None,
    };

    Ok(ValidatedKey {
        hash_attribute: attribute,
        hash_value,
        range_value,
    })
}

// Presence check for range values: null, false, zero and the empty string
// all count as missing.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
