//! Update-expression generation.

use std::collections::HashMap;

use crate::store::{UpdateExpression, WireItem};

/// Builds a `SET` update expression with placeholder name and value tokens
/// for every attribute in an encoded patch.
///
/// Each attribute `a` becomes the clause `#a = :a`, with `names["#a"] = "a"`
/// and `values[":a"]` holding the encoded value. Clauses are joined with
/// `", "` and follow the patch's iteration order; the three outputs are
/// always consistent with each other.
///
/// # Panics
///
/// Panics if the patch is empty. Callers screen patches before encoding
/// them.
pub fn build_update_expression(patch: &WireItem) -> UpdateExpression {
    assert!(
        !patch.is_empty(),
        "update patch must contain at least one attribute"
    );

    let mut clauses = Vec::with_capacity(patch.len());
    let mut names = HashMap::with_capacity(patch.len());
    let mut values = WireItem::with_capacity(patch.len());

    for (attribute, value) in patch {
        let name_token = format!("#{attribute}");
        let value_token = format!(":{attribute}");
        clauses.push(format!("{name_token} = {value_token}"));
        names.insert(name_token, attribute.clone());
        values.insert(value_token, value.clone());
    }

    UpdateExpression {
        expression: format!("SET {}", clauses.join(", ")),
        names,
        values,
    }
}
