//! Schema-checked table operations.
//!
//! [`TableAccessor`] composes the key validator, the schema, the codec and
//! the expression builder into four operations. All validation happens
//! before any network activity, and each operation issues exactly one store
//! call.

use serde_json::Value;

use dynarow_core::error::{AccessError, Result};
use dynarow_core::schema::{Record, Schema, Violation};
use dynarow_core::table::{validate_key, Query, TableConfig};

use crate::codec::{decode_item, encode_key, encode_record};
use crate::expression::build_update_expression;
use crate::store::StoreClient;

/// Schema-checked operations over one table.
///
/// The table identity, key shape and record schema are bound at
/// construction and shared by every call. Operations hold no other state,
/// so one accessor can serve concurrent callers without coordination.
pub struct TableAccessor<C, S> {
    client: C,
    schema: S,
    config: TableConfig,
}

impl<C: StoreClient, S: Schema> TableAccessor<C, S> {
    /// Binds a store client, a schema and a table config together.
    pub fn new(client: C, schema: S, config: TableConfig) -> Self {
        Self {
            client,
            schema,
            config,
        }
    }

    /// The declared table config.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Looks a record up by key.
    ///
    /// A non-empty projection narrows the read to the named attributes, in
    /// the given order. Full reads are validated against the schema;
    /// projected reads are returned as decoded, since a projected item
    /// cannot satisfy the full schema.
    ///
    /// The lookup key is built from the hash attribute alone. A declared
    /// range attribute is checked for presence during validation but does
    /// not constrain the lookup.
    pub async fn find(&self, query: &Query, projection: Option<&[&str]>) -> Result<Record> {
        let key = validate_key(query, &self.config)?;

        let projection_expression = projection
            .filter(|attributes| !attributes.is_empty())
            .map(|attributes| attributes.join(", "));

        let wire_key = encode_key(key.hash_attribute, key.hash_value)?;
        tracing::debug!(table = %self.config.table_name(), "Getting item");

        let item = self
            .client
            .get_item(
                self.config.table_name(),
                wire_key,
                projection_expression.clone(),
            )
            .await?
            .ok_or_else(|| AccessError::NotFound {
                table: self.config.table_name().to_string(),
                key: key_json(key.hash_attribute, key.hash_value),
            })?;

        let record = decode_item(item)?;
        if projection_expression.is_some() {
            return Ok(record);
        }
        self.schema
            .validate(&Value::Object(record))
            .map_err(AccessError::SchemaViolation)
    }

    /// Validates a record and writes it as a full item, replacing any
    /// existing item under the same key. Returns the validated record
    /// without re-reading the store.
    pub async fn save(&self, record: Value) -> Result<Record> {
        let validated = self
            .schema
            .validate(&record)
            .map_err(AccessError::SchemaViolation)?;

        let item = encode_record(&validated)?;
        tracing::debug!(table = %self.config.table_name(), "Putting item");
        self.client.put_item(self.config.table_name(), item).await?;

        Ok(validated)
    }

    /// Applies a partial update and returns the post-update record.
    ///
    /// The patch is validated against the schema restricted to the
    /// attributes it carries; key attributes cannot be patched. The item
    /// the store returns is decoded and validated against the full schema.
    pub async fn update(&self, query: &Query, patch: Value) -> Result<Record> {
        let key = validate_key(query, &self.config)?;

        let patch = self
            .schema
            .validate_partial(&patch)
            .map_err(AccessError::SchemaViolation)?;
        let violations = self.key_attribute_violations(&patch);
        if !violations.is_empty() {
            return Err(AccessError::SchemaViolation(violations));
        }

        let update = build_update_expression(&encode_record(&patch)?);
        let wire_key = encode_key(key.hash_attribute, key.hash_value)?;
        tracing::debug!(
            table = %self.config.table_name(),
            expression = %update.expression,
            "Updating item"
        );

        let updated = self
            .client
            .update_item(self.config.table_name(), wire_key, update)
            .await?
            .ok_or_else(|| AccessError::UpdateFailed {
                table: self.config.table_name().to_string(),
                key: key_json(key.hash_attribute, key.hash_value),
            })?;

        let record = decode_item(updated)?;
        self.schema
            .validate(&Value::Object(record))
            .map_err(AccessError::SchemaViolation)
    }

    /// Deletes the item under the query's key.
    ///
    /// Deleting an item that does not exist is not an error.
    pub async fn remove(&self, query: &Query) -> Result<()> {
        let key = validate_key(query, &self.config)?;

        let wire_key = encode_key(key.hash_attribute, key.hash_value)?;
        tracing::debug!(table = %self.config.table_name(), "Deleting item");
        self.client
            .delete_item(self.config.table_name(), wire_key)
            .await?;

        Ok(())
    }

    fn key_attribute_violations(&self, patch: &Record) -> Vec<Violation> {
        let mut violations = Vec::new();
        if patch.contains_key(self.config.hash_attribute()) {
            violations.push(Violation::new(
                self.config.hash_attribute(),
                "key attribute cannot be patched",
            ));
        }
        if let Some(range) = self.config.range_attribute() {
            if patch.contains_key(range) {
                violations.push(Violation::new(range, "key attribute cannot be patched"));
            }
        }
        violations
    }
}

fn key_json(attribute: &str, value: &Value) -> Value {
    let mut key = Record::new();
    key.insert(attribute.to_string(), value.clone());
    Value::Object(key)
}
