//! In-memory store backend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use dynarow_core::error::StoreError;
use tokio::sync::RwLock;

use super::{StoreClient, UpdateExpression, WireItem};

/// In-memory store backend for tests and local development.
///
/// Items live in a `HashMap` behind `Arc<RwLock<_>>`; nothing is persisted
/// and data is lost when the store is dropped. The store is told the
/// table's key attributes up front, the way a real table declares its key
/// schema, and uses them to slot items.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    hash_attribute: String,
    range_attribute: Option<String>,
    items: Arc<RwLock<HashMap<String, WireItem>>>,
}

impl MemoryStore {
    /// Creates an empty store for a hash-only table.
    pub fn new(hash_attribute: impl Into<String>) -> Self {
        Self {
            hash_attribute: hash_attribute.into(),
            range_attribute: None,
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Declares a range attribute as part of the key.
    pub fn with_range(mut self, range_attribute: impl Into<String>) -> Self {
        self.range_attribute = Some(range_attribute.into());
        self
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    // Slot derived from whichever declared key attributes the map carries.
    fn slot(&self, item: &WireItem) -> String {
        let hash = item
            .get(&self.hash_attribute)
            .map(scalar_repr)
            .unwrap_or_default();

        match self
            .range_attribute
            .as_deref()
            .and_then(|range| item.get(range))
        {
            Some(range) => format!("{hash}\u{1f}{}", scalar_repr(range)),
            None => hash,
        }
    }
}

fn scalar_repr(value: &AttributeValue) -> String {
    match value {
        AttributeValue::S(s) => s.clone(),
        AttributeValue::N(n) => n.clone(),
        AttributeValue::Bool(b) => b.to_string(),
        other => format!("{other:?}"),
    }
}

fn apply_projection(item: WireItem, projection: &str) -> WireItem {
    let wanted: Vec<&str> = projection.split(',').map(str::trim).collect();
    item.into_iter()
        .filter(|(name, _)| wanted.contains(&name.as_str()))
        .collect()
}

#[async_trait]
impl StoreClient for MemoryStore {
    async fn get_item(
        &self,
        _table: &str,
        key: WireItem,
        projection: Option<String>,
    ) -> Result<Option<WireItem>, StoreError> {
        let items = self.items.read().await;
        let found = items.get(&self.slot(&key)).cloned();

        Ok(match (found, projection) {
            (Some(item), Some(projection)) => Some(apply_projection(item, &projection)),
            (found, _) => found,
        })
    }

    async fn put_item(&self, _table: &str, item: WireItem) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        items.insert(self.slot(&item), item);
        Ok(())
    }

    async fn update_item(
        &self,
        _table: &str,
        key: WireItem,
        update: UpdateExpression,
    ) -> Result<Option<WireItem>, StoreError> {
        let mut items = self.items.write().await;
        let slot = self.slot(&key);

        // DynamoDB upserts on update: start from the stored item, or from
        // the bare key when nothing is stored yet.
        let mut item = items.get(&slot).cloned().unwrap_or(key);
        for (name_token, attribute) in &update.names {
            let value_token = format!(":{}", name_token.trim_start_matches('#'));
            if let Some(value) = update.values.get(&value_token) {
                item.insert(attribute.clone(), value.clone());
            }
        }

        items.insert(slot, item.clone());
        Ok(Some(item))
    }

    async fn delete_item(&self, _table: &str, key: WireItem) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        items.remove(&self.slot(&key));
        Ok(())
    }
}
