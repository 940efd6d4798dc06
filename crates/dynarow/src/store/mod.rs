//! Store client seam and backends.

mod dynamodb;
mod memory;

pub use dynamodb::DynamoStore;
pub use memory::MemoryStore;

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use dynarow_core::error::StoreError;

/// The store's native attribute-map representation of a record.
pub type WireItem = HashMap<String, AttributeValue>;

/// A generated update request: the expression plus its placeholder maps.
///
/// The three parts are internally consistent with each other; iteration
/// order of the source patch decides clause order and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: WireItem,
}

/// Store operations the accessor depends on.
///
/// Each method issues one call against the store. Cancellation, timeouts
/// and retries are the implementation's concern; failures surface as
/// [`StoreError`] with the underlying cause untouched.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Point lookup. Returns the matching item, narrowed by the projection
    /// expression when one is supplied.
    async fn get_item(
        &self,
        table: &str,
        key: WireItem,
        projection: Option<String>,
    ) -> Result<Option<WireItem>, StoreError>;

    /// Full-item write, replacing any existing item under the same key.
    async fn put_item(&self, table: &str, item: WireItem) -> Result<(), StoreError>;

    /// Applies a generated update expression and returns the post-update
    /// item when the store provides one.
    async fn update_item(
        &self,
        table: &str,
        key: WireItem,
        update: UpdateExpression,
    ) -> Result<Option<WireItem>, StoreError>;

    /// Point delete. Succeeds whether or not the item existed.
    async fn delete_item(&self, table: &str, key: WireItem) -> Result<(), StoreError>;
}
