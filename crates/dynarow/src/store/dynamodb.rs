//! DynamoDB store backend.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;
use dynarow_core::error::StoreError;

use super::{StoreClient, UpdateExpression, WireItem};

/// [`StoreClient`] backed by `aws-sdk-dynamodb`.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
}

impl DynamoStore {
    /// Creates a store client from an existing SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a store client from environment configuration, using the
    /// AWS SDK default credential chain.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl StoreClient for DynamoStore {
    async fn get_item(
        &self,
        table: &str,
        key: WireItem,
        projection: Option<String>,
    ) -> Result<Option<WireItem>, StoreError> {
        let result = self
            .client
            .get_item()
            .table_name(table)
            .set_key(Some(key))
            .set_projection_expression(projection)
            .send()
            .await
            .map_err(StoreError::new)?;

        Ok(result.item)
    }

    async fn put_item(&self, table: &str, item: WireItem) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(StoreError::new)?;

        Ok(())
    }

    async fn update_item(
        &self,
        table: &str,
        key: WireItem,
        update: UpdateExpression,
    ) -> Result<Option<WireItem>, StoreError> {
        let result = self
            .client
            .update_item()
            .table_name(table)
            .set_key(Some(key))
            .update_expression(update.expression)
            .set_expression_attribute_names(Some(update.names))
            .set_expression_attribute_values(Some(update.values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(StoreError::new)?;

        Ok(result.attributes)
    }

    async fn delete_item(&self, table: &str, key: WireItem) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(table)
            .set_key(Some(key))
            .send()
            .await
            .map_err(StoreError::new)?;

        Ok(())
    }
}
