//! Schema-checked access to single-table DynamoDB records.
//!
//! [`TableAccessor`] binds a table's declared key shape and a record schema
//! to a store client. Its operations ([`TableAccessor::find`],
//! [`TableAccessor::save`], [`TableAccessor::update`] and
//! [`TableAccessor::remove`]) validate the caller's key and payload locally
//! before issuing exactly one store call each.
//!
//! The store side is behind the [`StoreClient`] trait, with two backends:
//! [`DynamoStore`] over `aws-sdk-dynamodb` and [`MemoryStore`] for tests and
//! local development.

mod accessor;
mod codec;
mod expression;
mod store;

pub use accessor::TableAccessor;
pub use codec::{decode_item, encode_key, encode_record};
pub use expression::build_update_expression;
pub use store::{DynamoStore, MemoryStore, StoreClient, UpdateExpression, WireItem};

pub use dynarow_core::error::{AccessError, Result, StoreError};
pub use dynarow_core::schema::{FieldKind, ObjectSchema, Record, Schema, Violation};
pub use dynarow_core::table::{
    validate_key, ConfigError, InvalidKey, Query, TableConfig, ValidatedKey,
};
