mod config;
mod error;
mod query;
mod validate;

pub use config::{ConfigError, TableConfig};
pub use error::InvalidKey;
pub use query::Query;
pub use validate::{validate_key, ValidatedKey};
