use thiserror::Error;

/// Errors that can occur when declaring a table's key shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Table name cannot be empty")]
    EmptyTableName,
    #[error("Hash attribute name cannot be empty")]
    EmptyHashAttribute,
    #[error("Range attribute name cannot be empty")]
    EmptyRangeAttribute,
    #[error("Range attribute must differ from hash attribute: {0}")]
    RangeMatchesHash(String),
}

/// Declared identity and key shape of a table.
///
/// Bound once at accessor construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    table_name: String,
    hash_attribute: String,
    range_attribute: Option<String>,
}

impl TableConfig {
    /// Declares a hash-only table.
    pub fn new(
        table_name: impl Into<String>,
        hash_attribute: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let table_name = table_name.into();
        let hash_attribute = hash_attribute.into();

        if table_name.is_empty() {
            return Err(ConfigError::EmptyTableName);
        }
        if hash_attribute.is_empty() {
            return Err(ConfigError::EmptyHashAttribute);
        }

        Ok(Self {
            table_name,
            hash_attribute,
            range_attribute: None,
        })
    }

    /// Adds a range attribute to the declared key.
    pub fn with_range(mut self, range_attribute: impl Into<String>) -> Result<Self, ConfigError> {
        let range_attribute = range_attribute.into();

        if range_attribute.is_empty() {
            return Err(ConfigError::EmptyRangeAttribute);
        }
        if range_attribute == self.hash_attribute {
            return Err(ConfigError::RangeMatchesHash(range_attribute));
        }

        self.range_attribute = Some(range_attribute);
        Ok(self)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get the hash attribute name.
    pub fn hash_attribute(&self) -> &str {
        &self.hash_attribute
    }

    /// Get the range attribute name, if one is declared.
    pub fn range_attribute(&self) -> Option<&str> {
        self.range_attribute.as_deref()
    }
}
