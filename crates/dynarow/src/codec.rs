//! Record ⇄ wire-item codec.
//!
//! Thin wrappers over `serde_dynamo`. The conversion is lossless for every
//! schema-representable value; failures exist only at the type level and
//! propagate rather than panic.

use serde_json::Value;

use dynarow_core::error::AccessError;
use dynarow_core::schema::Record;

use crate::store::WireItem;

/// Encodes a record into the store's attribute-map representation.
pub fn encode_record(record: &Record) -> Result<WireItem, AccessError> {
    serde_dynamo::to_item(record).map_err(codec_error)
}

/// Decodes a wire item back into a record.
pub fn decode_item(item: WireItem) -> Result<Record, AccessError> {
    serde_dynamo::from_item(item).map_err(codec_error)
}

/// Encodes a single-attribute lookup key.
pub fn encode_key(attribute: &str, value: &Value) -> Result<WireItem, AccessError> {
    let mut key = Record::new();
    key.insert(attribute.to_string(), value.clone());
    encode_record(&key)
}

fn codec_error(err: serde_dynamo::Error) -> AccessError {
    AccessError::Codec(Box::new(err))
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::AttributeValue;
    use serde_json::json;

    use super::*;

    fn sample_record() -> Record {
        json!({
            "userId": "u-1",
            "name": "John Doe",
            "age": 34,
            "active": true,
            "address": { "city": "Montevideo" },
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_record_round_trip() {
        let record = sample_record();
        let item = encode_record(&record).unwrap();
        let decoded = decode_item(item).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_encode_record_types() {
        let item = encode_record(&sample_record()).unwrap();
        assert_eq!(item.get("userId"), Some(&AttributeValue::S("u-1".to_string())));
        assert_eq!(item.get("age"), Some(&AttributeValue::N("34".to_string())));
        assert_eq!(item.get("active"), Some(&AttributeValue::Bool(true)));
        assert!(matches!(item.get("address"), Some(AttributeValue::M(_))));
    }

    #[test]
    fn test_encode_key_is_single_attribute() {
        let key = encode_key("userId", &json!("u-1")).unwrap();
        assert_eq!(key.len(), 1);
        assert_eq!(key.get("userId"), Some(&AttributeValue::S("u-1".to_string())));
    }
}
