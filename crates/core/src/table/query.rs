use serde_json::Value;

/// An ordered key query.
///
/// The first pair names the attribute the caller intends to look up by; any
/// further pairs may carry the range attribute or unrelated extras. Order is
/// preserved exactly as built, which is what gives the first pair its
/// primary-key meaning during validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pairs: Vec<(String, Value)>,
}

impl Query {
    /// Starts a query with its primary attribute.
    pub fn new(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            pairs: vec![(attribute.into(), value.into())],
        }
    }

    /// Builds a query from pre-assembled pairs, preserving their order.
    pub fn from_pairs(pairs: Vec<(String, Value)>) -> Self {
        Self { pairs }
    }

    /// Appends another attribute to the query.
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        self.pairs.push((attribute.into(), value.into()));
        self
    }

    /// The first (primary) pair, if any.
    pub fn primary(&self) -> Option<(&str, &Value)> {
        self.pairs.first().map(|(name, value)| (name.as_str(), value))
    }

    /// Looks an attribute up by name, scanning in insertion order.
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.pairs
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, value)| value)
    }

    /// All pairs in insertion order.
    pub fn pairs(&self) -> &[(String, Value)] {
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primary_is_first_pair() {
        let query = Query::new("userId", "u-1").with("extra", 42);
        let (name, value) = query.primary().unwrap();
        assert_eq!(name, "userId");
        assert_eq!(value, &json!("u-1"));
    }

    #[test]
    fn test_get_by_name() {
        let query = Query::new("userId", "u-1").with("startedAt", 1700000000);
        assert_eq!(query.get("startedAt"), Some(&json!(1700000000)));
        assert_eq!(query.get("missing"), None);
    }

    #[test]
    fn test_from_pairs_keeps_order() {
        let query = Query::from_pairs(vec![
            ("b".to_string(), json!(2)),
            ("a".to_string(), json!(1)),
        ]);
        assert_eq!(query.primary().unwrap().0, "b");
    }

    #[test]
    fn test_empty_pairs_have_no_primary() {
        let query = Query::from_pairs(Vec::new());
        assert_eq!(query.primary(), None);
    }
}
