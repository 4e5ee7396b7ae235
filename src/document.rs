use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Solr document: a free-form map of field name to field value.
///
/// Solr schemas are loose from the client's point of view, so fields are kept
/// as raw JSON values with typed getters for the common scalar shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolrDocument {
    fields: Map<String, Value>,
}

impl SolrDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any existing value.
    pub fn field<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.fields.get(key).and_then(Value::as_i64)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.fields.get(key).and_then(Value::as_bool)
    }

    /// Multivalued string field. A single string value is returned as a
    /// one-element vector, matching how Solr collapses single-valued arrays.
    pub fn get_strs(&self, key: &str) -> Vec<&str> {
        match self.fields.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(s)) => vec![s.as_str()],
            _ => Vec::new(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for SolrDocument {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_and_getters() {
        let doc = SolrDocument::new()
            .field("id", "doc-1")
            .field("popularity", 42)
            .field("price", 9.99)
            .field("in_stock", true);
        assert_eq!(doc.get_str("id"), Some("doc-1"));
        assert_eq!(doc.get_i64("popularity"), Some(42));
        assert_eq!(doc.get_f64("price"), Some(9.99));
        assert_eq!(doc.get_bool("in_stock"), Some(true));
        assert_eq!(doc.get_str("missing"), None);
    }

    #[test]
    fn test_multivalued_field() {
        let doc = SolrDocument::new().field("cat", json!(["books", "tech"]));
        assert_eq!(doc.get_strs("cat"), vec!["books", "tech"]);
    }

    #[test]
    fn test_single_value_as_multivalued() {
        let doc = SolrDocument::new().field("cat", "books");
        assert_eq!(doc.get_strs("cat"), vec!["books"]);
        assert_eq!(doc.get_strs("missing"), Vec::<&str>::new());
    }

    #[test]
    fn test_serde_round_trip() {
        let doc = SolrDocument::new().field("id", "1").field("title", "Solr");
        let encoded = serde_json::to_string(&doc).unwrap();
        let decoded: SolrDocument = serde_json::from_str(&encoded).unwrap();
        assert_eq!(doc, decoded);
    }
}
