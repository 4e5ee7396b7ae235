use serde_json::Value;

use crate::response::namedlist::named_list_pairs;

/// The `highlighting` section: per-document, per-field snippet lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightingResult {
    pub documents: Vec<(String, Vec<(String, Vec<String>)>)>,
}

impl HighlightingResult {
    pub fn parse(value: &Value) -> Self {
        let documents = named_list_pairs(value)
            .into_iter()
            .map(|(key, fields)| (key, parse_fields(&fields)))
            .collect();
        Self { documents }
    }

    /// Snippets for one document, keyed by field.
    pub fn document(&self, unique_key: &str) -> Option<&[(String, Vec<String>)]> {
        self.documents
            .iter()
            .find(|(key, _)| key == unique_key)
            .map(|(_, fields)| fields.as_slice())
    }

    pub fn snippets(&self, unique_key: &str, field: &str) -> &[String] {
        self.document(unique_key)
            .and_then(|fields| {
                fields
                    .iter()
                    .find(|(name, _)| name == field)
                    .map(|(_, snippets)| snippets.as_slice())
            })
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn parse_fields(fields: &Value) -> Vec<(String, Vec<String>)> {
    named_list_pairs(fields)
        .into_iter()
        .map(|(field, snippets)| {
            let snippets = snippets
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            (field, snippets)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snippets_by_doc_and_field() {
        let value = json!({
            "doc-1": {"title": ["<em>Solr</em> in action"], "body": []},
            "doc-2": {}
        });
        let result = HighlightingResult::parse(&value);
        assert_eq!(
            result.snippets("doc-1", "title"),
            ["<em>Solr</em> in action"]
        );
        assert!(result.snippets("doc-1", "body").is_empty());
        assert!(result.document("doc-2").unwrap().is_empty());
        assert!(result.snippets("missing", "title").is_empty());
    }

    #[test]
    fn test_absent_section_is_empty() {
        assert!(HighlightingResult::parse(&json!(null)).is_empty());
    }
}
