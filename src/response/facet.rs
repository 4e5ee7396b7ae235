use serde_json::Value;

use crate::response::namedlist::{lenient_u64, named_list_pairs};

/// A single facet count: field value and number of matching documents.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetValue {
    pub value: String,
    pub count: u64,
}

/// Counts for one `facet.field`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetField {
    pub field: String,
    pub values: Vec<FacetValue>,
}

/// Counts for one `facet.range`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetRange {
    pub field: String,
    pub counts: Vec<FacetValue>,
    pub gap: Option<Value>,
    pub start: Option<Value>,
    pub end: Option<Value>,
    pub before: Option<u64>,
    pub between: Option<u64>,
    pub after: Option<u64>,
}

/// One node of a facet pivot tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetPivot {
    pub field: String,
    pub value: Value,
    pub count: u64,
    pub pivot: Vec<FacetPivot>,
}

/// The `facet_counts` section of a select response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetSetResult {
    pub fields: Vec<FacetField>,
    /// Query facets, keyed by the facet query string.
    pub queries: Vec<(String, u64)>,
    pub ranges: Vec<FacetRange>,
    /// Pivot trees, keyed by the comma-joined field chain.
    pub pivots: Vec<(String, Vec<FacetPivot>)>,
}

impl FacetSetResult {
    pub fn parse(value: &Value) -> Self {
        let fields = named_list_pairs(&value["facet_fields"])
            .into_iter()
            .map(|(field, counts)| FacetField {
                field,
                values: parse_counts(&counts),
            })
            .collect();
        let queries = named_list_pairs(&value["facet_queries"])
            .into_iter()
            .map(|(query, count)| (query, lenient_u64(&count).unwrap_or(0)))
            .collect();
        let ranges = named_list_pairs(&value["facet_ranges"])
            .into_iter()
            .map(|(field, body)| parse_range(field, &body))
            .collect();
        let pivots = named_list_pairs(&value["facet_pivot"])
            .into_iter()
            .map(|(key, nodes)| (key, parse_pivots(&nodes)))
            .collect();
        Self {
            fields,
            queries,
            ranges,
            pivots,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FacetField> {
        self.fields.iter().find(|f| f.field == name)
    }

    pub fn query(&self, query: &str) -> Option<u64> {
        self.queries
            .iter()
            .find(|(q, _)| q == query)
            .map(|(_, count)| *count)
    }

    pub fn range(&self, name: &str) -> Option<&FacetRange> {
        self.ranges.iter().find(|r| r.field == name)
    }

    pub fn pivot(&self, key: &str) -> Option<&[FacetPivot]> {
        self.pivots
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, nodes)| nodes.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
            && self.queries.is_empty()
            && self.ranges.is_empty()
            && self.pivots.is_empty()
    }
}

/// Facet counts arrive as a NamedList of value => count; with `json.nl=flat`
/// that is the alternating array form.
fn parse_counts(value: &Value) -> Vec<FacetValue> {
    named_list_pairs(value)
        .into_iter()
        .map(|(facet_value, count)| FacetValue {
            value: facet_value,
            count: lenient_u64(&count).unwrap_or(0),
        })
        .collect()
}

fn parse_range(field: String, body: &Value) -> FacetRange {
    FacetRange {
        field,
        counts: parse_counts(&body["counts"]),
        gap: body.get("gap").filter(|v| !v.is_null()).cloned(),
        start: body.get("start").filter(|v| !v.is_null()).cloned(),
        end: body.get("end").filter(|v| !v.is_null()).cloned(),
        before: body.get("before").and_then(lenient_u64),
        between: body.get("between").and_then(lenient_u64),
        after: body.get("after").and_then(lenient_u64),
    }
}

/// Pivot nodes nest recursively under the `pivot` key.
fn parse_pivots(value: &Value) -> Vec<FacetPivot> {
    value
        .as_array()
        .map(|nodes| {
            nodes
                .iter()
                .map(|node| FacetPivot {
                    field: node["field"].as_str().unwrap_or_default().to_string(),
                    value: node.get("value").cloned().unwrap_or(Value::Null),
                    count: lenient_u64(&node["count"]).unwrap_or(0),
                    pivot: parse_pivots(&node["pivot"]),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_facet_fields_flat() {
        let value = json!({
            "facet_fields": {"cat": ["electronics", 14, "books", 9]}
        });
        let facets = FacetSetResult::parse(&value);
        let cat = facets.field("cat").unwrap();
        assert_eq!(cat.values.len(), 2);
        assert_eq!(cat.values[0].value, "electronics");
        assert_eq!(cat.values[0].count, 14);
    }

    #[test]
    fn test_facet_fields_map_form() {
        let value = json!({
            "facet_fields": {"cat": {"electronics": 14, "books": 9}}
        });
        let facets = FacetSetResult::parse(&value);
        assert_eq!(facets.field("cat").unwrap().values[1].count, 9);
    }

    #[test]
    fn test_facet_queries() {
        let value = json!({
            "facet_queries": {"price:[0 TO 100]": 23, "price:[100 TO *]": 5}
        });
        let facets = FacetSetResult::parse(&value);
        assert_eq!(facets.query("price:[0 TO 100]"), Some(23));
        assert_eq!(facets.query("missing"), None);
    }

    #[test]
    fn test_facet_range() {
        let value = json!({
            "facet_ranges": {
                "price": {
                    "counts": ["0.0", 7, "100.0", 2],
                    "gap": 100.0,
                    "start": 0.0,
                    "end": 200.0,
                    "before": 0,
                    "between": 9,
                    "after": 1
                }
            }
        });
        let facets = FacetSetResult::parse(&value);
        let range = facets.range("price").unwrap();
        assert_eq!(range.counts[0].value, "0.0");
        assert_eq!(range.counts[0].count, 7);
        assert_eq!(range.between, Some(9));
        assert_eq!(range.gap, Some(json!(100.0)));
    }

    #[test]
    fn test_facet_pivot_tree() {
        let value = json!({
            "facet_pivot": {
                "cat,inStock": [
                    {
                        "field": "cat",
                        "value": "electronics",
                        "count": 14,
                        "pivot": [
                            {"field": "inStock", "value": true, "count": 10},
                            {"field": "inStock", "value": false, "count": 4}
                        ]
                    }
                ]
            }
        });
        let facets = FacetSetResult::parse(&value);
        let pivot = facets.pivot("cat,inStock").unwrap();
        assert_eq!(pivot[0].field, "cat");
        assert_eq!(pivot[0].count, 14);
        assert_eq!(pivot[0].pivot.len(), 2);
        assert_eq!(pivot[0].pivot[0].value, json!(true));
        assert!(pivot[0].pivot[0].pivot.is_empty());
    }

    #[test]
    fn test_absent_section_is_empty() {
        let facets = FacetSetResult::parse(&json!(null));
        assert!(facets.is_empty());
    }
}
