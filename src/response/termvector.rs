use serde_json::Value;

use crate::response::namedlist::{lenient_f64, lenient_u64, named_list_pairs};

/// Term-level information within one field of one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermInfo {
    pub term: String,
    pub tf: Option<u64>,
    pub df: Option<u64>,
    pub tf_idf: Option<f64>,
    pub positions: Vec<u64>,
    /// (start, end) character offsets.
    pub offsets: Vec<(u64, u64)>,
}

/// Term vectors for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVectorDocument {
    /// Value of the unique key field for this document.
    pub unique_key: String,
    /// Per-field term lists, keyed by field name.
    pub fields: Vec<(String, Vec<TermInfo>)>,
}

impl TermVectorDocument {
    pub fn field(&self, name: &str) -> Option<&[TermInfo]> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, terms)| terms.as_slice())
    }
}

/// The `termVectors` section: a triply nested NamedList of
/// document => field => term => info.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVectorResult {
    pub documents: Vec<TermVectorDocument>,
}

impl TermVectorResult {
    pub fn parse(value: &Value) -> Self {
        let mut documents = Vec::new();
        for (key, entry) in named_list_pairs(value) {
            // The list interleaves bookkeeping entries with per-document
            // entries keyed "doc-<n>".
            if key == "uniqueKeyFieldName" || key == "warnings" {
                continue;
            }
            documents.push(parse_document(&entry));
        }
        Self { documents }
    }

    pub fn document(&self, unique_key: &str) -> Option<&TermVectorDocument> {
        self.documents.iter().find(|d| d.unique_key == unique_key)
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn parse_document(entry: &Value) -> TermVectorDocument {
    let mut doc = TermVectorDocument::default();
    for (key, field_entry) in named_list_pairs(entry) {
        if key == "uniqueKey" {
            doc.unique_key = field_entry.as_str().unwrap_or_default().to_string();
        } else {
            let terms = named_list_pairs(&field_entry)
                .into_iter()
                .map(|(term, info)| parse_term(term, &info))
                .collect();
            doc.fields.push((key, terms));
        }
    }
    doc
}

fn parse_term(term: String, info: &Value) -> TermInfo {
    let mut result = TermInfo {
        term,
        ..Default::default()
    };
    for (key, value) in named_list_pairs(info) {
        match key.as_str() {
            "tf" => result.tf = lenient_u64(&value),
            "df" => result.df = lenient_u64(&value),
            "tf-idf" => result.tf_idf = lenient_f64(&value),
            "positions" => {
                // NamedList of "position" => n entries.
                result.positions = named_list_pairs(&value)
                    .into_iter()
                    .filter_map(|(_, pos)| lenient_u64(&pos))
                    .collect();
            }
            "offsets" => result.offsets = parse_offsets(&value),
            _ => {}
        }
    }
    result
}

/// Offsets arrive as an alternating start/end NamedList, one pair per
/// occurrence.
fn parse_offsets(value: &Value) -> Vec<(u64, u64)> {
    let mut offsets = Vec::new();
    let mut start = None;
    for (key, entry) in named_list_pairs(value) {
        match key.as_str() {
            "start" => start = lenient_u64(&entry),
            "end" => {
                if let (Some(s), Some(e)) = (start.take(), lenient_u64(&entry)) {
                    offsets.push((s, e));
                }
            }
            _ => {}
        }
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_term_vectors() {
        let value = json!([
            "uniqueKeyFieldName", "id",
            "doc-1", [
                "uniqueKey", "EN7800GTX",
                "includes", [
                    "cable", ["tf", 2, "df", 4, "tf-idf", 0.5],
                    "usb", [
                        "tf", 1,
                        "positions", ["position", 3],
                        "offsets", ["start", 10, "end", 13],
                        "df", 2,
                        "tf-idf", 0.5
                    ]
                ]
            ]
        ]);
        let result = TermVectorResult::parse(&value);
        let doc = result.document("EN7800GTX").unwrap();
        let includes = doc.field("includes").unwrap();
        assert_eq!(includes.len(), 2);
        assert_eq!(includes[0].term, "cable");
        assert_eq!(includes[0].tf, Some(2));
        assert_eq!(includes[0].df, Some(4));
        assert_eq!(includes[1].positions, vec![3]);
        assert_eq!(includes[1].offsets, vec![(10, 13)]);
        assert_eq!(includes[1].tf_idf, Some(0.5));
    }

    #[test]
    fn test_multiple_offset_pairs() {
        let offsets = parse_offsets(&json!(["start", 1, "end", 4, "start", 9, "end", 12]));
        assert_eq!(offsets, vec![(1, 4), (9, 12)]);
    }

    #[test]
    fn test_warnings_entry_skipped() {
        let value = json!([
            "warnings", ["noOffsets", ["includes"]],
            "doc-1", ["uniqueKey", "x", "includes", []]
        ]);
        let result = TermVectorResult::parse(&value);
        assert_eq!(result.documents.len(), 1);
        assert_eq!(result.documents[0].unique_key, "x");
    }

    #[test]
    fn test_absent_section_is_empty() {
        assert!(TermVectorResult::parse(&json!(null)).is_empty());
    }
}
