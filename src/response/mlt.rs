use serde_json::Value;

use crate::response::namedlist::{lenient_f64, named_list_pairs};
use crate::response::select::DocList;

/// The `moreLikeThis` section: one similar-document list per matched
/// document, keyed by unique key, plus the interesting terms when requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoreLikeThisResult {
    pub documents: Vec<(String, DocList)>,
    /// Term => boost pairs, filled with `mlt.interestingTerms=details`; plain
    /// term lists (`=list`) get a boost of 1.0.
    pub interesting_terms: Vec<(String, f64)>,
}

impl MoreLikeThisResult {
    pub fn parse(value: &Value) -> Self {
        let documents = named_list_pairs(value)
            .into_iter()
            .map(|(key, doclist)| (key, DocList::parse(&doclist)))
            .collect();
        Self {
            documents,
            interesting_terms: Vec::new(),
        }
    }

    /// Parse the top-level `interestingTerms` section into an existing result.
    pub fn with_interesting_terms(mut self, value: &Value) -> Self {
        self.interesting_terms = match value {
            // `details` form: flat NamedList of term => boost.
            Value::Array(items) if items.iter().any(Value::is_number) => {
                named_list_pairs(value)
                    .into_iter()
                    .filter_map(|(term, boost)| Some((term, lenient_f64(&boost)?)))
                    .collect()
            }
            // `list` form: plain array of terms.
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(|term| (term.to_string(), 1.0))
                .collect(),
            _ => Vec::new(),
        };
        self
    }

    pub fn document(&self, unique_key: &str) -> Option<&DocList> {
        self.documents
            .iter()
            .find(|(key, _)| key == unique_key)
            .map(|(_, doclist)| doclist)
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty() && self.interesting_terms.is_empty()
    }
}
