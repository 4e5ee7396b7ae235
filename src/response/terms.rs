use serde_json::Value;

use crate::response::namedlist::{lenient_u64, named_list_pairs};
use crate::response::ResponseHeader;

/// Result of the terms request handler: per-field term/frequency lists.
///
/// Term lists are NamedLists of term => document frequency; with
/// `json.nl=flat` (which the terms query sets) the alternating array form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermsResult {
    pub header: ResponseHeader,
    pub fields: Vec<(String, Vec<(String, u64)>)>,
}

impl TermsResult {
    pub fn from_body(body: &Value) -> Self {
        let fields = named_list_pairs(&body["terms"])
            .into_iter()
            .map(|(field, terms)| {
                let terms = named_list_pairs(&terms)
                    .into_iter()
                    .filter_map(|(term, freq)| Some((term, lenient_u64(&freq)?)))
                    .collect();
                (field, terms)
            })
            .collect();
        Self {
            header: ResponseHeader::from_body(body),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&[(String, u64)]> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, terms)| terms.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
