//! Typed result objects parsed out of Solr's JSON response bodies.
//!
//! Every parser here follows the same contract: it takes the decoded
//! `serde_json::Value` fragment for its component, tolerates a missing or
//! empty fragment by returning an empty-but-valid result, and never performs
//! I/O.

pub use crate::response::facet::{
    FacetField, FacetPivot, FacetRange, FacetSetResult, FacetValue,
};
pub use crate::response::group::{FieldGroup, Group, GroupedResult, QueryGroup};
pub use crate::response::highlight::HighlightingResult;
pub use crate::response::mlt::MoreLikeThisResult;
pub use crate::response::select::{DocList, SelectResult};
pub use crate::response::spellcheck::{
    Collation, SpellcheckResult, SuggestedWord, Suggestion,
};
pub use crate::response::stats::{StatsField, StatsResult};
pub use crate::response::terms::TermsResult;
pub use crate::response::termvector::{TermInfo, TermVectorDocument, TermVectorResult};

pub mod facet;
pub mod group;
pub mod highlight;
pub mod mlt;
pub mod namedlist;
pub mod select;
pub mod spellcheck;
pub mod stats;
pub mod terms;
pub mod termvector;

use serde_json::{Map, Value};

/// The `responseHeader` section common to every Solr response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseHeader {
    pub status: i64,
    pub qtime: i64,
    /// Request parameters echoed back when `echoParams` is enabled.
    pub params: Map<String, Value>,
}

impl ResponseHeader {
    /// Parse from the full response body.
    pub fn from_body(body: &Value) -> Self {
        let header = &body["responseHeader"];
        Self {
            status: header["status"].as_i64().unwrap_or(0),
            qtime: header["QTime"].as_i64().unwrap_or(0),
            params: header["params"].as_object().cloned().unwrap_or_default(),
        }
    }
}

/// Result of an update request; Solr only returns the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateResult {
    pub header: ResponseHeader,
}

impl UpdateResult {
    pub fn from_body(body: &Value) -> Self {
        Self {
            header: ResponseHeader::from_body(body),
        }
    }
}

/// Result of a ping request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PingResult {
    pub header: ResponseHeader,
    /// `"OK"` when the core is healthy.
    pub status: String,
}

impl PingResult {
    pub fn from_body(body: &Value) -> Self {
        Self {
            header: ResponseHeader::from_body(body),
            status: body["status"].as_str().unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_parsed() {
        let body = json!({
            "responseHeader": {"status": 0, "QTime": 13, "params": {"q": "*:*"}}
        });
        let header = ResponseHeader::from_body(&body);
        assert_eq!(header.status, 0);
        assert_eq!(header.qtime, 13);
        assert_eq!(header.params["q"], json!("*:*"));
    }

    #[test]
    fn test_header_defaults_when_absent() {
        let header = ResponseHeader::from_body(&json!({}));
        assert_eq!(header.status, 0);
        assert_eq!(header.qtime, 0);
        assert!(header.params.is_empty());
    }
}
