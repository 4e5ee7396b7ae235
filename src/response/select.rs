use serde_json::Value;

use crate::document::SolrDocument;
use crate::response::{
    facet::FacetSetResult, group::GroupedResult, highlight::HighlightingResult,
    mlt::MoreLikeThisResult, spellcheck::SpellcheckResult, stats::StatsResult,
    termvector::TermVectorResult, ResponseHeader,
};

/// A Solr document list: the `{"numFound": ..., "start": ..., "docs": [...]}`
/// shape used by the main response, grouped doclists, and more-like-this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocList {
    pub num_found: u64,
    pub start: u64,
    pub max_score: Option<f64>,
    pub docs: Vec<SolrDocument>,
}

impl DocList {
    pub fn parse(value: &Value) -> Self {
        let docs = value["docs"]
            .as_array()
            .map(|docs| {
                docs.iter()
                    .filter_map(Value::as_object)
                    .map(|fields| SolrDocument::from(fields.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            num_found: value["numFound"].as_u64().unwrap_or(0),
            start: value["start"].as_u64().unwrap_or(0),
            max_score: value["maxScore"].as_f64(),
            docs,
        }
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// The full result of a select query, with one typed section per component.
///
/// Component sections for components that were not part of the request parse
/// to their empty defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectResult {
    pub header: ResponseHeader,
    pub response: DocList,
    pub facets: FacetSetResult,
    pub grouped: GroupedResult,
    pub spellcheck: SpellcheckResult,
    pub stats: StatsResult,
    pub term_vectors: TermVectorResult,
    pub more_like_this: MoreLikeThisResult,
    pub highlighting: HighlightingResult,
    pub debug: Option<Value>,
}

impl SelectResult {
    pub fn from_body(body: &Value) -> Self {
        Self {
            header: ResponseHeader::from_body(body),
            response: DocList::parse(&body["response"]),
            facets: FacetSetResult::parse(&body["facet_counts"]),
            grouped: GroupedResult::parse(&body["grouped"]),
            spellcheck: SpellcheckResult::parse(&body["spellcheck"]),
            stats: StatsResult::parse(&body["stats"]),
            term_vectors: TermVectorResult::parse(&body["termVectors"]),
            more_like_this: MoreLikeThisResult::parse(&body["moreLikeThis"])
                .with_interesting_terms(&body["interestingTerms"]),
            highlighting: HighlightingResult::parse(&body["highlighting"]),
            debug: body.get("debug").filter(|v| !v.is_null()).cloned(),
        }
    }

    /// Total hits for the main query.
    pub fn num_found(&self) -> u64 {
        self.response.num_found
    }

    pub fn documents(&self) -> &[SolrDocument] {
        &self.response.docs
    }
}
