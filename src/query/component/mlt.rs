use crate::param::Params;
use crate::query::component::Component;

/// What to return for the interesting terms of a more-like-this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestingTerms {
    None,
    List,
    Details,
}

impl InterestingTerms {
    fn as_str(self) -> &'static str {
        match self {
            InterestingTerms::None => "none",
            InterestingTerms::List => "list",
            InterestingTerms::Details => "details",
        }
    }
}

/// The more-like-this component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoreLikeThis {
    fields: Vec<String>,
    count: Option<u64>,
    min_term_freq: Option<u64>,
    min_doc_freq: Option<u64>,
    min_word_length: Option<u64>,
    max_word_length: Option<u64>,
    max_query_terms: Option<u64>,
    max_num_tokens: Option<u64>,
    boost: Option<bool>,
    query_fields: Option<String>,
    interesting_terms: Option<InterestingTerms>,
}

impl MoreLikeThis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field to derive similarity terms from; repeatable.
    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Similar documents returned per matched document.
    pub fn count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn min_term_freq(mut self, freq: u64) -> Self {
        self.min_term_freq = Some(freq);
        self
    }

    pub fn min_doc_freq(mut self, freq: u64) -> Self {
        self.min_doc_freq = Some(freq);
        self
    }

    pub fn min_word_length(mut self, length: u64) -> Self {
        self.min_word_length = Some(length);
        self
    }

    pub fn max_word_length(mut self, length: u64) -> Self {
        self.max_word_length = Some(length);
        self
    }

    pub fn max_query_terms(mut self, terms: u64) -> Self {
        self.max_query_terms = Some(terms);
        self
    }

    pub fn max_num_tokens(mut self, tokens: u64) -> Self {
        self.max_num_tokens = Some(tokens);
        self
    }

    /// Boost query terms by their interestingness.
    pub fn boost(mut self, boost: bool) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Query fields with optional boosts, e.g. `"title^2 body"`.
    pub fn query_fields<S: Into<String>>(mut self, fields: S) -> Self {
        self.query_fields = Some(fields.into());
        self
    }

    pub fn interesting_terms(mut self, terms: InterestingTerms) -> Self {
        self.interesting_terms = Some(terms);
        self
    }
}

impl Component for MoreLikeThis {
    fn append_params(&self, params: &mut Params) {
        params.add("mlt", "true");
        if !self.fields.is_empty() {
            params.add("mlt.fl", self.fields.join(","));
        }
        if let Some(count) = self.count {
            params.add("mlt.count", count.to_string());
        }
        if let Some(freq) = self.min_term_freq {
            params.add("mlt.mintf", freq.to_string());
        }
        if let Some(freq) = self.min_doc_freq {
            params.add("mlt.mindf", freq.to_string());
        }
        if let Some(length) = self.min_word_length {
            params.add("mlt.minwl", length.to_string());
        }
        if let Some(length) = self.max_word_length {
            params.add("mlt.maxwl", length.to_string());
        }
        if let Some(terms) = self.max_query_terms {
            params.add("mlt.maxqt", terms.to_string());
        }
        if let Some(tokens) = self.max_num_tokens {
            params.add("mlt.maxntp", tokens.to_string());
        }
        if let Some(boost) = self.boost {
            params.add("mlt.boost", boost.to_string());
        }
        if let Some(fields) = &self.query_fields {
            params.add("mlt.qf", fields.clone());
        }
        if let Some(terms) = self.interesting_terms {
            params.add("mlt.interestingTerms", terms.as_str());
        }
    }

    fn needs_flat_named_list(&self) -> bool {
        // interestingTerms=details is a NamedList of term => boost.
        matches!(self.interesting_terms, Some(InterestingTerms::Details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_flag_always_emitted() {
        let mut params = Params::new();
        MoreLikeThis::new().append_params(&mut params);
        assert_eq!(params.get("mlt"), Some("true"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_fields_joined() {
        let mut params = Params::new();
        MoreLikeThis::new()
            .field("title")
            .field("body")
            .min_term_freq(2)
            .min_doc_freq(5)
            .max_query_terms(20)
            .boost(true)
            .append_params(&mut params);
        assert_eq!(params.get("mlt.fl"), Some("title,body"));
        assert_eq!(params.get("mlt.mintf"), Some("2"));
        assert_eq!(params.get("mlt.mindf"), Some("5"));
        assert_eq!(params.get("mlt.maxqt"), Some("20"));
        assert_eq!(params.get("mlt.boost"), Some("true"));
    }

    #[test]
    fn test_interesting_terms_details_needs_flat() {
        let mlt = MoreLikeThis::new().interesting_terms(InterestingTerms::Details);
        assert!(mlt.needs_flat_named_list());
        assert!(!MoreLikeThis::new().needs_flat_named_list());
        let mut params = Params::new();
        mlt.append_params(&mut params);
        assert_eq!(params.get("mlt.interestingTerms"), Some("details"));
    }
}
