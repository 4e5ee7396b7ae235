use crate::param::Params;
use crate::query::component::Component;

/// The DisMax query parser component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisMax {
    query_alternative: Option<String>,
    query_fields: Option<String>,
    minimum_match: Option<String>,
    phrase_fields: Option<String>,
    phrase_slop: Option<u64>,
    query_phrase_slop: Option<u64>,
    tie: Option<f64>,
    boost_queries: Vec<String>,
    boost_functions: Vec<String>,
}

impl DisMax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query to run when the main query string is empty (`q.alt`).
    pub fn query_alternative<S: Into<String>>(mut self, query: S) -> Self {
        self.query_alternative = Some(query.into());
        self
    }

    /// Fields with optional boosts, e.g. `"title^2 body"` (`qf`).
    pub fn query_fields<S: Into<String>>(mut self, fields: S) -> Self {
        self.query_fields = Some(fields.into());
        self
    }

    /// Minimum-should-match expression (`mm`).
    pub fn minimum_match<S: Into<String>>(mut self, mm: S) -> Self {
        self.minimum_match = Some(mm.into());
        self
    }

    /// Fields boosted on phrase proximity (`pf`).
    pub fn phrase_fields<S: Into<String>>(mut self, fields: S) -> Self {
        self.phrase_fields = Some(fields.into());
        self
    }

    pub fn phrase_slop(mut self, slop: u64) -> Self {
        self.phrase_slop = Some(slop);
        self
    }

    pub fn query_phrase_slop(mut self, slop: u64) -> Self {
        self.query_phrase_slop = Some(slop);
        self
    }

    /// Tie breaker between 0.0 (pure disjunction max) and 1.0 (sum).
    pub fn tie(mut self, tie: f64) -> Self {
        self.tie = Some(tie);
        self
    }

    /// Additive boost query (`bq`); repeatable.
    pub fn boost_query<S: Into<String>>(mut self, query: S) -> Self {
        self.boost_queries.push(query.into());
        self
    }

    /// Boost function (`bf`); repeatable.
    pub fn boost_function<S: Into<String>>(mut self, function: S) -> Self {
        self.boost_functions.push(function.into());
        self
    }

    fn append_options(&self, params: &mut Params) {
        if let Some(query) = &self.query_alternative {
            params.add("q.alt", query.clone());
        }
        if let Some(fields) = &self.query_fields {
            params.add("qf", fields.clone());
        }
        if let Some(mm) = &self.minimum_match {
            params.add("mm", mm.clone());
        }
        if let Some(fields) = &self.phrase_fields {
            params.add("pf", fields.clone());
        }
        if let Some(slop) = self.phrase_slop {
            params.add("ps", slop.to_string());
        }
        if let Some(slop) = self.query_phrase_slop {
            params.add("qs", slop.to_string());
        }
        if let Some(tie) = self.tie {
            params.add("tie", tie.to_string());
        }
        for query in &self.boost_queries {
            params.add("bq", query.clone());
        }
        for function in &self.boost_functions {
            params.add("bf", function.clone());
        }
    }
}

impl Component for DisMax {
    fn append_params(&self, params: &mut Params) {
        params.set("defType", "dismax");
        self.append_options(params);
    }
}

/// The extended DisMax query parser component: everything DisMax supports
/// plus bigram/trigram phrase boosting, user fields, and a multiplicative
/// boost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EDisMax {
    dismax: DisMax,
    phrase_bigram_fields: Option<String>,
    phrase_bigram_slop: Option<u64>,
    phrase_trigram_fields: Option<String>,
    phrase_trigram_slop: Option<u64>,
    user_fields: Option<String>,
    boost: Option<String>,
}

impl EDisMax {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query_alternative<S: Into<String>>(mut self, query: S) -> Self {
        self.dismax = self.dismax.query_alternative(query);
        self
    }

    pub fn query_fields<S: Into<String>>(mut self, fields: S) -> Self {
        self.dismax = self.dismax.query_fields(fields);
        self
    }

    pub fn minimum_match<S: Into<String>>(mut self, mm: S) -> Self {
        self.dismax = self.dismax.minimum_match(mm);
        self
    }

    pub fn phrase_fields<S: Into<String>>(mut self, fields: S) -> Self {
        self.dismax = self.dismax.phrase_fields(fields);
        self
    }

    pub fn phrase_slop(mut self, slop: u64) -> Self {
        self.dismax = self.dismax.phrase_slop(slop);
        self
    }

    pub fn query_phrase_slop(mut self, slop: u64) -> Self {
        self.dismax = self.dismax.query_phrase_slop(slop);
        self
    }

    pub fn tie(mut self, tie: f64) -> Self {
        self.dismax = self.dismax.tie(tie);
        self
    }

    pub fn boost_query<S: Into<String>>(mut self, query: S) -> Self {
        self.dismax = self.dismax.boost_query(query);
        self
    }

    pub fn boost_function<S: Into<String>>(mut self, function: S) -> Self {
        self.dismax = self.dismax.boost_function(function);
        self
    }

    /// Bigram phrase fields (`pf2`).
    pub fn phrase_bigram_fields<S: Into<String>>(mut self, fields: S) -> Self {
        self.phrase_bigram_fields = Some(fields.into());
        self
    }

    pub fn phrase_bigram_slop(mut self, slop: u64) -> Self {
        self.phrase_bigram_slop = Some(slop);
        self
    }

    /// Trigram phrase fields (`pf3`).
    pub fn phrase_trigram_fields<S: Into<String>>(mut self, fields: S) -> Self {
        self.phrase_trigram_fields = Some(fields.into());
        self
    }

    pub fn phrase_trigram_slop(mut self, slop: u64) -> Self {
        self.phrase_trigram_slop = Some(slop);
        self
    }

    /// Fields end users may query directly (`uf`).
    pub fn user_fields<S: Into<String>>(mut self, fields: S) -> Self {
        self.user_fields = Some(fields.into());
        self
    }

    /// Multiplicative boost function (`boost`).
    pub fn boost<S: Into<String>>(mut self, boost: S) -> Self {
        self.boost = Some(boost.into());
        self
    }
}

impl Component for EDisMax {
    fn append_params(&self, params: &mut Params) {
        params.set("defType", "edismax");
        self.dismax.append_options(params);
        if let Some(fields) = &self.phrase_bigram_fields {
            params.add("pf2", fields.clone());
        }
        if let Some(slop) = self.phrase_bigram_slop {
            params.add("ps2", slop.to_string());
        }
        if let Some(fields) = &self.phrase_trigram_fields {
            params.add("pf3", fields.clone());
        }
        if let Some(slop) = self.phrase_trigram_slop {
            params.add("ps3", slop.to_string());
        }
        if let Some(fields) = &self.user_fields {
            params.add("uf", fields.clone());
        }
        if let Some(boost) = &self.boost {
            params.add("boost", boost.clone());
        }
    }
}
