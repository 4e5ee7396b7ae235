use crate::param::Params;

/// Builder for the terms request handler: raw indexed term/frequency lists.
#[derive(Debug, Clone, PartialEq)]
pub struct TermsQuery {
    fields: Vec<String>,
    lower: Option<String>,
    lower_include: Option<bool>,
    upper: Option<String>,
    upper_include: Option<bool>,
    prefix: Option<String>,
    regex: Option<String>,
    min_count: Option<u64>,
    max_count: Option<i64>,
    limit: Option<u64>,
    sort: Option<String>,
    raw: Option<bool>,
    handler: String,
}

impl Default for TermsQuery {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            lower: None,
            lower_include: None,
            upper: None,
            upper_include: None,
            prefix: None,
            regex: None,
            min_count: None,
            max_count: None,
            limit: None,
            sort: None,
            raw: None,
            handler: "terms".to_string(),
        }
    }
}

impl TermsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field to enumerate terms from; repeatable.
    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Lower bound term to start at.
    pub fn lower<S: Into<String>>(mut self, lower: S) -> Self {
        self.lower = Some(lower.into());
        self
    }

    pub fn lower_include(mut self, include: bool) -> Self {
        self.lower_include = Some(include);
        self
    }

    /// Upper bound term to stop at.
    pub fn upper<S: Into<String>>(mut self, upper: S) -> Self {
        self.upper = Some(upper.into());
        self
    }

    pub fn upper_include(mut self, include: bool) -> Self {
        self.upper_include = Some(include);
        self
    }

    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn regex<S: Into<String>>(mut self, regex: S) -> Self {
        self.regex = Some(regex.into());
        self
    }

    pub fn min_count(mut self, min_count: u64) -> Self {
        self.min_count = Some(min_count);
        self
    }

    /// Maximum document frequency; -1 disables the cap.
    pub fn max_count(mut self, max_count: i64) -> Self {
        self.max_count = Some(max_count);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// `count` or `index`.
    pub fn sort<S: Into<String>>(mut self, sort: S) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Return raw (unreadable) index form of the terms.
    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = Some(raw);
        self
    }

    pub fn handler<S: Into<String>>(mut self, handler: S) -> Self {
        self.handler = handler.into();
        self
    }

    pub fn handler_path(&self) -> &str {
        &self.handler
    }

    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.add("terms", "true");
        for field in &self.fields {
            params.add("terms.fl", field.clone());
        }
        if let Some(lower) = &self.lower {
            params.add("terms.lower", lower.clone());
        }
        if let Some(include) = self.lower_include {
            params.add("terms.lower.incl", include.to_string());
        }
        if let Some(upper) = &self.upper {
            params.add("terms.upper", upper.clone());
        }
        if let Some(include) = self.upper_include {
            params.add("terms.upper.incl", include.to_string());
        }
        if let Some(prefix) = &self.prefix {
            params.add("terms.prefix", prefix.clone());
        }
        if let Some(regex) = &self.regex {
            params.add("terms.regex", regex.clone());
        }
        if let Some(min_count) = self.min_count {
            params.add("terms.mincount", min_count.to_string());
        }
        if let Some(max_count) = self.max_count {
            params.add("terms.maxcount", max_count.to_string());
        }
        if let Some(limit) = self.limit {
            params.add("terms.limit", limit.to_string());
        }
        if let Some(sort) = &self.sort {
            params.add("terms.sort", sort.clone());
        }
        if let Some(raw) = self.raw {
            params.add("terms.raw", raw.to_string());
        }
        params.set("wt", "json");
        // Term lists rely on response ordering.
        params.set("json.nl", "flat");
        params
    }
}
