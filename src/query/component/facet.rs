use crate::param::Params;
use crate::query::component::Component;

/// Sort order for facet value lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetSort {
    /// Highest counts first.
    Count,
    /// Index (lexicographic) order.
    Index,
}

impl FacetSort {
    fn as_str(self) -> &'static str {
        match self {
            FacetSort::Count => "count",
            FacetSort::Index => "index",
        }
    }
}

/// A `facet.field` with optional per-field overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldFacet {
    field: String,
    limit: Option<i64>,
    min_count: Option<u64>,
    sort: Option<FacetSort>,
    prefix: Option<String>,
    missing: Option<bool>,
}

impl FieldFacet {
    pub fn new<S: Into<String>>(field: S) -> Self {
        Self {
            field: field.into(),
            ..Default::default()
        }
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn min_count(mut self, min_count: u64) -> Self {
        self.min_count = Some(min_count);
        self
    }

    pub fn sort(mut self, sort: FacetSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn missing(mut self, missing: bool) -> Self {
        self.missing = Some(missing);
        self
    }

    fn append_params(&self, params: &mut Params) {
        params.add("facet.field", self.field.clone());
        let per_field = |option: &str| format!("f.{}.facet.{}", self.field, option);
        if let Some(limit) = self.limit {
            params.add(per_field("limit"), limit.to_string());
        }
        if let Some(min_count) = self.min_count {
            params.add(per_field("mincount"), min_count.to_string());
        }
        if let Some(sort) = self.sort {
            params.add(per_field("sort"), sort.as_str());
        }
        if let Some(prefix) = &self.prefix {
            params.add(per_field("prefix"), prefix.clone());
        }
        if let Some(missing) = self.missing {
            params.add(per_field("missing"), missing.to_string());
        }
    }
}

/// A `facet.range` over a numeric or date field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeFacet {
    field: String,
    start: String,
    end: String,
    gap: String,
    hardend: Option<bool>,
    other: Vec<String>,
    include: Vec<String>,
}

impl RangeFacet {
    pub fn new<S, B>(field: S, start: B, end: B, gap: B) -> Self
    where
        S: Into<String>,
        B: Into<String>,
    {
        Self {
            field: field.into(),
            start: start.into(),
            end: end.into(),
            gap: gap.into(),
            ..Default::default()
        }
    }

    pub fn hardend(mut self, hardend: bool) -> Self {
        self.hardend = Some(hardend);
        self
    }

    /// Add a `facet.range.other` bucket (`before`, `after`, `between`, `all`,
    /// `none`).
    pub fn other<S: Into<String>>(mut self, other: S) -> Self {
        self.other.push(other.into());
        self
    }

    /// Add a `facet.range.include` flag (`lower`, `upper`, `edge`, `outer`,
    /// `all`).
    pub fn include<S: Into<String>>(mut self, include: S) -> Self {
        self.include.push(include.into());
        self
    }

    fn append_params(&self, params: &mut Params) {
        params.add("facet.range", self.field.clone());
        let per_field = |option: &str| format!("f.{}.facet.range.{}", self.field, option);
        params.add(per_field("start"), self.start.clone());
        params.add(per_field("end"), self.end.clone());
        params.add(per_field("gap"), self.gap.clone());
        if let Some(hardend) = self.hardend {
            params.add(per_field("hardend"), hardend.to_string());
        }
        for other in &self.other {
            params.add(per_field("other"), other.clone());
        }
        for include in &self.include {
            params.add(per_field("include"), include.clone());
        }
    }
}

/// A `facet.pivot` over a chain of fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotFacet {
    fields: Vec<String>,
    min_count: Option<u64>,
}

impl PivotFacet {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            min_count: None,
        }
    }

    pub fn min_count(mut self, min_count: u64) -> Self {
        self.min_count = Some(min_count);
        self
    }

    /// The comma-joined field chain, which is also the key of this pivot in
    /// the response.
    pub fn key(&self) -> String {
        self.fields.join(",")
    }
}

/// The faceting component: field, query, range, and pivot facets plus global
/// facet options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetSet {
    fields: Vec<FieldFacet>,
    queries: Vec<String>,
    ranges: Vec<RangeFacet>,
    pivots: Vec<PivotFacet>,
    limit: Option<i64>,
    min_count: Option<u64>,
    sort: Option<FacetSort>,
    prefix: Option<String>,
    missing: Option<bool>,
}

impl FacetSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field<S: Into<String>>(self, field: S) -> Self {
        self.field_facet(FieldFacet::new(field))
    }

    pub fn field_facet(mut self, facet: FieldFacet) -> Self {
        self.fields.push(facet);
        self
    }

    pub fn query<S: Into<String>>(mut self, query: S) -> Self {
        self.queries.push(query.into());
        self
    }

    pub fn range(mut self, range: RangeFacet) -> Self {
        self.ranges.push(range);
        self
    }

    pub fn pivot(mut self, pivot: PivotFacet) -> Self {
        self.pivots.push(pivot);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn min_count(mut self, min_count: u64) -> Self {
        self.min_count = Some(min_count);
        self
    }

    pub fn sort(mut self, sort: FacetSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn missing(mut self, missing: bool) -> Self {
        self.missing = Some(missing);
        self
    }
}

impl Component for FacetSet {
    fn append_params(&self, params: &mut Params) {
        params.add("facet", "true");
        if let Some(limit) = self.limit {
            params.add("facet.limit", limit.to_string());
        }
        if let Some(min_count) = self.min_count {
            params.add("facet.mincount", min_count.to_string());
        }
        if let Some(sort) = self.sort {
            params.add("facet.sort", sort.as_str());
        }
        if let Some(prefix) = &self.prefix {
            params.add("facet.prefix", prefix.clone());
        }
        if let Some(missing) = self.missing {
            params.add("facet.missing", missing.to_string());
        }
        for field in &self.fields {
            field.append_params(params);
        }
        for query in &self.queries {
            params.add("facet.query", query.clone());
        }
        for range in &self.ranges {
            range.append_params(params);
        }
        for pivot in &self.pivots {
            params.add("facet.pivot", pivot.key());
            if let Some(min_count) = pivot.min_count {
                params.add("facet.pivot.mincount", min_count.to_string());
            }
        }
    }
}
