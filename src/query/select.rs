use crate::param::Params;
use crate::query::component::{
    Component, DisMax, Distributed, EDisMax, FacetSet, Grouping, Highlighting, MoreLikeThis,
    Spellcheck, Stats, TermVectors,
};

/// Sort direction for a select query sort clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Builder for a Solr select query.
///
/// Core options cover the standard query parameters; per-feature options live
/// in components attached with the `with_*` methods. `params()` produces the
/// final request parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    query: String,
    filter_queries: Vec<String>,
    fields: Vec<String>,
    sorts: Vec<(String, SortOrder)>,
    start: Option<u64>,
    rows: Option<u64>,
    handler: String,
    def_type: Option<String>,
    debug: bool,
    facets: Option<FacetSet>,
    grouping: Option<Grouping>,
    spellcheck: Option<Spellcheck>,
    more_like_this: Option<MoreLikeThis>,
    dismax: Option<DisMax>,
    edismax: Option<EDisMax>,
    highlighting: Option<Highlighting>,
    stats: Option<Stats>,
    term_vectors: Option<TermVectors>,
    distributed: Option<Distributed>,
}

impl Default for SelectQuery {
    fn default() -> Self {
        Self {
            query: "*:*".to_string(),
            filter_queries: Vec::new(),
            fields: Vec::new(),
            sorts: Vec::new(),
            start: None,
            rows: None,
            handler: "select".to_string(),
            def_type: None,
            debug: false,
            facets: None,
            grouping: None,
            spellcheck: None,
            more_like_this: None,
            dismax: None,
            edismax: None,
            highlighting: None,
            stats: None,
            term_vectors: None,
            distributed: None,
        }
    }
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main query string (`q`). Defaults to `*:*`.
    pub fn query<S: Into<String>>(mut self, query: S) -> Self {
        self.query = query.into();
        self
    }

    /// Add a filter query (`fq`); repeatable.
    pub fn filter_query<S: Into<String>>(mut self, fq: S) -> Self {
        self.filter_queries.push(fq.into());
        self
    }

    /// Add a field to the field list (`fl`); repeatable.
    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Add a sort clause; repeatable, applied in order.
    pub fn sort<S: Into<String>>(mut self, field: S, order: SortOrder) -> Self {
        self.sorts.push((field.into(), order));
        self
    }

    pub fn start(mut self, start: u64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn rows(mut self, rows: u64) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Request handler path, relative to the core. Defaults to `select`.
    pub fn handler<S: Into<String>>(mut self, handler: S) -> Self {
        self.handler = handler.into();
        self
    }

    pub fn handler_path(&self) -> &str {
        &self.handler
    }

    /// Query parser (`defType`), e.g. `lucene`. The dismax/edismax components
    /// override this when attached.
    pub fn def_type<S: Into<String>>(mut self, def_type: S) -> Self {
        self.def_type = Some(def_type.into());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_facets(mut self, facets: FacetSet) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = Some(grouping);
        self
    }

    pub fn with_spellcheck(mut self, spellcheck: Spellcheck) -> Self {
        self.spellcheck = Some(spellcheck);
        self
    }

    pub fn with_more_like_this(mut self, mlt: MoreLikeThis) -> Self {
        self.more_like_this = Some(mlt);
        self
    }

    /// Attach the dismax parser. When `with_edismax` is also used, edismax
    /// wins the `defType`.
    pub fn with_dismax(mut self, dismax: DisMax) -> Self {
        self.dismax = Some(dismax);
        self
    }

    pub fn with_edismax(mut self, edismax: EDisMax) -> Self {
        self.edismax = Some(edismax);
        self
    }

    pub fn with_highlighting(mut self, highlighting: Highlighting) -> Self {
        self.highlighting = Some(highlighting);
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_term_vectors(mut self, term_vectors: TermVectors) -> Self {
        self.term_vectors = Some(term_vectors);
        self
    }

    pub fn with_distributed(mut self, distributed: Distributed) -> Self {
        self.distributed = Some(distributed);
        self
    }

    fn components(&self) -> Vec<&dyn Component> {
        let mut components: Vec<&dyn Component> = Vec::new();
        let optional: [Option<&dyn Component>; 10] = [
            self.dismax.as_ref().map(|c| c as &dyn Component),
            self.edismax.as_ref().map(|c| c as &dyn Component),
            self.facets.as_ref().map(|c| c as &dyn Component),
            self.grouping.as_ref().map(|c| c as &dyn Component),
            self.spellcheck.as_ref().map(|c| c as &dyn Component),
            self.more_like_this.as_ref().map(|c| c as &dyn Component),
            self.highlighting.as_ref().map(|c| c as &dyn Component),
            self.stats.as_ref().map(|c| c as &dyn Component),
            self.term_vectors.as_ref().map(|c| c as &dyn Component),
            self.distributed.as_ref().map(|c| c as &dyn Component),
        ];
        components.extend(optional.into_iter().flatten());
        components
    }

    /// Build the full request parameter list.
    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.add("q", self.query.clone());
        for fq in &self.filter_queries {
            params.add("fq", fq.clone());
        }
        if !self.fields.is_empty() {
            params.add("fl", self.fields.join(","));
        }
        if !self.sorts.is_empty() {
            let sort = self
                .sorts
                .iter()
                .map(|(field, order)| format!("{} {}", field, order.as_str()))
                .collect::<Vec<_>>()
                .join(",");
            params.add("sort", sort);
        }
        if let Some(start) = self.start {
            params.add("start", start.to_string());
        }
        if let Some(rows) = self.rows {
            params.add("rows", rows.to_string());
        }
        if let Some(def_type) = &self.def_type {
            params.add("defType", def_type.clone());
        }
        if self.debug {
            params.add("debugQuery", "true");
        }
        let components = self.components();
        for component in &components {
            component.append_params(&mut params);
        }
        params.set("wt", "json");
        if components.iter().any(|c| c.needs_flat_named_list()) {
            params.set("json.nl", "flat");
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::component::{FacetSort, InterestingTerms};

    #[test]
    fn test_defaults() {
        let params = SelectQuery::new().params();
        assert_eq!(params.get("q"), Some("*:*"));
        assert_eq!(params.get("wt"), Some("json"));
        assert!(!params.contains("json.nl"));
        assert!(!params.contains("fl"));
    }

    #[test]
    fn test_core_options() {
        let params = SelectQuery::new()
            .query("title:solr")
            .filter_query("inStock:true")
            .filter_query("cat:electronics")
            .fields(["id", "title", "score"])
            .sort("price", SortOrder::Asc)
            .sort("score", SortOrder::Desc)
            .start(20)
            .rows(10)
            .params();
        assert_eq!(params.get("q"), Some("title:solr"));
        assert_eq!(
            params.get_all("fq"),
            vec!["inStock:true", "cat:electronics"]
        );
        assert_eq!(params.get("fl"), Some("id,title,score"));
        assert_eq!(params.get("sort"), Some("price asc,score desc"));
        assert_eq!(params.get("start"), Some("20"));
        assert_eq!(params.get("rows"), Some("10"));
    }

    #[test]
    fn test_attached_component_emits_enable_flag() {
        let params = SelectQuery::new()
            .with_facets(crate::query::component::FacetSet::new())
            .params();
        assert_eq!(params.get("facet"), Some("true"));
    }

    #[test]
    fn test_flat_named_list_set_once_for_ordering_components() {
        let params = SelectQuery::new()
            .with_spellcheck(crate::query::component::Spellcheck::new().collate(true))
            .with_term_vectors(crate::query::component::TermVectors::new().field("includes"))
            .params();
        assert_eq!(params.get_all("json.nl"), vec!["flat"]);
    }

    #[test]
    fn test_mlt_details_turns_on_flat() {
        let params = SelectQuery::new()
            .with_more_like_this(
                crate::query::component::MoreLikeThis::new()
                    .field("title")
                    .interesting_terms(InterestingTerms::Details),
            )
            .params();
        assert_eq!(params.get("json.nl"), Some("flat"));
    }

    #[test]
    fn test_faceted_query_end_to_end_params() {
        let params = SelectQuery::new()
            .query("*:*")
            .rows(0)
            .with_facets(
                crate::query::component::FacetSet::new()
                    .field("cat")
                    .sort(FacetSort::Count),
            )
            .params();
        assert_eq!(
            params.to_query_string(),
            "q=%2A%3A%2A&rows=0&facet=true&facet.sort=count&facet.field=cat&wt=json"
        );
    }

    #[test]
    fn test_edismax_wins_def_type_when_both_attached() {
        let params = SelectQuery::new()
            .with_dismax(crate::query::component::DisMax::new())
            .with_edismax(crate::query::component::EDisMax::new())
            .params();
        assert_eq!(params.get_all("defType"), vec!["edismax"]);
    }

    #[test]
    fn test_def_type() {
        let params = SelectQuery::new().def_type("lucene").params();
        assert_eq!(params.get("defType"), Some("lucene"));
    }

    #[test]
    fn test_dismax_component_overrides_def_type() {
        let params = SelectQuery::new()
            .def_type("lucene")
            .with_dismax(crate::query::component::DisMax::new())
            .params();
        assert_eq!(params.get_all("defType"), vec!["dismax"]);
    }

    #[test]
    fn test_debug_flag() {
        let params = SelectQuery::new().debug(true).params();
        assert_eq!(params.get("debugQuery"), Some("true"));
    }
}
