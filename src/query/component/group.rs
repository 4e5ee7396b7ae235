use crate::param::Params;
use crate::query::component::Component;

/// Shape of the grouped response section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupFormat {
    /// Nested groups with their own doclists.
    Grouped,
    /// Flat doclist with the first document of each group.
    Simple,
}

impl GroupFormat {
    fn as_str(self) -> &'static str {
        match self {
            GroupFormat::Grouped => "grouped",
            GroupFormat::Simple => "simple",
        }
    }
}

/// The result grouping component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    fields: Vec<String>,
    queries: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
    /// Sort within each group.
    sort: Option<String>,
    format: Option<GroupFormat>,
    main: Option<bool>,
    ngroups: Option<bool>,
    truncate: Option<bool>,
    facet: Option<bool>,
}

impl Grouping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn query<S: Into<String>>(mut self, query: S) -> Self {
        self.queries.push(query.into());
        self
    }

    /// Documents returned per group.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sort applied within each group, e.g. `"price asc"`.
    pub fn sort<S: Into<String>>(mut self, sort: S) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn format(mut self, format: GroupFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Return the first document of each group as the main result.
    pub fn main(mut self, main: bool) -> Self {
        self.main = Some(main);
        self
    }

    /// Include the distinct group count.
    pub fn ngroups(mut self, ngroups: bool) -> Self {
        self.ngroups = Some(ngroups);
        self
    }

    /// Base facet counts on the most relevant document per group.
    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = Some(truncate);
        self
    }

    /// Grouped faceting.
    pub fn facet(mut self, facet: bool) -> Self {
        self.facet = Some(facet);
        self
    }
}

impl Component for Grouping {
    fn append_params(&self, params: &mut Params) {
        params.add("group", "true");
        for field in &self.fields {
            params.add("group.field", field.clone());
        }
        for query in &self.queries {
            params.add("group.query", query.clone());
        }
        if let Some(limit) = self.limit {
            params.add("group.limit", limit.to_string());
        }
        if let Some(offset) = self.offset {
            params.add("group.offset", offset.to_string());
        }
        if let Some(sort) = &self.sort {
            params.add("group.sort", sort.clone());
        }
        if let Some(format) = self.format {
            params.add("group.format", format.as_str());
        }
        if let Some(main) = self.main {
            params.add("group.main", main.to_string());
        }
        if let Some(ngroups) = self.ngroups {
            params.add("group.ngroups", ngroups.to_string());
        }
        if let Some(truncate) = self.truncate {
            params.add("group.truncate", truncate.to_string());
        }
        if let Some(facet) = self.facet {
            params.add("group.facet", facet.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_flag_always_emitted() {
        let mut params = Params::new();
        Grouping::new().append_params(&mut params);
        assert_eq!(params.get("group"), Some("true"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_field_and_query_commands() {
        let mut params = Params::new();
        Grouping::new()
            .field("manu")
            .query("price:[0 TO 100]")
            .limit(3)
            .ngroups(true)
            .format(GroupFormat::Grouped)
            .append_params(&mut params);
        assert_eq!(params.get("group.field"), Some("manu"));
        assert_eq!(params.get("group.query"), Some("price:[0 TO 100]"));
        assert_eq!(params.get("group.limit"), Some("3"));
        assert_eq!(params.get("group.ngroups"), Some("true"));
        assert_eq!(params.get("group.format"), Some("grouped"));
    }

    #[test]
    fn test_simple_main_format() {
        let mut params = Params::new();
        Grouping::new()
            .field("manu")
            .format(GroupFormat::Simple)
            .main(true)
            .sort("price asc")
            .append_params(&mut params);
        assert_eq!(params.get("group.format"), Some("simple"));
        assert_eq!(params.get("group.main"), Some("true"));
        assert_eq!(params.get("group.sort"), Some("price asc"));
    }
}
