use crate::param::Params;
use crate::query::component::Component;

/// The spellcheck component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spellcheck {
    query: Option<String>,
    dictionary: Option<String>,
    count: Option<u64>,
    build: Option<bool>,
    reload: Option<bool>,
    collate: Option<bool>,
    max_collations: Option<u64>,
    max_collation_tries: Option<u64>,
    extended_results: Option<bool>,
    collate_extended_results: Option<bool>,
    only_more_popular: Option<bool>,
    accuracy: Option<f64>,
}

impl Spellcheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spellcheck a different string than the main query.
    pub fn query<S: Into<String>>(mut self, query: S) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn dictionary<S: Into<String>>(mut self, dictionary: S) -> Self {
        self.dictionary = Some(dictionary.into());
        self
    }

    /// Maximum suggestions per term.
    pub fn count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn build(mut self, build: bool) -> Self {
        self.build = Some(build);
        self
    }

    pub fn reload(mut self, reload: bool) -> Self {
        self.reload = Some(reload);
        self
    }

    pub fn collate(mut self, collate: bool) -> Self {
        self.collate = Some(collate);
        self
    }

    pub fn max_collations(mut self, max: u64) -> Self {
        self.max_collations = Some(max);
        self
    }

    pub fn max_collation_tries(mut self, max: u64) -> Self {
        self.max_collation_tries = Some(max);
        self
    }

    pub fn extended_results(mut self, extended: bool) -> Self {
        self.extended_results = Some(extended);
        self
    }

    pub fn collate_extended_results(mut self, extended: bool) -> Self {
        self.collate_extended_results = Some(extended);
        self
    }

    pub fn only_more_popular(mut self, only: bool) -> Self {
        self.only_more_popular = Some(only);
        self
    }

    pub fn accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }
}

impl Component for Spellcheck {
    fn append_params(&self, params: &mut Params) {
        params.add("spellcheck", "true");
        if let Some(query) = &self.query {
            params.add("spellcheck.q", query.clone());
        }
        if let Some(dictionary) = &self.dictionary {
            params.add("spellcheck.dictionary", dictionary.clone());
        }
        if let Some(count) = self.count {
            params.add("spellcheck.count", count.to_string());
        }
        if let Some(build) = self.build {
            params.add("spellcheck.build", build.to_string());
        }
        if let Some(reload) = self.reload {
            params.add("spellcheck.reload", reload.to_string());
        }
        if let Some(collate) = self.collate {
            params.add("spellcheck.collate", collate.to_string());
        }
        if let Some(max) = self.max_collations {
            params.add("spellcheck.maxCollations", max.to_string());
        }
        if let Some(max) = self.max_collation_tries {
            params.add("spellcheck.maxCollationTries", max.to_string());
        }
        if let Some(extended) = self.extended_results {
            params.add("spellcheck.extendedResults", extended.to_string());
        }
        if let Some(extended) = self.collate_extended_results {
            params.add("spellcheck.collateExtendedResults", extended.to_string());
        }
        if let Some(only) = self.only_more_popular {
            params.add("spellcheck.onlyMorePopular", only.to_string());
        }
        if let Some(accuracy) = self.accuracy {
            params.add("spellcheck.accuracy", accuracy.to_string());
        }
    }

    fn needs_flat_named_list(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_flag_always_emitted() {
        let mut params = Params::new();
        Spellcheck::new().append_params(&mut params);
        assert_eq!(params.get("spellcheck"), Some("true"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_full_option_set() {
        let mut params = Params::new();
        Spellcheck::new()
            .query("delll ultrashar")
            .dictionary("default")
            .count(5)
            .collate(true)
            .max_collation_tries(10)
            .extended_results(true)
            .accuracy(0.5)
            .append_params(&mut params);
        assert_eq!(params.get("spellcheck.q"), Some("delll ultrashar"));
        assert_eq!(params.get("spellcheck.dictionary"), Some("default"));
        assert_eq!(params.get("spellcheck.count"), Some("5"));
        assert_eq!(params.get("spellcheck.collate"), Some("true"));
        assert_eq!(params.get("spellcheck.maxCollationTries"), Some("10"));
        assert_eq!(params.get("spellcheck.extendedResults"), Some("true"));
        assert_eq!(params.get("spellcheck.accuracy"), Some("0.5"));
    }

    #[test]
    fn test_needs_flat_named_list() {
        assert!(Spellcheck::new().needs_flat_named_list());
    }
}
