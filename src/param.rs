//! Ordered Solr request parameters.
//!
//! Solr treats several parameters as repeatable (`fq`, `facet.field`,
//! `shards`, ...), so this is a list of pairs rather than a map. Insertion
//! order is preserved in the emitted query string.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, keeping any existing values for the same key.
    pub fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Replace all values of `key` with a single value.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        self.pairs.retain(|(k, _)| *k != key);
        self.pairs.push((key, value.into()));
    }

    /// First value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-encoded `key=value&...` string, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(v)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_duplicates() {
        let mut params = Params::new();
        params.add("fq", "type:book");
        params.add("fq", "lang:en");
        assert_eq!(params.get_all("fq"), vec!["type:book", "lang:en"]);
    }

    #[test]
    fn test_set_replaces_all() {
        let mut params = Params::new();
        params.add("rows", "10");
        params.add("rows", "20");
        params.set("rows", "30");
        assert_eq!(params.get_all("rows"), vec!["30"]);
    }

    #[test]
    fn test_query_string_encoding() {
        let mut params = Params::new();
        params.add("q", "title:\"solr in action\"");
        params.add("wt", "json");
        assert_eq!(
            params.to_query_string(),
            "q=title%3A%22solr%20in%20action%22&wt=json"
        );
    }

    #[test]
    fn test_query_string_preserves_order() {
        let mut params = Params::new();
        params.add("q", "*:*");
        params.add("facet", "true");
        params.add("facet.field", "cat");
        assert_eq!(
            params.to_query_string(),
            "q=%2A%3A%2A&facet=true&facet.field=cat"
        );
    }
}
