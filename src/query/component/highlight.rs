use crate::param::Params;
use crate::query::component::Component;

/// The highlighting component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Highlighting {
    fields: Vec<String>,
    snippets: Option<u64>,
    fragsize: Option<u64>,
    merge_contiguous: Option<bool>,
    require_field_match: Option<bool>,
    simple_prefix: Option<String>,
    simple_postfix: Option<String>,
}

impl Highlighting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Maximum highlighted snippets per field.
    pub fn snippets(mut self, snippets: u64) -> Self {
        self.snippets = Some(snippets);
        self
    }

    /// Snippet size in characters; 0 means the whole field value.
    pub fn fragsize(mut self, fragsize: u64) -> Self {
        self.fragsize = Some(fragsize);
        self
    }

    pub fn merge_contiguous(mut self, merge: bool) -> Self {
        self.merge_contiguous = Some(merge);
        self
    }

    pub fn require_field_match(mut self, require: bool) -> Self {
        self.require_field_match = Some(require);
        self
    }

    /// Markup inserted before a highlighted term.
    pub fn simple_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.simple_prefix = Some(prefix.into());
        self
    }

    /// Markup inserted after a highlighted term.
    pub fn simple_postfix<S: Into<String>>(mut self, postfix: S) -> Self {
        self.simple_postfix = Some(postfix.into());
        self
    }
}

impl Component for Highlighting {
    fn append_params(&self, params: &mut Params) {
        params.add("hl", "true");
        if !self.fields.is_empty() {
            params.add("hl.fl", self.fields.join(","));
        }
        if let Some(snippets) = self.snippets {
            params.add("hl.snippets", snippets.to_string());
        }
        if let Some(fragsize) = self.fragsize {
            params.add("hl.fragsize", fragsize.to_string());
        }
        if let Some(merge) = self.merge_contiguous {
            params.add("hl.mergeContiguous", merge.to_string());
        }
        if let Some(require) = self.require_field_match {
            params.add("hl.requireFieldMatch", require.to_string());
        }
        if let Some(prefix) = &self.simple_prefix {
            params.add("hl.simple.pre", prefix.clone());
        }
        if let Some(postfix) = &self.simple_postfix {
            params.add("hl.simple.post", postfix.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_flag_always_emitted() {
        let mut params = Params::new();
        Highlighting::new().append_params(&mut params);
        assert_eq!(params.get("hl"), Some("true"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_full_option_set() {
        let mut params = Params::new();
        Highlighting::new()
            .field("title")
            .field("body")
            .snippets(3)
            .fragsize(100)
            .merge_contiguous(true)
            .require_field_match(true)
            .simple_prefix("<em>")
            .simple_postfix("</em>")
            .append_params(&mut params);
        assert_eq!(params.get("hl.fl"), Some("title,body"));
        assert_eq!(params.get("hl.snippets"), Some("3"));
        assert_eq!(params.get("hl.fragsize"), Some("100"));
        assert_eq!(params.get("hl.mergeContiguous"), Some("true"));
        assert_eq!(params.get("hl.requireFieldMatch"), Some("true"));
        assert_eq!(params.get("hl.simple.pre"), Some("<em>"));
        assert_eq!(params.get("hl.simple.post"), Some("</em>"));
    }
}
