use crate::param::Params;
use crate::query::component::Component;

/// The term vector component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVectors {
    fields: Vec<String>,
    doc_ids: Vec<u64>,
    all: Option<bool>,
    tf: Option<bool>,
    df: Option<bool>,
    tf_idf: Option<bool>,
    positions: Option<bool>,
    offsets: Option<bool>,
}

impl TermVectors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field to return term vectors for; repeatable.
    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Restrict to specific Lucene document ids; repeatable.
    pub fn doc_id(mut self, doc_id: u64) -> Self {
        self.doc_ids.push(doc_id);
        self
    }

    /// Turn on every term vector option at once.
    pub fn all(mut self, all: bool) -> Self {
        self.all = Some(all);
        self
    }

    pub fn tf(mut self, tf: bool) -> Self {
        self.tf = Some(tf);
        self
    }

    pub fn df(mut self, df: bool) -> Self {
        self.df = Some(df);
        self
    }

    pub fn tf_idf(mut self, tf_idf: bool) -> Self {
        self.tf_idf = Some(tf_idf);
        self
    }

    pub fn positions(mut self, positions: bool) -> Self {
        self.positions = Some(positions);
        self
    }

    pub fn offsets(mut self, offsets: bool) -> Self {
        self.offsets = Some(offsets);
        self
    }
}

impl Component for TermVectors {
    fn append_params(&self, params: &mut Params) {
        params.add("tv", "true");
        if !self.fields.is_empty() {
            params.add("tv.fl", self.fields.join(","));
        }
        if !self.doc_ids.is_empty() {
            let ids: Vec<String> = self.doc_ids.iter().map(u64::to_string).collect();
            params.add("tv.docIds", ids.join(","));
        }
        if let Some(all) = self.all {
            params.add("tv.all", all.to_string());
        }
        if let Some(tf) = self.tf {
            params.add("tv.tf", tf.to_string());
        }
        if let Some(df) = self.df {
            params.add("tv.df", df.to_string());
        }
        if let Some(tf_idf) = self.tf_idf {
            params.add("tv.tf_idf", tf_idf.to_string());
        }
        if let Some(positions) = self.positions {
            params.add("tv.positions", positions.to_string());
        }
        if let Some(offsets) = self.offsets {
            params.add("tv.offsets", offsets.to_string());
        }
    }

    fn needs_flat_named_list(&self) -> bool {
        true
    }
}
