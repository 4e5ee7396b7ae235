use crate::param::Params;
use crate::query::component::Component;

/// Distributed search over explicit shards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distributed {
    shards: Vec<String>,
    shards_qt: Option<String>,
}

impl Distributed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shard address, e.g. `"solr1:8983/solr/core0"`; repeatable.
    pub fn shard<S: Into<String>>(mut self, shard: S) -> Self {
        self.shards.push(shard.into());
        self
    }

    /// Request handler the shards are queried with (`shards.qt`).
    pub fn shards_qt<S: Into<String>>(mut self, handler: S) -> Self {
        self.shards_qt = Some(handler.into());
        self
    }
}

impl Component for Distributed {
    fn append_params(&self, params: &mut Params) {
        if !self.shards.is_empty() {
            params.add("shards", self.shards.join(","));
        }
        if let Some(handler) = &self.shards_qt {
            params.add("shards.qt", handler.clone());
        }
    }
}
