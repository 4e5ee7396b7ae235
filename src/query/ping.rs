use crate::param::Params;

/// Builder for the ping handler, used for health checks.
#[derive(Debug, Clone, PartialEq)]
pub struct PingQuery {
    handler: String,
}

impl Default for PingQuery {
    fn default() -> Self {
        Self {
            handler: "admin/ping".to_string(),
        }
    }
}

impl PingQuery {
    pub fn new() -> Self {
        Self::default()
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
        params.set("wt", "json");
        params
    }
}
