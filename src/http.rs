use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;
use tracing::{debug, trace};

use crate::param::Params;
use crate::query::{PingQuery, SelectQuery, TermsQuery};
use crate::response::{PingResult, SelectResult, TermsResult, UpdateResult};
use crate::update::UpdateRequest;
use crate::{Result, SolrError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The transport seam: executes one HTTP request against a Solr server.
///
/// The built-in implementation is [`ReqwestAdapter`]; alternatives can be
/// plugged in with [`Client::with_adapter`].
pub trait SolrAdapter: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

pub struct ReqwestAdapter {
    client: reqwest::blocking::Client,
}

impl ReqwestAdapter {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SolrAdapter for ReqwestAdapter {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        let response = builder.send().map_err(SolrError::Reqwest)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(SolrError::Reqwest)?;
        Ok(HttpResponse { status, body })
    }
}

/// Client for one Solr server, optionally scoped to a core/collection.
pub struct Client {
    base_url: String,
    core: Option<String>,
    headers: Vec<(String, String)>,
    adapter: Box<dyn SolrAdapter>,
}

impl Client {
    /// Create a client for `base_url`, e.g. `http://localhost:8983/solr`.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed =
            url::Url::parse(base_url).map_err(|err| SolrError::InvalidUrl(err.to_string()))?;
        if !parsed.has_host() {
            return Err(SolrError::InvalidUrl(format!(
                "missing host in '{}'",
                base_url
            )));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            core: None,
            headers: Vec::new(),
            adapter: Box::new(ReqwestAdapter::new()),
        })
    }

    /// Scope all requests to a core or collection.
    pub fn with_core<S: Into<String>>(mut self, core: S) -> Self {
        self.core = Some(core.into());
        self
    }

    /// Authenticate with HTTP basic auth. The `Authorization` header is set
    /// at the client level, so custom adapters inherit it.
    pub fn with_basic_auth<U: Into<String>, P: Into<String>>(
        self,
        username: U,
        password: P,
    ) -> Self {
        let credentials =
            STANDARD.encode(format!("{}:{}", username.into(), password.into()));
        self.with_header("Authorization", format!("Basic {}", credentials))
    }

    /// Send an extra header with every request, e.g. an auth token.
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_adapter(mut self, adapter: Box<dyn SolrAdapter>) -> Self {
        self.adapter = adapter;
        self
    }

    /// Execute a select query and parse the full component result set.
    pub fn select(&self, query: &SelectQuery) -> Result<SelectResult> {
        let body = self.get(query.handler_path(), &query.params())?;
        Ok(SelectResult::from_body(&body))
    }

    /// Execute a terms query.
    pub fn terms(&self, query: &TermsQuery) -> Result<TermsResult> {
        let body = self.get(query.handler_path(), &query.params())?;
        Ok(TermsResult::from_body(&body))
    }

    /// Health-check the server or core.
    pub fn ping(&self, query: &PingQuery) -> Result<PingResult> {
        let body = self.get(query.handler_path(), &query.params())?;
        Ok(PingResult::from_body(&body))
    }

    /// Send an update request (adds, deletes, commit, optimize, rollback).
    /// A request with no commands is rejected before any I/O happens.
    pub fn update(&self, request: &UpdateRequest) -> Result<UpdateResult> {
        if request.is_empty() {
            return Err(SolrError::EmptyQuery(
                "update request has no commands".to_string(),
            ));
        }
        let http = HttpRequest {
            method: HttpMethod::Post,
            url: self.endpoint(request.handler_path(), &request.params()),
            headers: self.headers_with_content_type("application/json"),
            body: Some(request.to_json()?),
        };
        let body = self.dispatch(&http)?;
        Ok(UpdateResult::from_body(&body))
    }

    fn get(&self, handler: &str, params: &Params) -> Result<Value> {
        let http = HttpRequest {
            method: HttpMethod::Get,
            url: self.endpoint(handler, params),
            headers: self.headers.clone(),
            body: None,
        };
        self.dispatch(&http)
    }

    fn endpoint(&self, handler: &str, params: &Params) -> String {
        let mut url = self.base_url.clone();
        if let Some(core) = &self.core {
            url.push('/');
            url.push_str(core);
        }
        url.push('/');
        url.push_str(handler);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.to_query_string());
        }
        url
    }

    fn headers_with_content_type(&self, content_type: &str) -> Vec<(String, String)> {
        let mut headers = self.headers.clone();
        headers.push(("Content-Type".to_string(), content_type.to_string()));
        headers
    }

    fn dispatch(&self, request: &HttpRequest) -> Result<Value> {
        debug!(
            method = request.method.as_str(),
            url = %request.url,
            "dispatching Solr request"
        );
        let response = self.adapter.execute(request)?;
        trace!(
            status = response.status,
            bytes = response.body.len(),
            "received Solr response"
        );
        if (200..300).contains(&response.status) {
            serde_json::from_str(&response.body).map_err(SolrError::Json)
        } else {
            Err(parse_error(&response))
        }
    }
}

/// Non-2xx responses carry a JSON error envelope when Solr itself produced
/// them; anything else (proxy errors, HTML pages) falls back to the raw body.
fn parse_error(response: &HttpResponse) -> SolrError {
    if let Ok(body) = serde_json::from_str::<Value>(&response.body) {
        if let Some(msg) = body["error"]["msg"].as_str() {
            let code = body["error"]["code"]
                .as_u64()
                .and_then(|code| u16::try_from(code).ok())
                .unwrap_or(response.status);
            return SolrError::Api {
                code,
                msg: msg.to_string(),
            };
        }
    }
    SolrError::Http(format!("HTTP {}: {}", response.status, response.body))
}
