//! Update requests in Solr's JSON update command format.
//!
//! Solr's update body allows the same command key ("add", "delete") to appear
//! multiple times in one JSON object, which a serde map cannot express. The
//! body is therefore assembled from an ordered command list, serializing each
//! command value with serde and joining the keys by hand.

use serde_json::{json, Value};

use crate::document::SolrDocument;
use crate::param::Params;
use crate::Result;

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Add {
        document: SolrDocument,
        overwrite: Option<bool>,
        commit_within: Option<u64>,
    },
    DeleteById(String),
    DeleteByQuery(String),
    Commit {
        wait_searcher: Option<bool>,
        soft_commit: Option<bool>,
    },
    Optimize {
        wait_searcher: Option<bool>,
        max_segments: Option<u64>,
    },
    Rollback,
}

impl Command {
    fn key(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::DeleteById(_) | Command::DeleteByQuery(_) => "delete",
            Command::Commit { .. } => "commit",
            Command::Optimize { .. } => "optimize",
            Command::Rollback => "rollback",
        }
    }

    fn body(&self) -> Result<Value> {
        let body = match self {
            Command::Add {
                document,
                overwrite,
                commit_within,
            } => {
                let mut body = json!({"doc": serde_json::to_value(document)?});
                if let Some(overwrite) = overwrite {
                    body["overwrite"] = json!(overwrite);
                }
                if let Some(within) = commit_within {
                    body["commitWithin"] = json!(within);
                }
                body
            }
            Command::DeleteById(id) => json!({"id": id}),
            Command::DeleteByQuery(query) => json!({"query": query}),
            Command::Commit {
                wait_searcher,
                soft_commit,
            } => {
                let mut body = json!({});
                if let Some(wait) = wait_searcher {
                    body["waitSearcher"] = json!(wait);
                }
                if let Some(soft) = soft_commit {
                    body["softCommit"] = json!(soft);
                }
                body
            }
            Command::Optimize {
                wait_searcher,
                max_segments,
            } => {
                let mut body = json!({});
                if let Some(wait) = wait_searcher {
                    body["waitSearcher"] = json!(wait);
                }
                if let Some(max) = max_segments {
                    body["maxSegments"] = json!(max);
                }
                body
            }
            Command::Rollback => json!({}),
        };
        Ok(body)
    }
}

/// Builder for an update request: documents to add, deletions, and index
/// maintenance commands, executed in the order they were attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRequest {
    commands: Vec<Command>,
    handler: Option<String>,
}

impl UpdateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(self, document: SolrDocument) -> Self {
        self.add_document_with(document, None, None)
    }

    pub fn add_documents<I>(mut self, documents: I) -> Self
    where
        I: IntoIterator<Item = SolrDocument>,
    {
        for document in documents {
            self = self.add_document(document);
        }
        self
    }

    /// Add a document with explicit overwrite / commitWithin settings.
    pub fn add_document_with(
        mut self,
        document: SolrDocument,
        overwrite: Option<bool>,
        commit_within: Option<u64>,
    ) -> Self {
        self.commands.push(Command::Add {
            document,
            overwrite,
            commit_within,
        });
        self
    }

    pub fn delete_by_id<S: Into<String>>(mut self, id: S) -> Self {
        self.commands.push(Command::DeleteById(id.into()));
        self
    }

    pub fn delete_by_query<S: Into<String>>(mut self, query: S) -> Self {
        self.commands.push(Command::DeleteByQuery(query.into()));
        self
    }

    pub fn commit(mut self) -> Self {
        self.commands.push(Command::Commit {
            wait_searcher: None,
            soft_commit: None,
        });
        self
    }

    pub fn commit_with(mut self, wait_searcher: Option<bool>, soft_commit: Option<bool>) -> Self {
        self.commands.push(Command::Commit {
            wait_searcher,
            soft_commit,
        });
        self
    }

    pub fn optimize(mut self) -> Self {
        self.commands.push(Command::Optimize {
            wait_searcher: None,
            max_segments: None,
        });
        self
    }

    pub fn optimize_with(
        mut self,
        wait_searcher: Option<bool>,
        max_segments: Option<u64>,
    ) -> Self {
        self.commands.push(Command::Optimize {
            wait_searcher,
            max_segments,
        });
        self
    }

    pub fn rollback(mut self) -> Self {
        self.commands.push(Command::Rollback);
        self
    }

    /// Custom update handler path; defaults to `update`.
    pub fn handler<S: Into<String>>(mut self, handler: S) -> Self {
        self.handler = Some(handler.into());
        self
    }

    pub fn handler_path(&self) -> &str {
        self.handler.as_deref().unwrap_or("update")
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.set("wt", "json");
        params
    }

    /// Serialize to the JSON update body, with repeated command keys.
    pub fn to_json(&self) -> Result<String> {
        let mut parts = Vec::with_capacity(self.commands.len());
        for command in &self.commands {
            parts.push(format!(
                "{}:{}",
                serde_json::to_string(command.key())?,
                serde_json::to_string(&command.body()?)?
            ));
        }
        Ok(format!("{{{}}}", parts.join(",")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_documents() {
        let body = UpdateRequest::new()
            .add_document(SolrDocument::new().field("id", "1"))
            .add_document(SolrDocument::new().field("id", "2"))
            .to_json()
            .unwrap();
        assert_eq!(
            body,
            r#"{"add":{"doc":{"id":"1"}},"add":{"doc":{"id":"2"}}}"#
        );
    }

    #[test]
    fn test_add_with_overwrite_and_commit_within() {
        let body = UpdateRequest::new()
            .add_document_with(
                SolrDocument::new().field("id", "1"),
                Some(false),
                Some(5000),
            )
            .to_json()
            .unwrap();
        assert_eq!(
            body,
            r#"{"add":{"doc":{"id":"1"},"overwrite":false,"commitWithin":5000}}"#
        );
    }

    #[test]
    fn test_delete_commands() {
        let body = UpdateRequest::new()
            .delete_by_id("doc-1")
            .delete_by_query("cat:discontinued")
            .to_json()
            .unwrap();
        assert_eq!(
            body,
            r#"{"delete":{"id":"doc-1"},"delete":{"query":"cat:discontinued"}}"#
        );
    }

    #[test]
    fn test_commit_optimize_rollback() {
        let body = UpdateRequest::new()
            .commit_with(Some(true), Some(false))
            .optimize_with(None, Some(2))
            .rollback()
            .to_json()
            .unwrap();
        assert_eq!(
            body,
            r#"{"commit":{"waitSearcher":true,"softCommit":false},"optimize":{"maxSegments":2},"rollback":{}}"#
        );
    }

    #[test]
    fn test_empty_request() {
        let request = UpdateRequest::new();
        assert!(request.is_empty());
        assert_eq!(request.to_json().unwrap(), "{}");
        assert_eq!(request.handler_path(), "update");
    }

    #[test]
    fn test_params_only_wt() {
        assert_eq!(UpdateRequest::new().params().to_query_string(), "wt=json");
    }
}
