use serde_json::Value;

use crate::response::namedlist::named_list_pairs;
use crate::response::select::DocList;

/// One group within a `group.field` command: the shared field value and its
/// matching documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    /// Null when documents miss the grouped field.
    pub value: Value,
    pub doclist: DocList,
}

/// Result of a single `group.field` command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldGroup {
    pub field: String,
    /// Total documents matching the query.
    pub matches: u64,
    /// Distinct group count, present only when `group.ngroups` was requested.
    pub ngroups: Option<u64>,
    pub groups: Vec<Group>,
}

/// Result of a single `group.query` command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryGroup {
    pub query: String,
    pub matches: u64,
    pub doclist: DocList,
}

/// The `grouped` section of a select response.
///
/// Solr keys this section by command (field name or query string) and the two
/// command kinds have different shapes; they are told apart by the presence
/// of `groups` versus `doclist`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedResult {
    pub fields: Vec<FieldGroup>,
    pub queries: Vec<QueryGroup>,
}

impl GroupedResult {
    pub fn parse(value: &Value) -> Self {
        let mut fields = Vec::new();
        let mut queries = Vec::new();
        for (key, body) in named_list_pairs(value) {
            if body.get("groups").is_some() {
                fields.push(parse_field_command(&key, &body));
            } else if body.get("doclist").is_some() {
                queries.push(QueryGroup {
                    query: key,
                    matches: body["matches"].as_u64().unwrap_or(0),
                    doclist: DocList::parse(&body["doclist"]),
                });
            }
        }
        Self { fields, queries }
    }

    pub fn field(&self, name: &str) -> Option<&FieldGroup> {
        self.fields.iter().find(|g| g.field == name)
    }

    pub fn query(&self, query: &str) -> Option<&QueryGroup> {
        self.queries.iter().find(|g| g.query == query)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.queries.is_empty()
    }
}

fn parse_field_command(field: &str, body: &Value) -> FieldGroup {
    let groups = body["groups"]
        .as_array()
        .map(|groups| {
            groups
                .iter()
                .map(|group| Group {
                    value: group.get("groupValue").cloned().unwrap_or(Value::Null),
                    doclist: DocList::parse(&group["doclist"]),
                })
                .collect()
        })
        .unwrap_or_default();
    FieldGroup {
        field: field.to_string(),
        matches: body["matches"].as_u64().unwrap_or(0),
        ngroups: body["ngroups"].as_u64(),
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_grouping() {
        let value = json!({
            "manu": {
                "matches": 32,
                "ngroups": 5,
                "groups": [
                    {
                        "groupValue": "canon",
                        "doclist": {"numFound": 12, "start": 0, "docs": [{"id": "c1"}]}
                    },
                    {
                        "groupValue": null,
                        "doclist": {"numFound": 3, "start": 0, "docs": []}
                    }
                ]
            }
        });
        let grouped = GroupedResult::parse(&value);
        let manu = grouped.field("manu").unwrap();
        assert_eq!(manu.matches, 32);
        assert_eq!(manu.ngroups, Some(5));
        assert_eq!(manu.groups.len(), 2);
        assert_eq!(manu.groups[0].value, json!("canon"));
        assert_eq!(manu.groups[0].doclist.docs[0].get_str("id"), Some("c1"));
        assert_eq!(manu.groups[1].value, Value::Null);
    }

    #[test]
    fn test_query_grouping() {
        let value = json!({
            "price:[0 TO 100]": {
                "matches": 32,
                "doclist": {"numFound": 7, "start": 0, "docs": [{"id": "p1"}]}
            }
        });
        let grouped = GroupedResult::parse(&value);
        let cheap = grouped.query("price:[0 TO 100]").unwrap();
        assert_eq!(cheap.matches, 32);
        assert_eq!(cheap.doclist.num_found, 7);
        assert!(grouped.fields.is_empty());
    }

    #[test]
    fn test_ngroups_absent() {
        let value = json!({
            "manu": {"matches": 1, "groups": []}
        });
        let grouped = GroupedResult::parse(&value);
        assert_eq!(grouped.field("manu").unwrap().ngroups, None);
    }

    #[test]
    fn test_absent_section_is_empty() {
        assert!(GroupedResult::parse(&json!(null)).is_empty());
    }
}
