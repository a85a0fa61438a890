//! Ticket creation payload and response types.
//!
//! Field names follow the Jira Cloud REST v3 `POST /rest/api/3/issue` body.
//! Descriptions use the Atlassian Document Format (ADF).

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

/// Jira fields that are the same for every ticket in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraSettings {
    /// Destination project key, e.g. `PROJ`.
    pub project_key: String,
    /// Issue type id, e.g. `10172`.
    pub issue_type_id: String,
    /// Account id of the assignee.
    pub assignee_account_id: String,
}

/// An ADF document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "doc")]
pub struct AdfDocument {
    /// ADF version; always 1.
    pub version: u32,
    /// Top-level block nodes.
    pub content: Vec<AdfNode>,
}

/// The subset of ADF nodes the migrator emits.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AdfNode {
    /// A block of inline nodes.
    Paragraph {
        /// Inline nodes of the paragraph.
        content: Vec<AdfNode>,
    },
    /// A run of plain text.
    Text {
        /// The text itself.
        text: String,
    },
}

impl AdfDocument {
    /// Wraps plain text in one paragraph holding one text node.
    #[must_use]
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            version: 1,
            content: vec![AdfNode::Paragraph {
                content: vec![AdfNode::Text { text: text.into() }],
            }],
        }
    }

    /// Concatenates every text node in document order.
    #[must_use]
    pub fn text(&self) -> String {
        fn collect(nodes: &[AdfNode], out: &mut String) {
            for node in nodes {
                match node {
                    AdfNode::Paragraph { content } => collect(content, out),
                    AdfNode::Text { text } => out.push_str(text),
                }
            }
        }

        let mut out = String::new();
        collect(&self.content, &mut out);
        out
    }
}

/// Reference to a project by key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRef {
    /// Project key, e.g. `PROJ`.
    pub key: String,
}

/// Reference to an issue type by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueTypeRef {
    /// Issue type id, e.g. `10172`.
    pub id: String,
}

/// Reference to a user by Atlassian account id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssigneeRef {
    /// Atlassian account id.
    #[serde(rename = "accountId")]
    pub account_id: String,
}

/// The `fields` object of a ticket creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketPayload {
    /// Ticket summary; the GitHub issue title.
    pub summary: String,
    /// Ticket description as an ADF document.
    pub description: AdfDocument,
    /// Destination project.
    pub project: ProjectRef,
    /// Issue type of the new ticket.
    pub issuetype: IssueTypeRef,
    /// User the ticket is assigned to.
    pub assignee: AssigneeRef,
}

impl TicketPayload {
    /// Builds a payload with the run-wide fields taken from `settings`.
    #[must_use]
    pub fn new(
        summary: impl Into<String>,
        description: impl Into<String>,
        settings: &JiraSettings,
    ) -> Self {
        Self {
            summary: summary.into(),
            description: AdfDocument::plain_text(description),
            project: ProjectRef {
                key: settings.project_key.clone(),
            },
            issuetype: IssueTypeRef {
                id: settings.issue_type_id.clone(),
            },
            assignee: AssigneeRef {
                account_id: settings.assignee_account_id.clone(),
            },
        }
    }
}

/// Request body wrapper.
#[derive(Debug, Serialize)]
pub(crate) struct CreateTicketRequest<'a> {
    /// Ticket fields.
    pub(crate) fields: &'a TicketPayload,
}

/// A ticket created by Jira.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TicketReference {
    /// Numeric id, as a string.
    #[serde(default)]
    pub id: String,
    /// Project-prefixed key, e.g. `PROJ-1`.
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> JiraSettings {
        JiraSettings {
            project_key: "PROJ".to_string(),
            issue_type_id: "10172".to_string(),
            assignee_account_id: "acc1".to_string(),
        }
    }

    #[test]
    fn request_matches_jira_create_issue_body() {
        let payload = TicketPayload::new("Bug X", "desc\n\nhttps://x/5", &settings());
        let body = serde_json::to_value(CreateTicketRequest { fields: &payload }).unwrap();

        assert_eq!(
            body,
            json!({
                "fields": {
                    "summary": "Bug X",
                    "description": {
                        "type": "doc",
                        "version": 1,
                        "content": [{
                            "type": "paragraph",
                            "content": [{ "type": "text", "text": "desc\n\nhttps://x/5" }]
                        }]
                    },
                    "project": { "key": "PROJ" },
                    "issuetype": { "id": "10172" },
                    "assignee": { "accountId": "acc1" }
                }
            })
        );
    }

    #[test]
    fn document_text_joins_text_nodes() {
        let doc = AdfDocument::plain_text("hello");
        assert_eq!(doc.text(), "hello");
    }

    #[test]
    fn can_parse_created_ticket() {
        let reference: TicketReference = serde_json::from_str(
            r#"{"id":"10000","key":"PROJ-1","self":"https://acme.atlassian.net/rest/api/3/issue/10000"}"#,
        )
        .unwrap();

        assert_eq!(reference.key, "PROJ-1");
        assert_eq!(reference.id, "10000");
    }
}
