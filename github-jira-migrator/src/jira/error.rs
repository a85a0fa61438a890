//! Jira adapter error types.

use thiserror::Error;

/// Errors that can occur while creating tickets.
#[derive(Debug, Error)]
pub enum JiraError {
    /// HTTP transport error.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured domain does not form a valid URL.
    #[error("Invalid Jira domain '{domain}': {source}")]
    InvalidDomain {
        domain: String,
        #[source]
        source: url::ParseError,
    },

    /// Credentials were refused.
    #[error("Jira authentication failed (status {status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// The ticket payload was refused, e.g. unknown project or assignee.
    #[error("Jira rejected the ticket: {message}")]
    Rejected { message: String },

    /// Any other non-success response.
    #[error("Jira API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Failed to parse Jira response: {0}")]
    Serialization(#[from] serde_json::Error),
}
