//! Jira ticket creation.
//!
//! [`TicketSink`] is the destination side of a migration; [`JiraClient`]
//! implements it against the Jira Cloud REST API v3.

mod error;
mod payload;

pub use error::JiraError;
pub use payload::{
    AdfDocument, AdfNode, AssigneeRef, IssueTypeRef, JiraSettings, ProjectRef, TicketPayload,
    TicketReference,
};

use async_trait::async_trait;
use payload::CreateTicketRequest;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};
use url::Url;

/// Path of the issue creation endpoint, relative to the instance root.
const CREATE_ISSUE_PATH: &str = "rest/api/3/issue";

/// The ticketing system side of a migration.
#[async_trait]
pub trait TicketSink {
    /// Creates a ticket and returns the key Jira assigned to it.
    async fn create_ticket(&self, payload: &TicketPayload) -> Result<TicketReference, JiraError>;

    /// Web URL of a ticket, used in the comment left on the source issue.
    fn browse_url(&self, key: &str) -> String;
}

/// Jira Cloud client authenticated with an account e-mail and API token.
#[derive(Clone)]
pub struct JiraClient {
    http: Client,
    base_url: Url,
    username: String,
    token: String,
}

impl JiraClient {
    /// Creates a client for `https://{domain}/`.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError`] if the domain is not a valid host or the HTTP
    /// client cannot be built.
    pub fn new(
        domain: &str,
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, JiraError> {
        let base_url =
            Url::parse(&format!("https://{domain}/")).map_err(|e| JiraError::InvalidDomain {
                domain: domain.to_string(),
                source: e,
            })?;
        Self::with_base_url(base_url, username, token)
    }

    /// Creates a client rooted at an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError`] if the HTTP client cannot be built.
    pub fn with_base_url(
        base_url: Url,
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, JiraError> {
        let http = Client::builder()
            .user_agent(concat!("github-jira-migrator/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            username: username.into(),
            token: token.into(),
        })
    }

    /// Returns the instance root URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn create_issue_url(&self) -> Result<Url, JiraError> {
        self.base_url
            .join(CREATE_ISSUE_PATH)
            .map_err(|e| JiraError::InvalidDomain {
                domain: self.base_url.to_string(),
                source: e,
            })
    }
}

#[async_trait]
impl TicketSink for JiraClient {
    async fn create_ticket(&self, payload: &TicketPayload) -> Result<TicketReference, JiraError> {
        let url = self.create_issue_url()?;
        debug!(url = %url, summary = %payload.summary, "POST create issue");

        let response = self
            .http
            .post(url)
            .basic_auth(&self.username, Some(&self.token))
            .json(&CreateTicketRequest { fields: payload })
            .send()
            .await?;

        let reference: TicketReference = handle_response(response).await?;
        info!(key = %reference.key, "Ticket created");
        Ok(reference)
    }

    fn browse_url(&self, key: &str) -> String {
        format!("{}browse/{key}", self.base_url)
    }
}

/// Decodes a successful response or maps the status to a [`JiraError`].
async fn handle_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, JiraError> {
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        return serde_json::from_str(&text).map_err(|e| {
            warn!(error = %e, body = %text, "Failed to parse response");
            JiraError::Serialization(e)
        });
    }

    Err(classify_status(status, text))
}

fn classify_status(status: StatusCode, message: String) -> JiraError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => JiraError::Unauthorized {
            status: status.as_u16(),
            message,
        },
        StatusCode::BAD_REQUEST => JiraError::Rejected { message },
        _ => JiraError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_urls_from_domain() {
        let client = JiraClient::new("acme.atlassian.net", "me@acme.io", "secret").unwrap();

        assert_eq!(client.base_url().as_str(), "https://acme.atlassian.net/");
        assert_eq!(
            client.create_issue_url().unwrap().as_str(),
            "https://acme.atlassian.net/rest/api/3/issue"
        );
        assert_eq!(
            client.browse_url("PROJ-1"),
            "https://acme.atlassian.net/browse/PROJ-1"
        );
    }

    #[test]
    fn rejects_invalid_domain() {
        let result = JiraClient::new("bad domain", "me", "secret");
        assert!(matches!(result, Err(JiraError::InvalidDomain { .. })));
    }

    #[test]
    fn classifies_error_statuses() {
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED, String::new()),
            JiraError::Unauthorized { status: 401, .. }
        ));
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, String::new()),
            JiraError::Unauthorized { status: 403, .. }
        ));
        assert!(matches!(
            classify_status(StatusCode::BAD_REQUEST, "project is required".to_string()),
            JiraError::Rejected { message } if message == "project is required"
        ));
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            JiraError::Api { status: 500, .. }
        ));
    }
}
