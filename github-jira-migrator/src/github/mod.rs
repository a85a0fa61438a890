//! GitHub issue listing, commenting and closing.
//!
//! This module wraps the GitHub REST API behind [`IssueSource`] so the
//! runner can be driven by any issue tracker, including in-memory fakes.

mod error;
mod issue;

pub use error::GitHubError;
pub use issue::{IssueState, SourceIssue};

use crate::rate_limit::ensure_core_rate_limit;
use async_trait::async_trait;
use octocrab::models::issues::Issue;
use octocrab::{Octocrab, Page};
use tracing::{debug, info, info_span, warn, Instrument};

/// Issues requested per page (GitHub's maximum).
pub const ISSUES_PER_PAGE: u8 = 100;

/// The issue tracker side of a migration.
#[async_trait]
pub trait IssueSource {
    /// Lists issues in the given state that match the configured labels.
    async fn list_issues(&self, state: IssueState) -> Result<Vec<SourceIssue>, GitHubError>;

    /// Appends a comment to an issue.
    async fn comment(&self, number: u64, text: &str) -> Result<(), GitHubError>;

    /// Transitions an issue to closed.
    async fn close(&self, number: u64) -> Result<(), GitHubError>;
}

/// [`IssueSource`] backed by a single GitHub repository.
pub struct GitHubIssues {
    octocrab: Octocrab,
    owner: String,
    repo: String,
    labels: Vec<String>,
    paginate: bool,
}

impl GitHubIssues {
    /// Builds an authenticated client for `owner/repo`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the underlying client cannot be built.
    pub fn new(
        token: String,
        owner: impl Into<String>,
        repo: impl Into<String>,
        labels: Vec<String>,
    ) -> Result<Self, GitHubError> {
        let octocrab = Octocrab::builder().personal_token(token).build()?;
        Ok(Self::with_client(octocrab, owner, repo, labels))
    }

    /// Wraps an existing client.
    pub fn with_client(
        octocrab: Octocrab,
        owner: impl Into<String>,
        repo: impl Into<String>,
        labels: Vec<String>,
    ) -> Self {
        Self {
            octocrab,
            owner: owner.into(),
            repo: repo.into(),
            labels,
            paginate: true,
        }
    }

    /// Sets whether listings follow every page or stop after the first.
    #[must_use]
    pub fn with_pagination(mut self, paginate: bool) -> Self {
        self.paginate = paginate;
        self
    }

    /// Returns the repository in `owner/name` form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    async fn first_page(&self, state: IssueState) -> Result<Page<Issue>, GitHubError> {
        ensure_core_rate_limit(&self.octocrab).await?;

        let handler = self.octocrab.issues(&self.owner, &self.repo);
        let mut request = handler
            .list()
            .state(state.into())
            .per_page(ISSUES_PER_PAGE);
        if !self.labels.is_empty() {
            request = request.labels(&self.labels);
        }

        Ok(request.send().await?)
    }

    fn classify(&self, error: octocrab::Error) -> GitHubError {
        if is_permission_denied(&error) {
            GitHubError::PermissionDenied {
                owner: self.owner.clone(),
                repo: self.repo.clone(),
            }
        } else {
            GitHubError::Api(error)
        }
    }
}

#[async_trait]
impl IssueSource for GitHubIssues {
    async fn list_issues(&self, state: IssueState) -> Result<Vec<SourceIssue>, GitHubError> {
        let span = info_span!(
            "list_issues",
            repo = %self.full_name(),
            state = state.as_str()
        );

        async {
            let mut page = self.first_page(state).await?;
            let mut issues: Vec<SourceIssue> =
                page.take_items().into_iter().map(SourceIssue::from).collect();

            if !self.paginate {
                if page.next.is_some() {
                    warn!(
                        per_page = ISSUES_PER_PAGE,
                        "More issues exist than one page holds; pagination is disabled, truncating"
                    );
                }
                info!(count = issues.len(), "Listed issues");
                return Ok(issues);
            }

            while page.next.is_some() {
                ensure_core_rate_limit(&self.octocrab).await?;
                match self.octocrab.get_page::<Issue>(&page.next).await? {
                    Some(mut next_page) => {
                        debug!(count = next_page.items.len(), "Fetched next page");
                        issues.extend(next_page.take_items().into_iter().map(SourceIssue::from));
                        page = next_page;
                    }
                    None => break,
                }
            }

            info!(count = issues.len(), "Listed issues");
            Ok(issues)
        }
        .instrument(span)
        .await
    }

    async fn comment(&self, number: u64, text: &str) -> Result<(), GitHubError> {
        debug!(repo = %self.full_name(), issue_number = number, "Commenting on issue");
        ensure_core_rate_limit(&self.octocrab).await?;

        self.octocrab
            .issues(&self.owner, &self.repo)
            .create_comment(number, text)
            .await
            .map_err(|e| self.classify(e))?;
        Ok(())
    }

    async fn close(&self, number: u64) -> Result<(), GitHubError> {
        debug!(repo = %self.full_name(), issue_number = number, "Closing issue");
        ensure_core_rate_limit(&self.octocrab).await?;

        self.octocrab
            .issues(&self.owner, &self.repo)
            .update(number)
            .state(octocrab::models::IssueState::Closed)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        Ok(())
    }
}

/// Checks if an API error indicates missing write access.
fn is_permission_denied(error: &octocrab::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    msg.contains("403") || msg.contains("forbidden") || msg.contains("permission")
}
