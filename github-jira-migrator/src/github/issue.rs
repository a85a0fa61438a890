//! Source issue information.

use serde::Serialize;

/// State filter and state value of a GitHub issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    /// Issue is open.
    Open,
    /// Issue is closed.
    Closed,
}

impl IssueState {
    /// Returns the state as GitHub spells it.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl From<IssueState> for octocrab::params::State {
    fn from(state: IssueState) -> Self {
        match state {
            IssueState::Open => Self::Open,
            IssueState::Closed => Self::Closed,
        }
    }
}

/// A GitHub issue selected for migration.
#[derive(Debug, Clone, Serialize)]
pub struct SourceIssue {
    /// Issue number within the repository.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Issue body; empty when GitHub reports none.
    pub body: String,

    /// Canonical web URL of the issue.
    pub html_url: String,

    /// Issue state at fetch time.
    pub state: IssueState,

    /// Names of the labels attached to the issue.
    pub labels: Vec<String>,
}

impl From<octocrab::models::issues::Issue> for SourceIssue {
    fn from(issue: octocrab::models::issues::Issue) -> Self {
        let state = match issue.state {
            octocrab::models::IssueState::Closed => IssueState::Closed,
            _ => IssueState::Open,
        };

        Self {
            number: issue.number,
            title: issue.title,
            body: issue.body.unwrap_or_default(),
            html_url: issue.html_url.to_string(),
            state,
            labels: issue.labels.into_iter().map(|label| label.name).collect(),
        }
    }
}
