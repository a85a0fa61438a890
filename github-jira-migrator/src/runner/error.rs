//! Runner error types.

use crate::github::GitHubError;
use crate::jira::JiraError;
use crate::templates::TemplateError;

/// Errors that abort a whole run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Listing the candidate issues failed.
    #[error("Failed to list {state} issues: {source}")]
    Fetch {
        state: &'static str,
        #[source]
        source: GitHubError,
    },

    /// GitHub client initialization errors.
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    /// Jira client initialization errors.
    #[error(transparent)]
    Jira(#[from] JiraError),
}

/// Errors that fail a single issue's migration.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// Ticket creation failed.
    #[error(transparent)]
    Jira(#[from] JiraError),

    /// Commenting on or closing the source issue failed.
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    /// The closing comment could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),
}
