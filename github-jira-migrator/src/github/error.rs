//! GitHub adapter error types.

use thiserror::Error;

/// Errors that can occur while talking to the issue tracker.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// Permission denied.
    #[error("Permission denied: no write access to {owner}/{repo}")]
    PermissionDenied { owner: String, repo: String },
}
