//! Per-issue migration outcomes.

use serde::Serialize;

/// Step of a migration that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    /// Ticket creation in Jira.
    Submit,
    /// Commenting on or closing the GitHub issue.
    Close,
}

/// Result of migrating a single issue.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MigrationResult {
    /// Ticket created and source issue commented on and closed.
    Migrated {
        /// GitHub issue number.
        issue_number: u64,
        /// GitHub issue URL.
        issue_url: String,
        /// Key of the created ticket.
        ticket_key: String,
    },

    /// Issue was not migrated on purpose (e.g. dry run).
    Skipped {
        /// GitHub issue number.
        issue_number: u64,
        /// GitHub issue URL.
        issue_url: String,
        /// Reason for skipping.
        reason: String,
    },

    /// Migration failed; the source issue is left open.
    Failed {
        /// GitHub issue number.
        issue_number: u64,
        /// GitHub issue URL.
        issue_url: String,
        /// Step that failed.
        stage: FailureStage,
        /// Ticket created before the failure, if any. It is not rolled back.
        ticket_key: Option<String>,
        /// Error message.
        error: String,
    },
}

impl MigrationResult {
    /// GitHub issue number this result refers to.
    #[must_use]
    pub fn issue_number(&self) -> u64 {
        match self {
            Self::Migrated { issue_number, .. }
            | Self::Skipped { issue_number, .. }
            | Self::Failed { issue_number, .. } => *issue_number,
        }
    }

    /// GitHub issue URL this result refers to.
    #[must_use]
    pub fn issue_url(&self) -> &str {
        match self {
            Self::Migrated { issue_url, .. }
            | Self::Skipped { issue_url, .. }
            | Self::Failed { issue_url, .. } => issue_url,
        }
    }

    /// Returns true for [`MigrationResult::Failed`].
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
