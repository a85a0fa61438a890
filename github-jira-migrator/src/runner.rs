//! Orchestrates a GitHub to Jira migration run.
//!
//! A run lists open then closed issues, and for each issue in turn creates
//! a ticket, comments on the issue with a link to the ticket and closes it.
//! Issues are processed one at a time; a failure on one issue is recorded
//! and the run moves on to the next.

mod config;
mod error;
mod transform;

pub use config::RunnerConfig;
pub use error::{MigrationError, RunnerError};
pub use transform::{build_description, build_payload, select_issues};

use crate::config::MigratorConfig;
use crate::github::{GitHubIssues, IssueSource, IssueState, SourceIssue};
use crate::jira::{JiraClient, TicketReference, TicketSink};
use crate::summary::{FailureStage, MigrationResult, RunSummary};
use crate::templates::{CommentContext, TemplateRenderer};
use tracing::{error, info, info_span, Instrument};

/// Runs a migration from an [`IssueSource`] into a [`TicketSink`].
pub struct Runner<S, T> {
    config: RunnerConfig,
    source: S,
    sink: T,
    renderer: TemplateRenderer,
}

impl Runner<GitHubIssues, JiraClient> {
    /// Builds a runner talking to the GitHub repository and Jira instance
    /// named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if either client cannot be built.
    pub fn connect(
        config: &MigratorConfig,
        runner_config: RunnerConfig,
    ) -> Result<Self, RunnerError> {
        let source = GitHubIssues::new(
            config.github_pan.clone(),
            config.github_owner.clone(),
            config.github_repo.clone(),
            config.label_filter(),
        )?
        .with_pagination(config.github_paginate);
        let sink = JiraClient::new(
            &config.jira_domain,
            config.jira_username.clone(),
            config.jira_token.clone(),
        )?;

        Ok(Self::new(runner_config, source, sink))
    }
}

impl<S: IssueSource, T: TicketSink> Runner<S, T> {
    /// Creates a runner over the given adapters.
    pub fn new(config: RunnerConfig, source: S, sink: T) -> Self {
        Self {
            config,
            source,
            sink,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Executes the full migration.
    ///
    /// Equivalent to [`Runner::fetch_issues`] followed by [`Runner::migrate`].
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Fetch`] if either listing call fails; no issue
    /// is processed in that case. Per-issue failures never abort the run and
    /// are reported in the returned [`RunSummary`].
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let issues = self.fetch_issues().await?;
        Ok(self.migrate(issues).await)
    }

    /// Lists open issues followed by closed issues, without deduplication.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Fetch`] naming the state whose listing failed.
    pub async fn fetch_issues(&self) -> Result<Vec<SourceIssue>, RunnerError> {
        let mut issues = Vec::new();
        for state in [IssueState::Open, IssueState::Closed] {
            let batch = self
                .source
                .list_issues(state)
                .await
                .map_err(|e| RunnerError::Fetch {
                    state: state.as_str(),
                    source: e,
                })?;
            issues.extend(batch);
        }
        info!(count = issues.len(), "Issues found");
        Ok(issues)
    }

    /// Migrates already fetched issues one at a time, in order.
    pub async fn migrate(&self, issues: Vec<SourceIssue>) -> RunSummary {
        let mut summary = RunSummary::new(self.config.dry_run());
        summary.issues_found = issues.len();

        let issues = select_issues(issues, self.config.title_prefix(), self.config.limit());
        if issues.len() != summary.issues_found {
            info!(count = issues.len(), "Issues selected");
        }

        for issue in &issues {
            let result = self.process_issue(issue).await;
            summary.record_result(result);
        }

        summary
    }

    async fn process_issue(&self, issue: &SourceIssue) -> MigrationResult {
        let span = info_span!(
            "migrate_issue",
            issue_number = issue.number,
            issue_url = %issue.html_url
        );

        async {
            let payload = build_payload(issue, self.config.jira());

            if self.config.dry_run() {
                info!(
                    summary = %payload.summary,
                    project = %payload.project.key,
                    "[DRY RUN] Would create ticket"
                );
                return MigrationResult::Skipped {
                    issue_number: issue.number,
                    issue_url: issue.html_url.clone(),
                    reason: "dry run".to_string(),
                };
            }

            let ticket = match self.sink.create_ticket(&payload).await {
                Ok(ticket) => ticket,
                Err(e) => {
                    error!(issue_url = %issue.html_url, error = %e, "Failed to create ticket");
                    return failed(issue, FailureStage::Submit, None, &MigrationError::from(e));
                }
            };

            match self.close_issue(issue, &ticket).await {
                Ok(()) => {
                    info!(ticket_key = %ticket.key, "Issue migrated");
                    MigrationResult::Migrated {
                        issue_number: issue.number,
                        issue_url: issue.html_url.clone(),
                        ticket_key: ticket.key,
                    }
                }
                Err(e) => {
                    error!(
                        issue_url = %issue.html_url,
                        ticket_key = %ticket.key,
                        error = %e,
                        "Failed to close migrated issue"
                    );
                    failed(issue, FailureStage::Close, Some(ticket.key), &e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Comments with a link to the ticket, then closes the issue.
    async fn close_issue(
        &self,
        issue: &SourceIssue,
        ticket: &TicketReference,
    ) -> Result<(), MigrationError> {
        let ticket_url = self.sink.browse_url(&ticket.key);
        let comment = self.renderer.render_closing_comment(
            self.config.closing_comment_template(),
            &CommentContext {
                ticket_key: &ticket.key,
                ticket_url: &ticket_url,
                issue_url: &issue.html_url,
                issue_number: issue.number,
            },
        )?;

        self.source.comment(issue.number, &comment).await?;
        self.source.close(issue.number).await?;
        Ok(())
    }
}

fn failed(
    issue: &SourceIssue,
    stage: FailureStage,
    ticket_key: Option<String>,
    error: &MigrationError,
) -> MigrationResult {
    MigrationResult::Failed {
        issue_number: issue.number,
        issue_url: issue.html_url.clone(),
        stage,
        ticket_key,
        error: error.to_string(),
    }
}
