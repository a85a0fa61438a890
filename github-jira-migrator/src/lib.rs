#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod github;
pub mod jira;
pub mod rate_limit;
pub mod runner;
pub mod summary;
pub mod templates;

pub use config::{ConfigError, MigratorConfig};
pub use github::{GitHubError, GitHubIssues, IssueSource, IssueState, SourceIssue};
pub use jira::{
    AdfDocument, JiraClient, JiraError, JiraSettings, TicketPayload, TicketReference, TicketSink,
};
pub use rate_limit::{check_core_rate_limit, ensure_core_rate_limit, wait_if_needed, RateLimitInfo};
pub use runner::{
    build_description, build_payload, select_issues, MigrationError, Runner, RunnerConfig,
    RunnerError,
};
pub use summary::{FailureStage, MigrationResult, RunSummary};
pub use templates::{TemplateError, TemplateRenderer};
