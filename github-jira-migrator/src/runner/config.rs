//! Runner configuration.

use crate::config::MigratorConfig;
use crate::jira::JiraSettings;
use crate::templates::DEFAULT_CLOSING_COMMENT;

/// Configuration for a migration run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Fixed Jira fields for every ticket.
    jira: JiraSettings,
    /// Handlebars template for the closing comment.
    closing_comment_template: String,
    /// Only migrate issues whose title starts with this prefix.
    title_prefix: Option<String>,
    /// Maximum number of issues to process.
    limit: Option<usize>,
    /// Whether to preview tickets without writing to either system.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a configuration with the default closing comment.
    pub fn new(jira: JiraSettings) -> Self {
        Self {
            jira,
            closing_comment_template: DEFAULT_CLOSING_COMMENT.to_string(),
            title_prefix: None,
            limit: None,
            dry_run: false,
        }
    }

    /// Builds a runner configuration from the loaded migrator settings.
    pub fn from_migrator_config(config: &MigratorConfig) -> Self {
        let mut runner_config = Self::new(config.jira_settings());
        if let Some(template) = &config.closing_comment_template {
            runner_config = runner_config.with_closing_comment_template(template.clone());
        }
        if let Some(prefix) = &config.github_title_prefix {
            runner_config = runner_config.with_title_prefix(prefix.clone());
        }
        runner_config
    }

    /// Sets a custom closing comment template.
    pub fn with_closing_comment_template(mut self, template: String) -> Self {
        self.closing_comment_template = template;
        self
    }

    /// Restricts the run to issues whose title starts with `prefix`.
    pub fn with_title_prefix(mut self, prefix: String) -> Self {
        self.title_prefix = Some(prefix);
        self
    }

    /// Caps the number of issues processed.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the fixed Jira fields.
    pub fn jira(&self) -> &JiraSettings {
        &self.jira
    }

    /// Returns the closing comment template.
    pub fn closing_comment_template(&self) -> &str {
        &self.closing_comment_template
    }

    /// Returns the title prefix filter.
    pub fn title_prefix(&self) -> Option<&str> {
        self.title_prefix.as_deref()
    }

    /// Returns the issue limit.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
