//! Migrator configuration loading.
//!
//! The configuration is read once at startup from a local file and then
//! handed by reference to the adapters and the runner. Nothing here checks
//! that credentials or identifiers are actually present; a missing value
//! surfaces later as a rejected GitHub or Jira call.

mod error;

pub use error::ConfigError;

use crate::jira::JiraSettings;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Issue type used when the configuration does not name one.
pub const DEFAULT_ISSUE_TYPE: &str = "10172";

/// Environment variable consulted when `github_pan` is empty.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable consulted when `jira_token` is empty.
pub const JIRA_TOKEN_ENV: &str = "JIRA_TOKEN";

/// Settings for a migration run, as read from `config.json` (or a TOML file).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MigratorConfig {
    /// Owner (user or organization) of the source repository.
    pub github_owner: String,

    /// Name of the source repository.
    pub github_repo: String,

    /// Comma-separated label filter, e.g. `"bug,ui"`.
    pub github_labels_filter: String,

    /// GitHub personal access token.
    pub github_pan: String,

    /// Jira host, e.g. `"acme.atlassian.net"`.
    pub jira_domain: String,

    /// Jira account e-mail used for basic auth.
    pub jira_username: String,

    /// Jira API token used for basic auth.
    pub jira_token: String,

    /// Key of the destination Jira project.
    pub jira_project: String,

    /// Account id new tickets are assigned to.
    pub jira_userid: String,

    /// Issue type id for new tickets.
    pub jira_issue_type: String,

    /// Only migrate issues whose title starts with this prefix.
    pub github_title_prefix: Option<String>,

    /// Follow every page of the issue listing instead of only the first.
    pub github_paginate: bool,

    /// Handlebars template for the comment left on the closed GitHub issue.
    pub closing_comment_template: Option<String>,
}

impl Default for MigratorConfig {
    fn default() -> Self {
        Self {
            github_owner: String::new(),
            github_repo: String::new(),
            github_labels_filter: String::new(),
            github_pan: String::new(),
            jira_domain: String::new(),
            jira_username: String::new(),
            jira_token: String::new(),
            jira_project: String::new(),
            jira_userid: String::new(),
            jira_issue_type: DEFAULT_ISSUE_TYPE.to_string(),
            github_title_prefix: None,
            github_paginate: true,
            closing_comment_template: None,
        }
    }
}

impl MigratorConfig {
    /// Loads the configuration from `path`.
    ///
    /// Files ending in `.json` are parsed as JSON; anything else is parsed
    /// as TOML. Absent fields fall back to their defaults. Empty tokens are
    /// filled from [`GITHUB_TOKEN_ENV`] and [`JIRA_TOKEN_ENV`] when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable or malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading configuration");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let mut config = Self::parse(path, &content)?;
        config.apply_env_fallbacks();
        Ok(config)
    }

    /// Parses configuration content, picking the format from the file extension.
    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(content).map_err(|e| ConfigError::JsonError {
                path: path.display().to_string(),
                source: e,
            })
        } else {
            toml::from_str(content).map_err(|e| ConfigError::TomlError {
                path: path.display().to_string(),
                source: e,
            })
        }
    }

    fn apply_env_fallbacks(&mut self) {
        if self.github_pan.is_empty() {
            if let Ok(token) = std::env::var(GITHUB_TOKEN_ENV) {
                debug!("Using GitHub token from {GITHUB_TOKEN_ENV}");
                self.github_pan = token;
            }
        }
        if self.jira_token.is_empty() {
            if let Ok(token) = std::env::var(JIRA_TOKEN_ENV) {
                debug!("Using Jira token from {JIRA_TOKEN_ENV}");
                self.jira_token = token;
            }
        }
    }

    /// Splits the label filter into individual labels.
    #[must_use]
    pub fn label_filter(&self) -> Vec<String> {
        self.github_labels_filter
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Jira fields that are fixed for every ticket in a run.
    #[must_use]
    pub fn jira_settings(&self) -> JiraSettings {
        JiraSettings {
            project_key: self.jira_project.clone(),
            issue_type_id: self.jira_issue_type.clone(),
            assignee_account_id: self.jira_userid.clone(),
        }
    }
}
