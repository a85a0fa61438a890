use std::path::PathBuf;

use github_jira_migrator::config::{GITHUB_TOKEN_ENV, JIRA_TOKEN_ENV};
use github_jira_migrator::{MigratorConfig, RunnerConfig};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn load_json_fixture() {
    let config = temp_env::with_vars_unset([GITHUB_TOKEN_ENV, JIRA_TOKEN_ENV], || {
        MigratorConfig::load(&fixture("config.json")).unwrap()
    });

    assert_eq!(config.github_owner, "o");
    assert_eq!(config.github_repo, "r");
    assert_eq!(config.label_filter(), vec!["bug"]);
    assert_eq!(config.github_pan, "ghp_fixture");
    assert_eq!(config.jira_domain, "acme.atlassian.net");
    assert_eq!(config.jira_username, "me@acme.io");
    assert_eq!(config.jira_token, "fixture-token");
    assert_eq!(config.jira_project, "PROJ");
    assert_eq!(config.jira_userid, "acc1");
    assert_eq!(config.jira_issue_type, "10172");
}

#[test]
fn load_toml_fixture_with_optional_keys() {
    let config = MigratorConfig::load(&fixture("migrator.toml")).unwrap();

    assert_eq!(config.label_filter(), vec!["bug", "needs triage"]);
    assert_eq!(config.jira_issue_type, "10001");
    assert_eq!(config.github_title_prefix.as_deref(), Some("[UI]"));
    assert!(!config.github_paginate);

    let runner_config = RunnerConfig::from_migrator_config(&config);
    assert_eq!(runner_config.title_prefix(), Some("[UI]"));
    assert_eq!(
        runner_config.closing_comment_template(),
        "Tracked in {{ticket_key}}"
    );
    assert_eq!(runner_config.jira().issue_type_id, "10001");
}

#[test]
fn empty_tokens_fall_back_to_environment() {
    let config = temp_env::with_vars(
        [
            (GITHUB_TOKEN_ENV, Some("ghp_env")),
            (JIRA_TOKEN_ENV, Some("jira_env")),
        ],
        || MigratorConfig::load(&fixture("migrator.toml")).unwrap(),
    );

    assert_eq!(config.github_pan, "ghp_env");
    assert_eq!(config.jira_token, "jira_env");
}

#[test]
fn file_tokens_win_over_environment() {
    let config = temp_env::with_vars(
        [
            (GITHUB_TOKEN_ENV, Some("ghp_env")),
            (JIRA_TOKEN_ENV, Some("jira_env")),
        ],
        || MigratorConfig::load(&fixture("config.json")).unwrap(),
    );

    assert_eq!(config.github_pan, "ghp_fixture");
    assert_eq!(config.jira_token, "fixture-token");
}
