//! Issue selection and ticket payload construction.

use crate::github::SourceIssue;
use crate::jira::{JiraSettings, TicketPayload};

/// Builds the ticket description: the issue body, a blank line, then the issue URL.
///
/// An empty body is not special-cased.
#[must_use]
pub fn build_description(body: &str, html_url: &str) -> String {
    format!("{body}\n\n{html_url}")
}

/// Builds the ticket payload for `issue`.
///
/// The title is used verbatim as the summary; Jira enforces its own length limit.
#[must_use]
pub fn build_payload(issue: &SourceIssue, settings: &JiraSettings) -> TicketPayload {
    TicketPayload::new(
        issue.title.clone(),
        build_description(&issue.body, &issue.html_url),
        settings,
    )
}

/// Applies the optional title prefix filter and issue limit, preserving order.
#[must_use]
pub fn select_issues(
    issues: Vec<SourceIssue>,
    title_prefix: Option<&str>,
    limit: Option<usize>,
) -> Vec<SourceIssue> {
    issues
        .into_iter()
        .filter(|issue| title_prefix.map_or(true, |prefix| issue.title.starts_with(prefix)))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::IssueState;

    fn issue(number: u64, title: &str, body: &str) -> SourceIssue {
        SourceIssue {
            number,
            title: title.to_string(),
            body: body.to_string(),
            html_url: format!("https://x/{number}"),
            state: IssueState::Open,
            labels: vec!["bug".to_string()],
        }
    }

    fn settings() -> JiraSettings {
        JiraSettings {
            project_key: "PROJ".to_string(),
            issue_type_id: "10172".to_string(),
            assignee_account_id: "acc1".to_string(),
        }
    }

    #[test]
    fn description_appends_url_after_blank_line() {
        assert_eq!(
            build_description("desc", "https://x/5"),
            "desc\n\nhttps://x/5"
        );
    }

    #[test]
    fn empty_body_keeps_separator() {
        assert_eq!(build_description("", "https://x/5"), "\n\nhttps://x/5");
    }

    #[test]
    fn payload_uses_title_and_settings() {
        let payload = build_payload(&issue(5, "Bug X", "desc"), &settings());

        assert_eq!(payload.summary, "Bug X");
        assert_eq!(payload.description.text(), "desc\n\nhttps://x/5");
        assert_eq!(payload.project.key, "PROJ");
        assert_eq!(payload.issuetype.id, "10172");
        assert_eq!(payload.assignee.account_id, "acc1");
    }

    #[test]
    fn long_titles_are_not_truncated() {
        let title = "x".repeat(400);
        let payload = build_payload(&issue(1, &title, ""), &settings());

        assert_eq!(payload.summary.len(), 400);
    }

    #[test]
    fn select_filters_by_prefix_and_limits() {
        let issues = vec![
            issue(1, "[UI] button", ""),
            issue(2, "crash", ""),
            issue(3, "[UI] menu", ""),
            issue(4, "[UI] theme", ""),
        ];

        let selected = select_issues(issues, Some("[UI]"), Some(2));
        let numbers: Vec<u64> = selected.iter().map(|issue| issue.number).collect();

        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn select_without_filters_keeps_everything() {
        let issues = vec![issue(1, "a", ""), issue(2, "b", "")];
        assert_eq!(select_issues(issues, None, None).len(), 2);
    }
}
