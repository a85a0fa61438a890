//! Template renderer.

use handlebars::{no_escape, Handlebars};
use serde::Serialize;

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (comments are markdown)
/// - Strict mode (catches misspelled variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Variables available to the closing comment template.
#[derive(Debug, Clone, Serialize)]
pub struct CommentContext<'a> {
    /// Key of the created ticket, e.g. `PROJ-1`.
    pub ticket_key: &'a str,
    /// Web URL of the created ticket.
    pub ticket_url: &'a str,
    /// URL of the GitHub issue being closed.
    pub issue_url: &'a str,
    /// Number of the GitHub issue being closed.
    pub issue_number: u64,
}

/// Renders the comment posted on a migrated issue.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders `template` with the given ticket and issue data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is malformed or references an
    /// unknown variable.
    pub fn render_closing_comment(
        &self,
        template: &str,
        context: &CommentContext<'_>,
    ) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{TemplateError, DEFAULT_CLOSING_COMMENT};

    fn context() -> CommentContext<'static> {
        CommentContext {
            ticket_key: "PROJ-1",
            ticket_url: "https://acme.atlassian.net/browse/PROJ-1",
            issue_url: "https://github.com/o/r/issues/5",
            issue_number: 5,
        }
    }

    #[test]
    fn default_comment_links_ticket() {
        let renderer = TemplateRenderer::new();
        let comment = renderer
            .render_closing_comment(DEFAULT_CLOSING_COMMENT, &context())
            .unwrap();

        assert_eq!(
            comment,
            "Migrated to Jira: https://acme.atlassian.net/browse/PROJ-1"
        );
    }

    #[test]
    fn custom_comment_uses_all_variables() {
        let renderer = TemplateRenderer::new();
        let comment = renderer
            .render_closing_comment(
                "#{{issue_number}} moved to [{{ticket_key}}]({{ticket_url}}) from {{issue_url}}",
                &context(),
            )
            .unwrap();

        assert_eq!(
            comment,
            "#5 moved to [PROJ-1](https://acme.atlassian.net/browse/PROJ-1) from https://github.com/o/r/issues/5"
        );
    }

    #[test]
    fn unknown_variable_fails_in_strict_mode() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render_closing_comment("{{ticket_id}}", &context());

        assert!(matches!(result, Err(TemplateError::RenderError(_))));
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = TemplateRenderer::new();
        let comment = renderer
            .render_closing_comment("<b>{{ticket_key}}</b> & done", &context())
            .unwrap();

        assert_eq!(comment, "<b>PROJ-1</b> & done");
    }
}
