//! Closing comment rendering using Handlebars.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, CommentContext, TemplateRenderer};

/// Closing comment used when the configuration does not provide one.
pub const DEFAULT_CLOSING_COMMENT: &str = "Migrated to Jira: {{ticket_url}}";
