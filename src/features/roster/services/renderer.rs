//! HTML rendering of the roster with minijinja.

use std::sync::OnceLock;

use minijinja::{context, AutoEscape, Environment};
use thiserror::Error;

use crate::features::roster::models::RosterView;

const ROSTER_TEMPLATE: &str = "roster/roster.html";

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    // Record fields are user input
    env.set_auto_escape_callback(|_| AutoEscape::Html);

    if let Err(e) = env.add_template(
        ROSTER_TEMPLATE,
        include_str!("../../../../templates/roster/roster.html"),
    ) {
        tracing::warn!("Failed to load template {}: {}", ROSTER_TEMPLATE, e);
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render the roster as an HTML fragment of user cards or a placeholder
pub fn render_roster_html(view: &RosterView) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(ROSTER_TEMPLATE)
        .map_err(|_| TemplateError::NotFound(ROSTER_TEMPLATE.to_string()))?;

    template
        .render(context! {
            cards => view.cards(),
            unavailable => matches!(view, RosterView::Unavailable),
            placeholder => view.placeholder(),
        })
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}
