mod renderer;
mod roster_service;

pub use renderer::{render_roster_html, TemplateError};
pub use roster_service::RosterService;
