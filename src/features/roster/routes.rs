use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::roster::handlers;
use crate::features::roster::services::RosterService;

/// Create routes for the roster feature
pub fn routes(service: Arc<RosterService>) -> Router {
    Router::new()
        .route("/api/users", get(handlers::list_users))
        .route("/roster", get(handlers::roster_html))
        .with_state(service)
}
