use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::forms::handlers;
use crate::features::forms::services::FormService;

/// Create routes for the forms feature
pub fn routes(service: Arc<FormService>) -> Router {
    Router::new()
        .route("/api/forms", post(handlers::create_form))
        .route(
            "/api/forms/{id}",
            get(handlers::get_form).delete(handlers::delete_form),
        )
        .route("/api/forms/{id}/selection", put(handlers::update_selection))
        .route("/api/forms/{id}/submit", post(handlers::submit_form))
        .with_state(service)
}
