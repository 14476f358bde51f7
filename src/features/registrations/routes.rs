use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::registrations::handlers;
use crate::features::registrations::services::RegistrationService;

/// Create routes for the registrations feature
pub fn routes(service: Arc<RegistrationService>) -> Router {
    Router::new()
        .route("/api/registrations", post(handlers::register_user))
        .with_state(service)
}
