use axum::{routing::post, Router};

use crate::features::validation::handlers;

/// Create routes for the validation feature
pub fn routes() -> Router {
    Router::new().route("/api/validation/fields", post(handlers::check_fields))
}
