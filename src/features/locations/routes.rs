use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Create routes for the locations feature
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/api/locations/regions", get(handlers::list_regions))
        .route("/api/locations/provinces", get(handlers::list_provinces))
        .route("/api/locations/cities", get(handlers::list_cities))
        .route("/api/locations/barangays", get(handlers::list_barangays))
        .route("/api/locations/status", get(handlers::get_status))
        .with_state(service)
}
