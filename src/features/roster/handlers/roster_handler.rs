use std::sync::Arc;

use axum::{extract::State, response::Html, Json};

use crate::core::error::{AppError, Result};
use crate::features::roster::dtos::RosterResponseDto;
use crate::features::roster::services::{render_roster_html, RosterService};
use crate::shared::types::{ApiResponse, Meta};

/// List registered users as summary cards
///
/// A store failure is reported in the body (`status = "error"`), not as an
/// error response.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Roster cards or placeholder", body = ApiResponse<RosterResponseDto>)
    ),
    tag = "roster"
)]
pub async fn list_users(
    State(service): State<Arc<RosterService>>,
) -> Result<Json<ApiResponse<RosterResponseDto>>> {
    let roster: RosterResponseDto = service.load().await.into();
    let meta = Meta::counting(roster.cards.len());

    Ok(Json(ApiResponse::success(Some(roster), None, Some(meta))))
}

/// Roster as an HTML fragment
#[utoipa::path(
    get,
    path = "/roster",
    responses(
        (status = 200, description = "User cards or placeholder", content_type = "text/html", body = String)
    ),
    tag = "roster"
)]
pub async fn roster_html(State(service): State<Arc<RosterService>>) -> Result<Html<String>> {
    let view = service.load().await;
    let html = render_roster_html(&view).map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Html(html))
}
