use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::forms::dtos::{FormStateDto, SelectionUpdateDto};
use crate::features::forms::services::FormService;
use crate::features::registrations::dtos::{PersonalDetailsDto, RegistrationResponseDto};
use crate::features::registrations::services::REGISTERED_MESSAGE;
use crate::shared::types::ApiResponse;

/// Open a new registration form
#[utoipa::path(
    post,
    path = "/api/forms",
    responses(
        (status = 201, description = "Form created with region options", body = ApiResponse<FormStateDto>)
    ),
    tag = "forms"
)]
pub async fn create_form(
    State(service): State<Arc<FormService>>,
) -> Result<(StatusCode, Json<ApiResponse<FormStateDto>>)> {
    let state = service.create().await;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(state), None, None)),
    ))
}

/// Get a form's selection and option lists
#[utoipa::path(
    get,
    path = "/api/forms/{id}",
    params(
        ("id" = Uuid, Path, description = "Form ID")
    ),
    responses(
        (status = 200, description = "Form state", body = ApiResponse<FormStateDto>),
        (status = 404, description = "Form not found")
    ),
    tag = "forms"
)]
pub async fn get_form(
    State(service): State<Arc<FormService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FormStateDto>>> {
    let state = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Set one location field; fields below it are cleared
#[utoipa::path(
    put,
    path = "/api/forms/{id}/selection",
    params(
        ("id" = Uuid, Path, description = "Form ID")
    ),
    request_body = SelectionUpdateDto,
    responses(
        (status = 200, description = "Form state after the cascade", body = ApiResponse<FormStateDto>),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Form not found")
    ),
    tag = "forms"
)]
pub async fn update_selection(
    State(service): State<Arc<FormService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<SelectionUpdateDto>,
) -> Result<Json<ApiResponse<FormStateDto>>> {
    let state = service.select(id, dto.level, dto.value).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Submit the form
///
/// Uses the form's current location selection. On success the form is reset.
#[utoipa::path(
    post,
    path = "/api/forms/{id}/submit",
    params(
        ("id" = Uuid, Path, description = "Form ID")
    ),
    request_body = PersonalDetailsDto,
    responses(
        (status = 201, description = "User registered successfully", body = ApiResponse<RegistrationResponseDto>),
        (status = 400, description = "Missing field or invalid location"),
        (status = 404, description = "Form not found"),
        (status = 409, description = "Already registered, or a submission for this form is running"),
        (status = 502, description = "Remote store failure")
    ),
    tag = "forms"
)]
pub async fn submit_form(
    State(service): State<Arc<FormService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<PersonalDetailsDto>,
) -> Result<(StatusCode, Json<ApiResponse<RegistrationResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = service.submit(id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(result),
            Some(REGISTERED_MESSAGE.to_string()),
            None,
        )),
    ))
}

/// Discard a form
#[utoipa::path(
    delete,
    path = "/api/forms/{id}",
    params(
        ("id" = Uuid, Path, description = "Form ID")
    ),
    responses(
        (status = 200, description = "Form deleted"),
        (status = 404, description = "Form not found")
    ),
    tag = "forms"
)]
pub async fn delete_form(
    State(service): State<Arc<FormService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
