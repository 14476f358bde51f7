use axum::Json;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::validation::dtos::{FieldChecksResponseDto, ValidateFieldsDto};
use crate::features::validation::models::{check_contact, check_email, check_password};
use crate::shared::types::ApiResponse;

/// Check email, contact number and password as typed
///
/// Advisory only. Each field present in the request gets a status and the
/// message a form would show next to it.
#[utoipa::path(
    post,
    path = "/api/validation/fields",
    request_body = ValidateFieldsDto,
    responses(
        (status = 200, description = "Per-field check results", body = ApiResponse<FieldChecksResponseDto>),
        (status = 400, description = "Invalid request body")
    ),
    tag = "validation"
)]
pub async fn check_fields(
    AppJson(dto): AppJson<ValidateFieldsDto>,
) -> Result<Json<ApiResponse<FieldChecksResponseDto>>> {
    let response = FieldChecksResponseDto {
        email: dto.email.as_deref().map(|v| check_email(v).into()),
        contact: dto.contact.as_deref().map(|v| check_contact(v).into()),
        password: dto.password.as_deref().map(|v| check_password(v).into()),
    };

    Ok(Json(ApiResponse::success(Some(response), None, None)))
}
