use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::shared::types::ApiResponse;

/// JSON body extractor whose rejections use the `ApiResponse` envelope.
///
/// A body that parses but does not fit the DTO (missing or mistyped field)
/// is a validation failure naming the field. Oversized bodies get 413.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(AppJsonRejection)
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        match self.0 {
            JsonRejection::JsonDataError(err) => AppError::Validation(err.body_text()),
            JsonRejection::JsonSyntaxError(err) => {
                AppError::BadRequest(format!("Invalid JSON syntax: {}", err.body_text()))
            }
            JsonRejection::MissingJsonContentType(_) => {
                AppError::BadRequest("Expected 'Content-Type: application/json'".to_string())
            }
            rejection if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                let body = ApiResponse::<()>::error(Some("Request body too large".to_string()), None);
                return (StatusCode::PAYLOAD_TOO_LARGE, Json(body)).into_response();
            }
            _ => AppError::BadRequest("Failed to read JSON body".to_string()),
        }
        .into_response()
    }
}
