use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::registrations::dtos::{RegisterUserDto, RegistrationResponseDto};
use crate::features::registrations::services::{RegistrationService, REGISTERED_MESSAGE};
use crate::shared::types::ApiResponse;

/// Register a new user
///
/// Location is given by exact names and must form a valid chain. Email and
/// contact number must not be registered yet.
#[utoipa::path(
    post,
    path = "/api/registrations",
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered successfully", body = ApiResponse<RegistrationResponseDto>),
        (status = 400, description = "Missing field or invalid location"),
        (status = 409, description = "Email or contact number already registered"),
        (status = 502, description = "Remote store failure")
    ),
    tag = "registrations"
)]
pub async fn register_user(
    State(service): State<Arc<RegistrationService>>,
    AppJson(dto): AppJson<RegisterUserDto>,
) -> Result<(StatusCode, Json<ApiResponse<RegistrationResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = service.register(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(result),
            Some(REGISTERED_MESSAGE.to_string()),
            None,
        )),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RegistrationConfig;
    use crate::features::registrations::routes::routes;
    use crate::features::roster::RosterService;
    use crate::modules::local_state::LocalStateStore;
    use crate::modules::remote_store::{InMemoryRemoteStore, RemoteStore};
    use crate::shared::test_helpers::{fake_personal_details, sample_directory, temp_state_path};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let store: Arc<dyn RemoteStore> = Arc::new(InMemoryRemoteStore::new());
        let service = RegistrationService::new(
            Arc::new(sample_directory()),
            store.clone(),
            Arc::new(LocalStateStore::new(temp_state_path())),
            Arc::new(RosterService::new(store)),
            RegistrationConfig::default(),
            "loggedInUser",
        );
        TestServer::new(routes(Arc::new(service))).unwrap()
    }

    fn body_for(email: &str, contact: &str) -> Value {
        let personal = fake_personal_details();
        json!({
            "name": personal.name,
            "course": personal.course,
            "year": personal.year,
            "gender": personal.gender,
            "email": email,
            "contact": contact,
            "password": personal.password,
            "region": "REGION VII (CENTRAL VISAYAS)",
            "province": "CEBU",
            "city": "MANDAUE CITY",
            "barangay": "BANILAD"
        })
    }

    #[tokio::test]
    async fn test_register_created() {
        let server = server();
        let response = server
            .post("/api/registrations")
            .json(&body_for("maria@example.com", "09181234567"))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(body["data"]["user"]["city"], "MANDAUE CITY");
        assert!(body["data"]["user"].get("password").is_none());
        assert_eq!(body["data"]["redirect"]["url"], "login.html");
        assert_eq!(body["data"]["redirect"]["delayMs"], 1500);
        assert_eq!(body["data"]["roster"]["cards"][0]["email"], "maria@example.com");
    }

    #[tokio::test]
    async fn test_register_duplicate_contact_conflict() {
        let server = server();
        server
            .post("/api/registrations")
            .json(&body_for("first@example.com", "09181234567"))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post("/api/registrations")
            .json(&body_for("second@example.com", "09181234567"))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "This contact number is already registered! Please use a different one."
        );
    }

    #[tokio::test]
    async fn test_register_invalid_barangay() {
        let server = server();
        let mut body = body_for("x@example.com", "09181234567");
        body["barangay"] = json!("LAHUG"); // exists, but in Cebu City

        let response = server.post("/api/registrations").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid barangay");
    }

    #[tokio::test]
    async fn test_register_missing_name() {
        let server = server();
        let mut body = body_for("x@example.com", "09181234567");
        body["name"] = json!("");

        let response = server.post("/api/registrations").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
