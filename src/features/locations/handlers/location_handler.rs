use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::{
    BarangaysQuery, CitiesQuery, DirectoryStatusDto, GeoUnitResponseDto, ProvincesQuery,
};
use crate::features::locations::models::GeoUnit;
use crate::features::locations::services::LocationService;
use crate::shared::types::ApiResponse;

fn required(value: Option<String>, name: &str) -> Result<String> {
    value.ok_or_else(|| AppError::BadRequest(format!("Query parameter '{}' is required", name)))
}

fn options_response(units: Vec<GeoUnit>) -> Json<ApiResponse<Vec<GeoUnitResponseDto>>> {
    let dtos: Vec<GeoUnitResponseDto> = units.into_iter().map(Into::into).collect();
    Json(ApiResponse::listing(dtos))
}

/// List all regions in table order
#[utoipa::path(
    get,
    path = "/api/locations/regions",
    responses(
        (status = 200, description = "List of regions", body = ApiResponse<Vec<GeoUnitResponseDto>>)
    ),
    tag = "locations"
)]
pub async fn list_regions(
    State(service): State<Arc<LocationService>>,
) -> Result<Json<ApiResponse<Vec<GeoUnitResponseDto>>>> {
    Ok(options_response(service.list_regions()))
}

/// List provinces of a region
#[utoipa::path(
    get,
    path = "/api/locations/provinces",
    params(ProvincesQuery),
    responses(
        (status = 200, description = "Provinces of the region, empty when the region is unknown", body = ApiResponse<Vec<GeoUnitResponseDto>>),
        (status = 400, description = "Missing region parameter")
    ),
    tag = "locations"
)]
pub async fn list_provinces(
    State(service): State<Arc<LocationService>>,
    Query(query): Query<ProvincesQuery>,
) -> Result<Json<ApiResponse<Vec<GeoUnitResponseDto>>>> {
    let region = required(query.region, "region")?;
    Ok(options_response(service.provinces_of(&region)))
}

/// List cities and municipalities of a province
#[utoipa::path(
    get,
    path = "/api/locations/cities",
    params(CitiesQuery),
    responses(
        (status = 200, description = "Cities of the province, empty when the province is unknown", body = ApiResponse<Vec<GeoUnitResponseDto>>),
        (status = 400, description = "Missing province parameter")
    ),
    tag = "locations"
)]
pub async fn list_cities(
    State(service): State<Arc<LocationService>>,
    Query(query): Query<CitiesQuery>,
) -> Result<Json<ApiResponse<Vec<GeoUnitResponseDto>>>> {
    let province = required(query.province, "province")?;
    Ok(options_response(service.cities_of(&province)))
}

/// List barangays of a city
#[utoipa::path(
    get,
    path = "/api/locations/barangays",
    params(BarangaysQuery),
    responses(
        (status = 200, description = "Barangays of the city, empty when the city is unknown", body = ApiResponse<Vec<GeoUnitResponseDto>>),
        (status = 400, description = "Missing city parameter")
    ),
    tag = "locations"
)]
pub async fn list_barangays(
    State(service): State<Arc<LocationService>>,
    Query(query): Query<BarangaysQuery>,
) -> Result<Json<ApiResponse<Vec<GeoUnitResponseDto>>>> {
    let city = required(query.city, "city")?;
    Ok(options_response(service.barangays_of(&city)))
}

/// Reference data load report
#[utoipa::path(
    get,
    path = "/api/locations/status",
    responses(
        (status = 200, description = "Load outcome and table sizes", body = ApiResponse<DirectoryStatusDto>)
    ),
    tag = "locations"
)]
pub async fn get_status(
    State(service): State<Arc<LocationService>>,
) -> Result<Json<ApiResponse<DirectoryStatusDto>>> {
    Ok(Json(ApiResponse::success(
        Some(service.status().into()),
        None,
        None,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::locations::models::GeoDirectory;
    use crate::features::locations::routes::routes;
    use crate::shared::test_helpers::sample_directory;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server(directory: GeoDirectory, load_error: Option<String>) -> TestServer {
        let service = Arc::new(LocationService::new(Arc::new(directory), load_error));
        TestServer::new(routes(service)).unwrap()
    }

    fn names(body: &Value) -> Vec<String> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_list_regions() {
        let server = server(sample_directory(), None);
        let response = server.get("/api/locations/regions").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 3);
        assert_eq!(body["data"][0]["level"], "region");
    }

    #[tokio::test]
    async fn test_list_provinces_by_region_name() {
        let server = server(sample_directory(), None);
        let response = server
            .get("/api/locations/provinces")
            .add_query_param("region", "REGION VII (CENTRAL VISAYAS)")
            .await;

        response.assert_status_ok();
        assert_eq!(names(&response.json()), vec!["BOHOL", "CEBU"]);
    }

    #[tokio::test]
    async fn test_unknown_parent_is_empty_not_error() {
        let server = server(sample_directory(), None);
        let response = server
            .get("/api/locations/cities")
            .add_query_param("province", "NOWHERE")
            .await;

        response.assert_status_ok();
        assert!(names(&response.json()).is_empty());
    }

    #[tokio::test]
    async fn test_missing_parameter_is_bad_request() {
        let server = server(sample_directory(), None);
        let response = server.get("/api/locations/barangays").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_status_after_failed_load() {
        let server = server(GeoDirectory::empty(), Some("region.json unreachable".into()));
        let response = server.get("/api/locations/status").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["loaded"], false);
        assert_eq!(body["data"]["error"], "region.json unreachable");
        assert_eq!(body["data"]["regions"], 0);
    }
}
