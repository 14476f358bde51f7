use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::locations::models::{GeoLevel, GeoUnit};
use crate::features::locations::services::DirectoryStatus;

/// Query parameters for the province listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ProvincesQuery {
    /// Exact region name
    #[param(example = "REGION VII (CENTRAL VISAYAS)")]
    pub region: Option<String>,
}

/// Query parameters for the city listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CitiesQuery {
    /// Exact province name
    #[param(example = "CEBU")]
    pub province: Option<String>,
}

/// Query parameters for the barangay listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct BarangaysQuery {
    /// Exact city or municipality name
    #[param(example = "CEBU CITY")]
    pub city: Option<String>,
}

/// One selectable location option
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeoUnitResponseDto {
    pub level: GeoLevel,
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
}

impl From<GeoUnit> for GeoUnitResponseDto {
    fn from(unit: GeoUnit) -> Self {
        Self {
            level: unit.level,
            name: unit.name,
            code: unit.code,
            parent_code: unit.parent_code,
        }
    }
}

impl From<&GeoUnit> for GeoUnitResponseDto {
    fn from(unit: &GeoUnit) -> Self {
        unit.clone().into()
    }
}

/// Reference data load report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStatusDto {
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub regions: usize,
    pub provinces: usize,
    pub cities: usize,
    pub barangays: usize,
    /// Units whose parent code matches no parent
    pub orphans: usize,
}

impl From<DirectoryStatus> for DirectoryStatusDto {
    fn from(status: DirectoryStatus) -> Self {
        Self {
            loaded: status.loaded,
            error: status.error,
            regions: status.counts.regions,
            provinces: status.counts.provinces,
            cities: status.counts.cities,
            barangays: status.counts.barangays,
            orphans: status.orphans,
        }
    }
}
