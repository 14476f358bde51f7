use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::forms::models::FormSession;
use crate::features::locations::dtos::GeoUnitResponseDto;
use crate::features::locations::models::{GeoLevel, SelectionState};

/// Choose or type a value for one location field
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SelectionUpdateDto {
    pub level: GeoLevel,
    /// Exact name; `null` or empty clears the field
    pub value: Option<String>,
}

/// Options currently offered at each level
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormOptionsDto {
    pub regions: Vec<GeoUnitResponseDto>,
    pub provinces: Vec<GeoUnitResponseDto>,
    pub cities: Vec<GeoUnitResponseDto>,
    pub barangays: Vec<GeoUnitResponseDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormStateDto {
    pub id: Uuid,
    pub selection: SelectionState,
    pub options: FormOptionsDto,
    /// A submission for this form is running
    pub submitting: bool,
    pub created_at: DateTime<Utc>,
}

impl FormStateDto {
    pub fn from_session(session: &FormSession, submitting: bool) -> Self {
        let options = |level: GeoLevel| -> Vec<GeoUnitResponseDto> {
            session
                .cascade
                .options(level)
                .iter()
                .map(GeoUnitResponseDto::from)
                .collect()
        };

        Self {
            id: session.id,
            selection: session.cascade.selection().clone(),
            options: FormOptionsDto {
                regions: options(GeoLevel::Region),
                provinces: options(GeoLevel::Province),
                cities: options(GeoLevel::City),
                barangays: options(GeoLevel::Barangay),
            },
            submitting,
            created_at: session.created_at,
        }
    }
}
