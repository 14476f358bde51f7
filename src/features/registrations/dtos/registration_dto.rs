use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::locations::models::SelectionState;
use crate::features::registrations::models::UserRecord;
use crate::features::roster::dtos::RosterResponseDto;

/// Personal fields of the registration form
///
/// Email, contact number and password formats are advisory and not enforced
/// here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PersonalDetailsDto {
    #[validate(length(min = 1, max = 128, message = "Name is required (max 128 characters)"))]
    pub name: String,

    #[validate(length(min = 1, max = 128, message = "Course is required (max 128 characters)"))]
    pub course: String,

    #[validate(length(min = 1, max = 32, message = "Year is required (max 32 characters)"))]
    pub year: String,

    #[validate(length(min = 1, max = 32, message = "Gender is required (max 32 characters)"))]
    pub gender: String,

    #[validate(length(min = 1, max = 254, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, max = 32, message = "Contact number is required"))]
    pub contact: String,

    #[validate(length(min = 1, max = 256, message = "Password is required"))]
    pub password: String,
}

/// Full registration in one request, location given by name
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserDto {
    #[serde(flatten)]
    #[validate(nested)]
    pub personal: PersonalDetailsDto,

    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub barangay: String,
}

impl RegisterUserDto {
    pub fn into_parts(self) -> (SelectionState, PersonalDetailsDto) {
        let selection =
            SelectionState::complete(self.region, self.province, self.city, self.barangay);
        (selection, self.personal)
    }
}

/// A stored user, password left out
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisteredUserDto {
    pub name: String,
    pub course: String,
    pub year: String,
    pub gender: String,
    pub region: String,
    pub province: String,
    pub city: String,
    pub barangay: String,
    pub country: String,
    pub email: String,
    pub contact: String,
}

impl From<UserRecord> for RegisteredUserDto {
    fn from(record: UserRecord) -> Self {
        Self {
            name: record.name,
            course: record.course,
            year: record.year,
            gender: record.gender,
            region: record.region,
            province: record.province,
            city: record.city,
            barangay: record.barangay,
            country: record.country,
            email: record.email,
            contact: record.contact,
        }
    }
}

/// Where the client should go next, and after how long
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedirectDto {
    pub url: String,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponseDto {
    pub user: RegisteredUserDto,
    pub redirect: RedirectDto,
    /// Roster as it reads right after the insert
    pub roster: RosterResponseDto,
}
