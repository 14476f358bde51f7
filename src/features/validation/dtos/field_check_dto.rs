use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::validation::models::FieldCheck;

/// Fields to check; omitted fields are not checked
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ValidateFieldsDto {
    pub email: Option<String>,
    pub contact: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    Empty,
    Invalid,
    Valid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldCheckDto {
    pub status: FieldStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<FieldCheck> for FieldCheckDto {
    fn from(check: FieldCheck) -> Self {
        let status = match check {
            FieldCheck::Empty => FieldStatus::Empty,
            FieldCheck::Invalid(_) => FieldStatus::Invalid,
            FieldCheck::Valid(_) => FieldStatus::Valid,
        };
        Self {
            status,
            message: check.message().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FieldChecksResponseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<FieldCheckDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<FieldCheckDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<FieldCheckDto>,
}
