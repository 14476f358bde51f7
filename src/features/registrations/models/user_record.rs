use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user as persisted in the `users` table.
///
/// The password is stored exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct UserRecord {
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
    pub password: String,
}
