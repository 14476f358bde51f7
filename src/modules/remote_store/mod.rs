//! Remote store for registered users
//!
//! The `users` table lives in an external datastore. `RemoteStore` is the
//! table-style seam the registration and roster features talk to:
//! - `PgRemoteStore`: Postgres via sqlx, uniqueness enforced by constraints
//! - `RestRemoteStore`: PostgREST-compatible hosted backend over HTTP
//! - `InMemoryRemoteStore`: process-local table for development and tests

mod memory;
mod postgres;
mod rest;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::registrations::models::UserRecord;

pub use memory::InMemoryRemoteStore;
pub use postgres::PgRemoteStore;
pub use rest::RestRemoteStore;

/// Row filter for `select`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFilter {
    All,
    /// `email = .. OR contact = ..`, exact and case-sensitive
    EmailOrContact { email: String, contact: String },
}

impl UserFilter {
    pub fn matches(&self, record: &UserRecord) -> bool {
        match self {
            UserFilter::All => true,
            UserFilter::EmailOrContact { email, contact } => {
                record.email == *email || record.contact == *contact
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Query(String),

    /// A unique constraint rejected the write; `column` names it when known
    #[error("duplicate value violates unique constraint{}", .column.as_deref().map(|c| format!(" on {}", c)).unwrap_or_default())]
    UniqueViolation { column: Option<String> },
}

#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch all records matching `filter`, in insertion order
    async fn select(&self, filter: &UserFilter) -> Result<Vec<UserRecord>, StoreError>;

    /// Insert `records` atomically and return them as stored
    async fn insert(&self, records: &[UserRecord]) -> Result<Vec<UserRecord>, StoreError>;

    fn backend(&self) -> &'static str;
}

/// Maps a constraint or key description to the identity column it guards
pub(crate) fn unique_column_from(text: &str) -> Option<String> {
    const COLUMNS: [&str; 2] = ["email", "contact"];

    // Detail text: `Key (contact)=(..) already exists.`; values may mention any column
    if let Some(rest) = text.split_once("Key (").map(|(_, rest)| rest) {
        let key = rest.split_once(")=").map_or(rest, |(key, _)| key);
        return COLUMNS
            .into_iter()
            .find(|column| key == *column)
            .map(str::to_string);
    }

    // Constraint name, bare or quoted in the message: `users_contact_key`
    COLUMNS
        .into_iter()
        .find(|column| text.contains(&format!("_{}_key", column)))
        .map(str::to_string)
}
