use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RemoteStore, StoreError, UserFilter};
use crate::features::registrations::models::UserRecord;

/// Process-local `users` table.
///
/// Email and contact uniqueness is checked under the write lock, so it holds
/// under concurrent inserts the same way a unique index would.
#[derive(Default)]
pub struct InMemoryRemoteStore {
    records: RwLock<Vec<UserRecord>>,
}

impl InMemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

fn conflicting_column(existing: &[UserRecord], candidate: &UserRecord) -> Option<&'static str> {
    existing.iter().find_map(|record| {
        if record.email == candidate.email {
            Some("email")
        } else if record.contact == candidate.contact {
            Some("contact")
        } else {
            None
        }
    })
}

#[async_trait]
impl RemoteStore for InMemoryRemoteStore {
    async fn select(&self, filter: &UserFilter) -> Result<Vec<UserRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }

    async fn insert(&self, records: &[UserRecord]) -> Result<Vec<UserRecord>, StoreError> {
        let mut table = self.records.write().await;

        // Validate the whole batch first so a rejected insert writes nothing
        for (index, candidate) in records.iter().enumerate() {
            let column = conflicting_column(&table, candidate)
                .or_else(|| conflicting_column(&records[..index], candidate));
            if let Some(column) = column {
                return Err(StoreError::UniqueViolation {
                    column: Some(column.to_string()),
                });
            }
        }

        table.extend_from_slice(records);
        Ok(records.to_vec())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
