use std::sync::Arc;

use crate::features::roster::models::RosterView;
use crate::modules::remote_store::{RemoteStore, UserFilter};

/// Service for listing registered users
pub struct RosterService {
    store: Arc<dyn RemoteStore>,
}

impl RosterService {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self { store }
    }

    /// Fetch every record. A store failure becomes `RosterView::Unavailable`.
    pub async fn load(&self) -> RosterView {
        match self.store.select(&UserFilter::All).await {
            Ok(records) => {
                tracing::debug!("Roster loaded with {} users", records.len());
                RosterView::from_records(records)
            }
            Err(e) => {
                tracing::error!("Failed to load roster from {}: {}", self.store.backend(), e);
                RosterView::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::roster::models::{EMPTY_PLACEHOLDER, ERROR_PLACEHOLDER};
    use crate::modules::remote_store::InMemoryRemoteStore;
    use crate::shared::test_helpers::{sample_user, FailingRemoteStore};

    #[tokio::test]
    async fn test_load_cards_in_store_order() {
        let store = InMemoryRemoteStore::with_records(vec![
            sample_user("a@example.com", "09170000001"),
            sample_user("b@example.com", "09170000002"),
        ]);
        let view = RosterService::new(Arc::new(store)).load().await;

        let emails: Vec<_> = view.cards().iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails, vec!["a@example.com", "b@example.com"]);
        assert_eq!(view.placeholder(), None);
    }

    #[tokio::test]
    async fn test_load_empty() {
        let view = RosterService::new(Arc::new(InMemoryRemoteStore::new()))
            .load()
            .await;
        assert_eq!(view, RosterView::Empty);
        assert_eq!(view.placeholder(), Some(EMPTY_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_load_failure_is_placeholder_not_error() {
        let view = RosterService::new(Arc::new(FailingRemoteStore::default()))
            .load()
            .await;
        assert_eq!(view, RosterView::Unavailable);
        assert_eq!(view.placeholder(), Some(ERROR_PLACEHOLDER));
    }
}
