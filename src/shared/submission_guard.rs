use std::collections::HashSet;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};

/// At most one in-flight submission per key.
///
/// `try_acquire` hands out a ticket that holds the key until it is dropped.
pub struct SubmissionGuard<K: Eq + Hash> {
    in_flight: Arc<Mutex<HashSet<K>>>,
}

/// Held for the duration of one submission; releases its key on drop
#[must_use]
pub struct SubmissionTicket<K: Eq + Hash> {
    key: Option<K>,
    in_flight: Arc<Mutex<HashSet<K>>>,
}

fn lock<K>(set: &Mutex<HashSet<K>>) -> MutexGuard<'_, HashSet<K>> {
    // The set stays consistent even if a holder panicked
    set.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<K: Eq + Hash + Clone> SubmissionGuard<K> {
    pub fn new() -> Self {
        Self {
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// `None` when a submission for `key` is already running
    pub fn try_acquire(&self, key: K) -> Option<SubmissionTicket<K>> {
        let mut in_flight = lock(&self.in_flight);
        if !in_flight.insert(key.clone()) {
            return None;
        }

        Some(SubmissionTicket {
            key: Some(key),
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    pub fn is_in_flight(&self, key: &K) -> bool {
        lock(&self.in_flight).contains(key)
    }
}

impl<K: Eq + Hash + Clone> Default for SubmissionGuard<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> Drop for SubmissionTicket<K> {
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            lock(&self.in_flight).remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_rejected_until_release() {
        let guard = SubmissionGuard::new();

        let ticket = guard.try_acquire("form-1").unwrap();
        assert!(guard.try_acquire("form-1").is_none());
        assert!(guard.try_acquire("form-2").is_some());
        assert!(guard.is_in_flight(&"form-1"));

        drop(ticket);
        assert!(!guard.is_in_flight(&"form-1"));
        assert!(guard.try_acquire("form-1").is_some());
    }

    #[tokio::test]
    async fn test_ticket_released_when_task_fails() {
        let guard = Arc::new(SubmissionGuard::new());
        let ticket = guard.try_acquire(7u32).unwrap();

        let handle = tokio::spawn(async move {
            let _ticket = ticket;
            panic!("submission failed");
        });
        assert!(handle.await.is_err());

        assert!(!guard.is_in_flight(&7));
    }
}
