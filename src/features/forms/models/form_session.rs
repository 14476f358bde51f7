use chrono::{DateTime, Utc};
use std::time::Instant;
use uuid::Uuid;

use crate::features::locations::models::{CascadeState, GeoDirectory};

/// Server-held state of one registration form
#[derive(Debug, Clone)]
pub struct FormSession {
    pub id: Uuid,
    pub cascade: CascadeState,
    pub created_at: DateTime<Utc>,
    touched_at: Instant,
}

impl FormSession {
    pub fn new(directory: &GeoDirectory) -> Self {
        Self {
            id: Uuid::now_v7(),
            cascade: CascadeState::new(directory),
            created_at: Utc::now(),
            touched_at: Instant::now(),
        }
    }

    pub fn touch(&mut self) {
        self.touched_at = Instant::now();
    }

    pub fn is_expired(&self, ttl: std::time::Duration) -> bool {
        self.touched_at.elapsed() > ttl
    }
}
