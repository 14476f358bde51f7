use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::forms::dtos::FormStateDto;
use crate::features::forms::models::FormSession;
use crate::features::locations::models::{GeoDirectory, GeoLevel};
use crate::features::registrations::dtos::{PersonalDetailsDto, RegistrationResponseDto};
use crate::features::registrations::RegistrationService;
use crate::shared::submission_guard::SubmissionGuard;
#[cfg(test)]
use crate::shared::submission_guard::SubmissionTicket;

/// Holds form sessions and drives their cascade and submission
pub struct FormService {
    directory: Arc<GeoDirectory>,
    registrations: Arc<RegistrationService>,
    sessions: RwLock<HashMap<Uuid, FormSession>>,
    ttl: Duration,
    in_flight: SubmissionGuard<Uuid>,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Form with id '{}' not found", id))
}

impl FormService {
    pub fn new(registrations: Arc<RegistrationService>, ttl: Duration) -> Self {
        Self {
            directory: Arc::clone(registrations.directory()),
            registrations,
            sessions: RwLock::new(HashMap::new()),
            ttl,
            in_flight: SubmissionGuard::new(),
        }
    }

    fn state_of(&self, session: &FormSession) -> FormStateDto {
        FormStateDto::from_session(session, self.in_flight.is_in_flight(&session.id))
    }

    /// Open a new form with every region offered. Idle forms are pruned first.
    pub async fn create(&self) -> FormStateDto {
        let session = FormSession::new(&self.directory);
        let state = self.state_of(&session);

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(self.ttl));
        let pruned = before - sessions.len();
        if pruned > 0 {
            tracing::debug!("Pruned {} idle form sessions", pruned);
        }

        sessions.insert(session.id, session);
        tracing::debug!("Form session created: id={}", state.id);

        state
    }

    pub async fn get(&self, id: Uuid) -> Result<FormStateDto> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        Ok(self.state_of(session))
    }

    /// Apply a cascading selection at `level`
    pub async fn select(
        &self,
        id: Uuid,
        level: GeoLevel,
        value: Option<String>,
    ) -> Result<FormStateDto> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;

        let matched = session.cascade.select(&self.directory, level, value);
        session.touch();
        tracing::debug!(
            "Form {} selected {}: {}",
            id,
            level,
            matched.as_ref().map_or("no match", |unit| unit.code.as_str())
        );

        Ok(self.state_of(session))
    }

    /// Submit the form's selection with the given personal fields.
    ///
    /// One submission per form at a time. On success the form goes back to
    /// its initial state.
    pub async fn submit(
        &self,
        id: Uuid,
        personal: PersonalDetailsDto,
    ) -> Result<RegistrationResponseDto> {
        let _ticket = self.in_flight.try_acquire(id).ok_or_else(|| {
            AppError::Conflict("A registration is already in progress for this form".to_string())
        })?;

        // The lock is not held across the remote calls
        let selection = {
            let sessions = self.sessions.read().await;
            let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
            session.cascade.selection().clone()
        };

        let result = self.registrations.submit(&selection, personal).await?;

        if let Some(session) = self.sessions.write().await.get_mut(&id) {
            session.cascade.reset(&self.directory);
            session.touch();
        }

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if self.sessions.write().await.remove(&id).is_none() {
            return Err(not_found(id));
        }

        tracing::debug!("Form session deleted: id={}", id);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn hold_submission(&self, id: Uuid) -> Option<SubmissionTicket<Uuid>> {
        self.in_flight.try_acquire(id)
    }
}
