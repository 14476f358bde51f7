use std::sync::Arc;

use crate::core::config::RegistrationConfig;
use crate::core::error::{AppError, Result};
use crate::features::locations::models::{GeoDirectory, SelectionState};
use crate::features::registrations::dtos::{
    PersonalDetailsDto, RedirectDto, RegisterUserDto, RegistrationResponseDto,
};
use crate::features::registrations::models::{DuplicateFields, SubmissionPhase, UserRecord};
use crate::features::roster::RosterService;
use crate::features::validation::models::check_password;
use crate::modules::local_state::LocalStateStore;
use crate::modules::remote_store::{RemoteStore, StoreError, UserFilter};
use crate::shared::constants::COUNTRY;
use crate::shared::submission_guard::SubmissionGuard;

pub const REGISTERED_MESSAGE: &str = "User registered successfully";

/// Validates, de-duplicates and stores new registrations
pub struct RegistrationService {
    directory: Arc<GeoDirectory>,
    store: Arc<dyn RemoteStore>,
    local_state: Arc<LocalStateStore>,
    roster: Arc<RosterService>,
    config: RegistrationConfig,
    local_state_key: String,
    // Guards the stateless endpoint, keyed by email
    in_flight: SubmissionGuard<String>,
}

fn trace_phase(phase: SubmissionPhase, email: &str) {
    tracing::debug!(phase = %phase, email = %email, "Registration phase");
}

fn failed(email: &str, error: AppError) -> AppError {
    tracing::info!(phase = %SubmissionPhase::Failed, email = %email, "Registration rejected: {}", error);
    error
}

impl RegistrationService {
    pub fn new(
        directory: Arc<GeoDirectory>,
        store: Arc<dyn RemoteStore>,
        local_state: Arc<LocalStateStore>,
        roster: Arc<RosterService>,
        config: RegistrationConfig,
        local_state_key: impl Into<String>,
    ) -> Self {
        Self {
            directory,
            store,
            local_state,
            roster,
            config,
            local_state_key: local_state_key.into(),
            in_flight: SubmissionGuard::new(),
        }
    }

    pub fn directory(&self) -> &Arc<GeoDirectory> {
        &self.directory
    }

    /// Register from a single request; one submission per email at a time
    pub async fn register(&self, dto: RegisterUserDto) -> Result<RegistrationResponseDto> {
        let key = dto.personal.email.trim().to_string();
        let _ticket = self.in_flight.try_acquire(key).ok_or_else(|| {
            AppError::Conflict("A registration is already in progress for this email".to_string())
        })?;

        let (selection, personal) = dto.into_parts();
        self.submit(&selection, personal).await
    }

    /// Run one submission against an already chosen location.
    ///
    /// Nothing is written when any step fails. Callers enforce the
    /// one-in-flight rule for their own notion of a form.
    pub async fn submit(
        &self,
        selection: &SelectionState,
        personal: PersonalDetailsDto,
    ) -> Result<RegistrationResponseDto> {
        let email = personal.email.trim().to_string();
        let contact = personal.contact.trim().to_string();
        trace_phase(SubmissionPhase::Idle, &email);

        // Chain
        trace_phase(SubmissionPhase::ValidatingChain, &email);
        let chain = self
            .directory
            .resolve_chain(selection)
            .map_err(|level| failed(&email, AppError::Validation(format!("Invalid {}", level))))?;

        if self.config.require_strong_password {
            let strength = check_password(&personal.password);
            if !strength.is_valid() {
                let message = strength.message().unwrap_or("Password is required");
                return Err(failed(&email, AppError::Validation(message.to_string())));
            }
        }

        // Duplicates
        trace_phase(SubmissionPhase::CheckingDuplicates, &email);
        let filter = UserFilter::EmailOrContact {
            email: email.clone(),
            contact: contact.clone(),
        };
        let existing = self.store.select(&filter).await.map_err(|e| {
            failed(
                &email,
                AppError::ExternalServiceError(format!("Error checking for duplicates: {}", e)),
            )
        })?;

        let duplicates = DuplicateFields::find(&existing, &email, &contact);
        if duplicates.any() {
            return Err(failed(&email, AppError::Conflict(duplicates.message())));
        }

        // Insert
        trace_phase(SubmissionPhase::Persisting, &email);
        let record = UserRecord {
            name: personal.name,
            course: personal.course,
            year: personal.year,
            gender: personal.gender,
            region: chain.region.name.clone(),
            province: chain.province.name.clone(),
            city: chain.city.name.clone(),
            barangay: chain.barangay.name.clone(),
            country: COUNTRY.to_string(),
            email,
            contact,
            password: personal.password,
        };

        match self.store.insert(std::slice::from_ref(&record)).await {
            Ok(_) => {}
            Err(StoreError::UniqueViolation { column }) => {
                let duplicates = self
                    .duplicates_after_lost_race(column.as_deref(), &filter, &record)
                    .await;
                return Err(failed(&record.email, AppError::Conflict(duplicates.message())));
            }
            Err(e) => {
                return Err(failed(
                    &record.email,
                    AppError::ExternalServiceError(format!("Error saving user: {}", e)),
                ));
            }
        }

        trace_phase(SubmissionPhase::Done, &record.email);
        tracing::info!(
            "User registered: email={}, backend={}",
            record.email,
            self.store.backend()
        );

        if let Err(e) = self.local_state.set(&self.local_state_key, &record).await {
            tracing::warn!(
                "Failed to cache registered user under '{}': {}",
                self.local_state_key,
                e
            );
        }

        let roster = self.roster.load().await;

        Ok(RegistrationResponseDto {
            user: record.into(),
            redirect: RedirectDto {
                url: self.config.login_redirect_url.clone(),
                delay_ms: self.config.redirect_delay_ms,
            },
            roster: roster.into(),
        })
    }

    /// Name the colliding fields after the storage layer rejected an insert
    /// that passed the pre-check
    async fn duplicates_after_lost_race(
        &self,
        column: Option<&str>,
        filter: &UserFilter,
        record: &UserRecord,
    ) -> DuplicateFields {
        if let Ok(existing) = self.store.select(filter).await {
            let found = DuplicateFields::find(&existing, &record.email, &record.contact);
            if found.any() {
                return found;
            }
        }
        DuplicateFields::from_column(column)
    }
}
