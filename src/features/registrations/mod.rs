//! User registration.
//!
//! A submission moves through `ValidatingChain`, `CheckingDuplicates` and
//! `Persisting`:
//!
//! 1. Region, province, city and barangay must each name a unit in the
//!    reference tables that belongs to the unit chosen above it.
//! 2. No stored user may share the email or the contact number.
//! 3. The record is inserted with country "Philippines". The stored copy is
//!    cached in local state under `loggedInUser`.
//!
//! Passwords are stored as submitted.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/registrations` | Register with location given by name |
//!
//! Form-bound submission lives in `features::forms`.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RegistrationService;
