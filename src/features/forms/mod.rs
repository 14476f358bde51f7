//! Server-held registration forms.
//!
//! A form keeps its own location selection and the option list for each
//! level. Choosing a value narrows the next level to that unit's children and
//! clears everything below. Submitting uses the form's selection, runs at
//! most once at a time per form, and resets the form on success.
//!
//! Forms idle for longer than `FORM_SESSION_TTL_SECS` are dropped when a new
//! one is created.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/forms` | Open a form |
//! | GET | `/api/forms/{id}` | Current selection and options |
//! | PUT | `/api/forms/{id}/selection` | Set one location field |
//! | POST | `/api/forms/{id}/submit` | Submit personal fields |
//! | DELETE | `/api/forms/{id}` | Discard a form |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FormService;
