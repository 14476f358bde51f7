//! Advisory field checks for the registration form.
//!
//! Stateless; nothing here blocks a submission.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/validation/fields` | Check email, contact number and password |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
