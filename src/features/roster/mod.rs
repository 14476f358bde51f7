//! Roster of registered users.
//!
//! Reads every record from the remote store and shows one summary card per
//! user. An empty table and a failed read each get their own placeholder;
//! neither is an error response.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/users` | Roster as JSON cards |
//! | GET | `/roster` | Roster as an HTML fragment |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RosterService;
