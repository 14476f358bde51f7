//! Local persisted state
//!
//! A single JSON object file of string keys to JSON-serialized values. The
//! registration flow writes the last submitted record here for the login page.

mod file_store;

pub use file_store::{LocalStateError, LocalStateStore};
