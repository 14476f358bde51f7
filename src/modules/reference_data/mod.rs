//! Static reference tables for the location hierarchy
//!
//! Each of the four tables is a JSON array read from a filesystem path or an
//! `http(s)://` URL once at startup.

mod loader;

pub use loader::{LoadError, ReferenceDataLoader};
