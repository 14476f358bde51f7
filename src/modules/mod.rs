//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the remote user store, the reference data loader and the local
//! state file.

pub mod local_state;
pub mod reference_data;
pub mod remote_store;
