//! Networking modules for the external user API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls behind the `AuthApi` port, and `types` defines
//! the JSON schema on both sides of it.

pub mod api;
pub mod types;
