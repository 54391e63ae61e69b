//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth` mode, per-form `submission`, app-level
//! `session`) so each view depends on a small focused model.

pub mod auth;
pub mod session;
pub mod submission;
