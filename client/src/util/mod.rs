//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, alerts, redirects) from
//! page logic so pages stay testable without a browser.

pub mod auth;
pub mod notify;
pub mod session_store;
