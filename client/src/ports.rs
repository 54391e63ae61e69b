//! Outside-world dependencies of the sign-in pages.
//!
//! DESIGN
//! ======
//! `App` provides one `AuthPorts` as context. Pages reach the user API,
//! durable storage and user notifications only through it, never through
//! browser globals, so the submit flows run unchanged against fakes.

use std::sync::Arc;

use crate::net::api::{AuthApi, HttpAuthApi};
use crate::util::notify::{AlertNotifier, Notifier};
use crate::util::session_store::{LocalSessionStore, SessionStore};

#[derive(Clone)]
pub struct AuthPorts {
    pub api: Arc<dyn AuthApi>,
    pub session: Arc<dyn SessionStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl AuthPorts {
    pub fn new(api: Arc<dyn AuthApi>, session: Arc<dyn SessionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, session, notifier }
    }

    /// `fetch` against the build-time API base, `localStorage`, and `window.alert`.
    pub fn browser() -> Self {
        Self::new(Arc::new(HttpAuthApi::from_env()), Arc::new(LocalSessionStore), Arc::new(AlertNotifier))
    }
}
