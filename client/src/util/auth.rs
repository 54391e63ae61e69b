//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes behind the sign-in screen apply the same unauthenticated redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Sign-in screen route.
pub const AUTH_PATH: &str = "/";

/// Landing route after a successful login.
pub const CHATS_PATH: &str = "/chats";

/// True once the session marker has been read and no user was found.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user_id.is_none()
}

/// Redirect to the sign-in screen whenever the session has loaded and no user is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(AUTH_PATH, NavigateOptions::default());
        }
    });
}
