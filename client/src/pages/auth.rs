//! Sign-in screen switching between the login and register forms.

use leptos::prelude::*;

use super::login::LoginView;
use super::register::RegisterView;
use crate::state::auth::{AuthMode, AuthState};

/// Owns the mode container for its lifetime and renders exactly one form.
/// A fresh mount always starts on the login form.
#[component]
pub fn AuthPage(on_login_success: Callback<()>) -> impl IntoView {
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    view! {
        <div class="auth-page">
            {move || match auth.with(|s| s.mode) {
                AuthMode::Login => view! { <LoginView on_login_success=on_login_success/> }.into_any(),
                AuthMode::Register => view! { <RegisterView/> }.into_any(),
            }}
        </div>
    }
}
