//! Login form: username + password against `POST /api/users/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `AuthPage` while the mode is `Login`. A successful login
//! stores the returned user id as the session marker, runs the caller's
//! `on_login_success`, and navigates to `/chats`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::auth_form::{FormError, LOGIN_FAILED, LOGIN_SUCCEEDED, reject, require, success_message};
use crate::net::types::Credentials;
use crate::ports::AuthPorts;
use crate::state::auth::{AuthMsg, AuthState};
use crate::state::submission::Submission;
use crate::util::auth::CHATS_PATH;

/// Field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub secret: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn validate(&self) -> Result<Credentials, FormError> {
        require(&self.identifier, FormError::MissingIdentifier)?;
        require(&self.secret, FormError::MissingSecret)?;
        Ok(Credentials { identifier: self.identifier.clone(), secret: self.secret.clone() })
    }
}

/// Run one login attempt against `ports`.
///
/// `on_success` and `navigate` are each called exactly once, and only after
/// the session marker has been stored. On any failure the user is told why
/// and neither is called.
pub async fn submit_login<S, N>(ports: &AuthPorts, form: LoginForm, on_success: S, navigate: N) -> Submission
where
    S: FnOnce(),
    N: FnOnce(&str),
{
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(err) => return reject(ports.notifier.as_ref(), err.to_string()),
    };

    let reply = match ports.api.login(&credentials).await {
        Ok(reply) => reply,
        Err(err) => {
            log::warn!("login failed: {err}");
            return reject(ports.notifier.as_ref(), err.user_message(LOGIN_FAILED));
        }
    };

    if let Err(err) = ports.session.save(&reply.user_id) {
        log::warn!("login accepted but session marker not stored: {err}");
        return reject(ports.notifier.as_ref(), LOGIN_FAILED.to_owned());
    }

    log::info!("signed in as {}", reply.user_id);
    ports.notifier.notify(&success_message(reply.message.as_deref(), LOGIN_SUCCEEDED));
    on_success();
    navigate(CHATS_PATH);
    Submission::Succeeded
}

#[component]
pub fn LoginView(on_login_success: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ports = expect_context::<AuthPorts>();
    let navigate = use_navigate();

    let identifier = RwSignal::new(String::new());
    let secret = RwSignal::new(String::new());
    let submission = RwSignal::new(Submission::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !submission.try_update(Submission::begin).unwrap_or(false) {
            return;
        }
        let form = LoginForm { identifier: identifier.get_untracked(), secret: secret.get_untracked() };
        let ports = ports.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_login(
                &ports,
                form,
                move || on_login_success.run(()),
                move |path| navigate(path, NavigateOptions::default()),
            )
            .await;
            // The view is gone after a successful navigation.
            let _ = submission.try_set(outcome);
        });
    };

    view! {
        <div class="auth-container">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Login"</h2>
                <label class="auth-label">
                    "Username"
                    <input
                        id="username"
                        type="text"
                        placeholder="Enter your username"
                        required=true
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-label">
                    "Password"
                    <input
                        id="password"
                        type="password"
                        placeholder="Enter your password"
                        required=true
                        prop:value=move || secret.get()
                        on:input=move |ev| secret.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || submission.with(Submission::is_pending)>
                    "Login"
                </button>
                <Show when=move || submission.with(|s| s.failure().is_some())>
                    <p class="auth-error">
                        {move || submission.with(|s| s.failure().unwrap_or_default().to_owned())}
                    </p>
                </Show>
                <div class="form-footer">
                    "Don't have an account? "
                    <a
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            auth.update(|s| s.dispatch(AuthMsg::ToRegister));
                        }
                    >
                        "Register"
                    </a>
                </div>
            </form>
        </div>
    }
}
