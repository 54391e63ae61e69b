//! Registration form: username, password and confirmation against
//! `POST /api/users/register`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `AuthPage` while the mode is `Register`. Success switches the
//! screen back to login; the new username is not carried over.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use super::auth_form::{FormError, REGISTER_FAILED, REGISTER_SUCCEEDED, reject, require, success_message};
use crate::net::types::Credentials;
use crate::ports::AuthPorts;
use crate::state::auth::{AuthMsg, AuthState};
use crate::state::submission::Submission;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub identifier: String,
    pub secret: String,
    pub secret_confirmation: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns the first missing field, or `SecretMismatch` when the two
    /// passwords differ.
    pub fn validate(&self) -> Result<Credentials, FormError> {
        require(&self.identifier, FormError::MissingIdentifier)?;
        require(&self.secret, FormError::MissingSecret)?;
        require(&self.secret_confirmation, FormError::MissingConfirmation)?;
        if self.secret != self.secret_confirmation {
            return Err(FormError::SecretMismatch);
        }
        Ok(Credentials { identifier: self.identifier.clone(), secret: self.secret.clone() })
    }
}

/// Run one registration attempt against `ports`.
///
/// Nothing is sent unless the form validates. `to_login` runs once, after
/// the success message, and only on success.
pub async fn submit_register<L>(ports: &AuthPorts, form: RegisterForm, to_login: L) -> Submission
where
    L: FnOnce(),
{
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(err) => return reject(ports.notifier.as_ref(), err.to_string()),
    };

    match ports.api.register(&credentials).await {
        Ok(reply) => {
            ports.notifier.notify(&success_message(reply.message.as_deref(), REGISTER_SUCCEEDED));
            to_login();
            Submission::Succeeded
        }
        Err(err) => {
            log::warn!("registration failed: {err}");
            reject(ports.notifier.as_ref(), err.user_message(REGISTER_FAILED))
        }
    }
}

#[component]
pub fn RegisterView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ports = expect_context::<AuthPorts>();

    let identifier = RwSignal::new(String::new());
    let secret = RwSignal::new(String::new());
    let secret_confirmation = RwSignal::new(String::new());
    let submission = RwSignal::new(Submission::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !submission.try_update(Submission::begin).unwrap_or(false) {
            return;
        }
        let form = RegisterForm {
            identifier: identifier.get_untracked(),
            secret: secret.get_untracked(),
            secret_confirmation: secret_confirmation.get_untracked(),
        };
        let ports = ports.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_register(&ports, form, move || auth.update(|s| s.dispatch(AuthMsg::ToLogin))).await;
            // Success unmounts this view.
            let _ = submission.try_set(outcome);
        });
    };

    view! {
        <div class="auth-container">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Register"</h2>
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
                <label class="auth-label">
                    "Confirm Password"
                    <input
                        id="confirm-password"
                        type="password"
                        placeholder="Confirm your password"
                        required=true
                        prop:value=move || secret_confirmation.get()
                        on:input=move |ev| secret_confirmation.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || submission.with(Submission::is_pending)>
                    "Register"
                </button>
                <Show when=move || submission.with(|s| s.failure().is_some())>
                    <p class="auth-error">
                        {move || submission.with(|s| s.failure().unwrap_or_default().to_owned())}
                    </p>
                </Show>
                <div class="form-footer">
                    "Already have an account? "
                    <a
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            auth.update(|s| s.dispatch(AuthMsg::ToLogin));
                        }
                    >
                        "Login"
                    </a>
                </div>
            </form>
        </div>
    }
}
