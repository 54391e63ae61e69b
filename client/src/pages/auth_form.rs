//! Form validation and user-facing messages shared by the login and
//! register views.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use thiserror::Error;

use crate::state::submission::Submission;
use crate::util::notify::Notifier;

pub(crate) const LOGIN_SUCCEEDED: &str = "Login successful!";
pub(crate) const LOGIN_FAILED: &str = "Login failed";
pub(crate) const REGISTER_SUCCEEDED: &str = "Registration successful!";
pub(crate) const REGISTER_FAILED: &str = "Registration failed";

/// Local validation failures. Raised before any request is sent.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter your username")]
    MissingIdentifier,
    #[error("Please enter your password")]
    MissingSecret,
    #[error("Please confirm your password")]
    MissingConfirmation,
    #[error("Passwords do not match")]
    SecretMismatch,
}

/// Fields count as filled when non-empty. Values are sent as typed, with no
/// trimming or format rules.
pub(crate) fn require(value: &str, missing: FormError) -> Result<(), FormError> {
    if value.is_empty() { Err(missing) } else { Ok(()) }
}

/// Message to show for a successful reply: the server's text when present.
pub(crate) fn success_message(server: Option<&str>, fallback: &str) -> String {
    server.filter(|m| !m.trim().is_empty()).unwrap_or(fallback).to_owned()
}

/// Show `message` and settle the form as failed.
pub(crate) fn reject(notifier: &dyn Notifier, message: String) -> Submission {
    notifier.notify(&message);
    Submission::Failed(message)
}
