//! Wire DTOs for the external user API.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON the user API speaks (`username`, `password`,
//! `user_id`, `message`, `error`). Optional response fields default to `None`
//! so a terse server reply still decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of both `POST /api/users/login` and `POST /api/users/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(rename = "username")]
    pub identifier: String,
    #[serde(rename = "password")]
    pub secret: String,
}

/// Successful login reply.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user_id: String,
}

/// Successful registration reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body the API attaches to non-2xx replies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
