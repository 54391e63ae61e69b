//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `auth` is the sign-in screen and owns the login/register mode; `login`
//! and `register` are its two forms and carry their own submit flows.
//! `chats` is the post-login landing route.

pub mod auth;
pub mod auth_form;
pub mod chats;
pub mod login;
pub mod register;
