//! Mode container for the sign-in screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthPage` owns one `RwSignal<AuthState>` and provides it as context.
//! The login and register views switch between each other by dispatching
//! `AuthMsg` values into it instead of receiving navigation callbacks.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Which form the sign-in screen is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Transitions accepted by [`AuthState::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMsg {
    ToRegister,
    ToLogin,
}

/// Sign-in screen state. Lives only as long as the mounted `AuthPage`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub mode: AuthMode,
}

impl AuthState {
    /// Apply a transition. Both transitions are unconditional sets, so
    /// repeating one leaves the mode unchanged.
    pub fn dispatch(&mut self, msg: AuthMsg) {
        self.mode = match msg {
            AuthMsg::ToRegister => AuthMode::Register,
            AuthMsg::ToLogin => AuthMode::Login,
        };
    }

    #[must_use]
    pub fn is_login(&self) -> bool {
        self.mode == AuthMode::Login
    }
}
