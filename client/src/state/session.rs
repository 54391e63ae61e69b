//! App-level session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Restored from the stored session marker when the app mounts, set by the
//! login success callback, and read by the `/chats` route guard.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Who is signed in, and whether the stored marker has been read yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user_id: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user_id: None, loading: true }
    }
}

impl SessionState {
    /// Loaded state built from whatever marker storage returned.
    #[must_use]
    pub fn restored(user_id: Option<String>) -> Self {
        Self { user_id, loading: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::restored(None)
    }
}
