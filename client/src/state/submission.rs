//! Per-form submission lifecycle.
//!
//! DESIGN
//! ======
//! Each form holds one `Submission` in a signal. `begin` is the only way into
//! `Pending`, and it refuses while a request is already in flight, so a
//! double-click cannot fire two overlapping requests.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Pending,
    Succeeded,
    /// Holds the message that was shown to the user.
    Failed(String),
}

impl Submission {
    /// Enter `Pending`. Returns `false`, leaving the state untouched, when a
    /// submission is already pending.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Message from the last failed attempt, if the form is in `Failed`.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
