//! Durable storage for the session marker.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login writes the user id here; the app shell and the `/chats` guard read
//! it back. Pages only see the `SessionStore` trait, so tests swap in an
//! in-memory store and SSR never touches `localStorage`.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use thiserror::Error;

/// `localStorage` key holding the signed-in user id.
pub const SESSION_KEY: &str = "user_id";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage write failed: {0}")]
    Write(String),
}

pub trait SessionStore: Send + Sync {
    /// The stored user id, if any.
    fn load(&self) -> Option<String>;

    /// Persist `user_id` as the session marker.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if storage is missing or rejects the write.
    fn save(&self, user_id: &str) -> Result<(), StorageError>;

    /// Remove the session marker. Missing storage is not an error.
    fn clear(&self);
}

/// `SessionStore` over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(SESSION_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, user_id: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(SESSION_KEY, user_id)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(SESSION_KEY);
            }
        }
    }
}
