//! Blocking user notifications.
//!
//! The browser implementation is `window.alert`, which shows plain text, so
//! server-provided messages are never interpreted as markup.

/// Shows a message the user has to acknowledge.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// `Notifier` over `window.alert`; logs instead when rendered on the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::info!("notify: {message}");
        }
    }
}
