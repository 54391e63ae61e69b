//! Post-login landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login form navigates here. The chat UI itself lives elsewhere; this
//! page only guards the route on the session marker and offers sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::ports::AuthPorts;
use crate::state::session::SessionState;
use crate::util::auth::{AUTH_PATH, install_unauth_redirect};

#[component]
pub fn ChatsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ports = expect_context::<AuthPorts>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate.clone());

    let on_sign_out = move |_| {
        ports.session.clear();
        session.set(SessionState::signed_out());
        navigate(AUTH_PATH, NavigateOptions::default());
    };

    view! {
        <div class="chats-page">
            <p class="chats-page__user">
                "Signed in as "
                <span>{move || session.with(|s| s.user_id.clone().unwrap_or_default())}</span>
            </p>
            <button class="chats-page__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </div>
    }
}
