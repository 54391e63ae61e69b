//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{auth::AuthPage, chats::ChatsPage};
use crate::ports::AuthPorts;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the browser ports and the session state, restores the session
/// marker once mounted, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ports = AuthPorts::browser();
    let session = RwSignal::new(SessionState::default());
    provide_context(ports.clone());
    provide_context(session);

    // Effects only run in the browser, where the marker is readable.
    let restore_ports = ports.clone();
    Effect::new(move || {
        session.set(SessionState::restored(restore_ports.session.load()));
    });

    let on_login_success = Callback::new(move |()| {
        session.set(SessionState::restored(ports.session.load()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-auth.css"/>
        <Title text="Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <AuthPage on_login_success=on_login_success/> }/>
                <Route path=StaticSegment("chats") view=ChatsPage/>
            </Routes>
        </Router>
    }
}
