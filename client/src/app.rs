//! Root application component with routing and the session context.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use session::UserType;

use crate::config::session_config;
use crate::pages::{
    callback::CallbackPage,
    home::{HomePage, RootRedirect},
    login::LoginPage,
};
use crate::state::auth::{install_expiry_watch, provide_session};

/// Root application component.
///
/// Provides the session context and runs the initial session check once the
/// app has mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = provide_session(session_config());
    install_expiry_watch(&session);

    let handle = session.handle.clone();
    Effect::new(move || {
        handle.check_auth();
    });

    view! {
        <Title text="iReserve"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=CallbackPage/>
                <Route path=StaticSegment("dashboard") view=|| view! { <HomePage title="My reservations" allowed=&[]/> }/>
                <Route
                    path=StaticSegment("staff")
                    view=|| view! { <HomePage title="Facility desk" allowed=&[UserType::Staff, UserType::Admin]/> }
                />
                <Route path=StaticSegment("admin") view=|| view! { <HomePage title="Administration" allowed=&[UserType::Admin]/> }/>
                <Route path=StaticSegment("") view=RootRedirect/>
            </Routes>
        </Router>
    }
}
