//! Role home pages and the root redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Residents land on `/dashboard`, staff on `/staff`, admins on `/admin`.
//! Each page is guarded by role and confirms the session with the backend
//! once, so a token revoked server-side signs the tab out on arrival.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::{RouteAccess, SessionHandle, SessionState, UserType, home_route, route_access};

use crate::state::auth::SessionContext;
use crate::util::auth::install_route_guard;

fn access_message(access: RouteAccess) -> &'static str {
    match access {
        RouteAccess::Wait => "Checking your session...",
        RouteAccess::RedirectToLogin => "Redirecting to sign-in...",
        RouteAccess::Forbidden => "You do not have access to this page.",
        RouteAccess::Allow => "",
    }
}

fn greeting(state: &SessionState) -> String {
    match &state.user {
        Some(user) if state.is_authenticated => {
            let role = if user.user_type.can_manage() { format!(" ({})", user.user_type.as_str()) } else { String::new() };
            format!("Signed in as {}{role}", user.display_name())
        }
        _ => String::new(),
    }
}

/// Where `/` should send the visitor once the session has loaded.
fn root_target(state: &SessionState, login_route: &str) -> Option<String> {
    if state.loading {
        return None;
    }
    match &state.user {
        Some(user) if state.is_authenticated => Some(home_route(user.user_type).to_owned()),
        _ => Some(login_route.to_owned()),
    }
}

#[component]
pub fn HomePage(title: &'static str, allowed: &'static [UserType]) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state;
    install_route_guard(state, allowed, session.handle.config().login_route.clone(), use_navigate());

    let confirmed = RwSignal::new(false);
    let confirm_handle = session.handle.clone();
    Effect::new(move || {
        if confirmed.get_untracked() || route_access(&state.get(), allowed) != RouteAccess::Allow {
            return;
        }
        confirmed.set(true);
        confirm_session(confirm_handle.clone());
    });

    let handle = StoredValue::new(session.handle);
    let on_logout = move |_| {
        handle.with_value(|h| {
            h.logout();
        });
    };

    view! {
        <Show
            when=move || route_access(&state.get(), allowed) == RouteAccess::Allow
            fallback=move || view! { <p class="home-page__status">{move || access_message(route_access(&state.get(), allowed))}</p> }
        >
            <div class="home-page">
                <header class="home-page__header">
                    <h1>{title}</h1>
                    <span class="home-page__user">{move || greeting(&state.get())}</span>
                    <button class="home-page__logout" on:click=on_logout>"Sign out"</button>
                </header>
            </div>
        </Show>
    }
}

fn confirm_session(handle: SessionHandle) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::confirm_session(&handle).await {
            log::warn!("session confirmation failed: {e}");
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = handle;
    }
}

/// `/`: send the visitor to their home route or to sign-in.
#[component]
pub fn RootRedirect() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state;
    let login_route = session.handle.config().login_route.clone();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(target) = root_target(&state.get(), &login_route) {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! { <p class="home-page__status">{move || access_message(route_access(&state.get(), &[]))}</p> }
}
