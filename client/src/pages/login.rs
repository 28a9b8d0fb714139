//! Login page starting the OAuth handshake.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::{SessionState, home_route};

use crate::state::auth::SessionContext;

/// Home route for a visitor who is already signed in.
fn signed_in_target(state: &SessionState) -> Option<&'static str> {
    if state.loading || !state.is_authenticated {
        return None;
    }
    state.user.as_ref().map(|user| home_route(user.user_type))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state;
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(target) = signed_in_target(&state.get()) {
            navigate(target, NavigateOptions::default());
        }
    });

    let busy = RwSignal::new(false);
    let login_url = session.handle.config().login_url();
    let handle = session.handle.clone();
    let on_sign_in = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        handle.login();
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"iReserve"</h1>
                <p class="login-card__subtitle">"Book courts, rooms and halls in your community"</p>
                <a href=login_url class="login-button" aria-busy=move || busy.get().to_string() on:click=on_sign_in>
                    "Sign in with Google"
                </a>
            </div>
        </div>
    }
}
