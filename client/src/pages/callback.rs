//! OAuth callback page: commits the token and user handed back by the
//! backend, then moves on to the user's home route.

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::{CallbackOutcome, SessionError, SessionHandle, callback, home_route};

use crate::state::auth::SessionContext;

/// Finish sign-in from the callback query string. Returns the route to show
/// next, or a message explaining why sign-in did not complete.
fn complete_sign_in(handle: &SessionHandle, search: &str) -> Result<&'static str, String> {
    match callback::parse_query(search.trim_start_matches('?')) {
        CallbackOutcome::Complete { token, user } => {
            let state = handle.set_auth_data(&token, &user).map_err(|e| failure_message(&e))?;
            Ok(state.user.map_or("/", |user| home_route(user.user_type)))
        }
        CallbackOutcome::Denied(reason) => Err(format!("Sign-in was not completed: {reason}.")),
        CallbackOutcome::Malformed(reason) => Err(format!("Sign-in response was incomplete: {reason}.")),
    }
}

fn failure_message(err: &SessionError) -> String {
    match err {
        SessionError::Persistence(_) => "Could not save your session. Check that site storage is enabled.".to_owned(),
        other => format!("Sign-in failed: {other}."),
    }
}

#[component]
pub fn CallbackPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let login_route = session.handle.config().login_route.clone();
    let location = use_location();
    let navigate = use_navigate();
    let message = RwSignal::new(None::<String>);

    let handle = session.handle.clone();
    Effect::new(move || {
        let search = location.search.get_untracked();
        match complete_sign_in(&handle, &search) {
            Ok(target) => navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() }),
            Err(reason) => message.set(Some(reason)),
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <Show
                    when=move || message.get().is_some()
                    fallback=|| view! { <p class="login-message">"Signing you in..."</p> }
                >
                    <p class="login-message login-message--error">{move || message.get().unwrap_or_default()}</p>
                    <a href=login_route.clone() class="login-button">"Back to sign-in"</a>
                </Show>
            </div>
        </div>
    }
}
