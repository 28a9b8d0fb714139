//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior for visitors who
//! are signed out or whose role may not open the route.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::{RouteAccess, SessionState, UserType, home_route, route_access};

/// Where a visitor on a route restricted to `allowed` should be sent, if
/// anywhere. Signed-out visitors go to `login_route`; signed-in visitors
/// without the role go to their own home.
pub fn redirect_target(state: &SessionState, allowed: &[UserType], login_route: &str) -> Option<String> {
    match route_access(state, allowed) {
        RouteAccess::Wait | RouteAccess::Allow => None,
        RouteAccess::RedirectToLogin => Some(login_route.to_owned()),
        RouteAccess::Forbidden => state.user.as_ref().map(|user| home_route(user.user_type).to_owned()),
    }
}

/// Redirect whenever the session has loaded and the route is not allowed.
pub fn install_route_guard<F>(state: RwSignal<SessionState>, allowed: &'static [UserType], login_route: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(&state.get(), allowed, &login_route) {
            navigate(&target, NavigateOptions::default());
        }
    });
}
