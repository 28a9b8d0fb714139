//! Reactive session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`SessionContext`]. Pages read `state` for rendering and
//! go through `handle` for every transition. The signal is only written by
//! the session listener, so it always mirrors the handle.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

#[cfg(any(test, feature = "csr"))]
use std::sync::Arc;
#[cfg(any(test, feature = "csr"))]
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use session::{SessionConfig, SessionHandle, SessionState};

use crate::util::browser::{BrowserClock, BrowserNavigator};
use crate::util::storage::LocalStorageStore;

/// Longest single wait before the expiry watch re-checks the session.
#[cfg(any(test, feature = "csr"))]
const MAX_EXPIRY_WAIT_SECS: i64 = 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
    pub handle: SessionHandle,
}

impl SessionContext {
    /// Wrap `handle` and mirror each of its transitions into a signal.
    pub fn new(handle: SessionHandle) -> Self {
        let state = RwSignal::new(handle.state());
        handle.subscribe(move |next| {
            // The owner may already be gone during teardown.
            let _ = state.try_set(next.clone());
        });
        Self { state, handle }
    }
}

/// Build the browser session and provide it to the component tree.
///
/// Outside the browser storage is unavailable and navigation is a no-op, so
/// native tests see a session that always checks out signed out.
pub fn provide_session(config: SessionConfig) -> SessionContext {
    let handle = SessionHandle::new(config, LocalStorageStore, BrowserNavigator, BrowserClock);
    let ctx = SessionContext::new(handle);
    provide_context(ctx.clone());
    ctx
}

/// Arming a new expiry timer retires every timer armed before it.
#[cfg(any(test, feature = "csr"))]
#[derive(Clone, Debug, Default)]
struct TimerGeneration(Arc<AtomicU64>);

#[cfg(any(test, feature = "csr"))]
impl TimerGeneration {
    fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }
}

/// Re-check the session when its token expires, so an idle tab signs out
/// on time instead of at its next request. At most one timer is live: each
/// session transition retires the previous one.
pub fn install_expiry_watch(ctx: &SessionContext) {
    #[cfg(feature = "csr")]
    {
        use session::Clock;

        let state = ctx.state;
        let handle = ctx.handle.clone();
        let generation = TimerGeneration::default();
        let retire = generation.clone();
        on_cleanup(move || {
            retire.advance();
        });

        Effect::new(move || {
            let armed = generation.advance();
            if !state.get().is_authenticated {
                return;
            }
            let Some(wait) = expiry_wait_secs(handle.expires_at(), BrowserClock.now_unix()) else {
                return;
            };
            let handle = handle.clone();
            let generation = generation.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(wait)).await;
                if generation.is_current(armed) {
                    handle.check_auth();
                }
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ctx;
    }
}

/// Seconds to wait before re-checking a token expiring at `expires_at`.
/// `None` when the token carries no readable expiry.
#[cfg(any(test, feature = "csr"))]
fn expiry_wait_secs(expires_at: Option<i64>, now: i64) -> Option<u64> {
    let remaining = expires_at?.saturating_sub(now).clamp(0, MAX_EXPIRY_WAIT_SECS);
    u64::try_from(remaining).ok()
}
