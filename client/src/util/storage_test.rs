#![cfg(not(feature = "csr"))]

use super::*;
use session::{SessionConfig, SessionHandle, SessionState, SystemClock, TOKEN_KEY};

#[test]
fn storage_is_unavailable_outside_the_browser() {
    let store = LocalStorageStore;
    assert!(matches!(store.get(TOKEN_KEY), Err(StoreError::Unavailable(_))));
    assert!(matches!(store.set(TOKEN_KEY, "t"), Err(StoreError::Unavailable(_))));
    assert!(matches!(store.remove(TOKEN_KEY), Err(StoreError::Unavailable(_))));
}

#[test]
fn session_without_storage_checks_out_signed_out() {
    let handle = SessionHandle::new(
        SessionConfig::default(),
        LocalStorageStore,
        session::RecordingNavigator::new(),
        SystemClock,
    );
    assert_eq!(handle.check_auth(), SessionState::unauthenticated());
}
