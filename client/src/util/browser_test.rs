use super::*;

#[test]
fn millis_to_secs_truncates_toward_the_past() {
    assert_eq!(millis_to_secs(1_700_000_000_999.0), 1_700_000_000);
    assert_eq!(millis_to_secs(0.0), 0);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_clock_falls_back_to_system_time() {
    let before = session::SystemClock.now_unix();
    let now = BrowserClock.now_unix();
    assert!(now >= before);
    assert!(now - before < 5);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_navigator_is_inert_outside_the_browser() {
    BrowserNavigator.navigate("/login");
}
