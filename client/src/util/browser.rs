//! Browser bindings for the session's navigation and time seams.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use session::{Clock, Navigator};

/// Navigates by assigning `window.location`, a full page load.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().set_href(url) {
                    log::warn!("navigation to {url} failed: {err:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
        }
    }
}

/// Wall clock backed by `Date.now()` in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_unix(&self) -> i64 {
        #[cfg(feature = "csr")]
        {
            millis_to_secs(js_sys::Date::now())
        }
        #[cfg(not(feature = "csr"))]
        {
            session::SystemClock.now_unix()
        }
    }
}

#[cfg(any(test, feature = "csr"))]
#[allow(clippy::cast_possible_truncation)]
fn millis_to_secs(millis: f64) -> i64 {
    (millis / 1000.0).floor() as i64
}
