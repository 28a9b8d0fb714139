//! Build-time configuration for the browser bundle.
//!
//! The bundle cannot read the environment at runtime, so the `IRESERVE_*`
//! values are captured by `option_env!` when the crate is compiled and fed
//! through the same defaults as the CLI.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use session::SessionConfig;

pub fn session_config() -> SessionConfig {
    SessionConfig::from_lookup(build_time_value)
}

fn build_time_value(key: &str) -> Option<String> {
    let value = match key {
        "IRESERVE_API_URL" => option_env!("IRESERVE_API_URL"),
        "IRESERVE_OAUTH_PATH" => option_env!("IRESERVE_OAUTH_PATH"),
        "IRESERVE_CALLBACK_URL" => option_env!("IRESERVE_CALLBACK_URL"),
        "IRESERVE_LOGIN_ROUTE" => option_env!("IRESERVE_LOGIN_ROUTE"),
        _ => None,
    };
    value.map(str::to_owned)
}
