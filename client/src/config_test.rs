use super::*;

#[test]
fn unknown_keys_are_never_baked_in() {
    assert_eq!(build_time_value("HOME"), None);
    assert_eq!(build_time_value("IRESERVE_STATE_FILE"), None);
}

#[test]
fn session_config_is_normalized() {
    let config = session_config();
    assert!(!config.api_base_url.ends_with('/'));
    assert!(config.oauth_path.starts_with('/'));
    assert!(config.login_url().contains("?redirect_uri="));
}
