use super::*;

#[test]
fn request_failed_message_names_method_and_status() {
    assert_eq!(request_failed_message(ApiMethod::Get, 500), "get request failed: 500");
    assert_eq!(request_failed_message(ApiMethod::Delete, 404), "delete request failed: 404");
}

#[test]
fn session_expired_message_prompts_sign_in() {
    assert!(SESSION_EXPIRED_MESSAGE.contains("sign in"));
}

#[test]
fn current_user_path_is_relative_to_api_root() {
    let config = session::SessionConfig::default();
    assert_eq!(config.endpoint(CURRENT_USER_PATH), "http://localhost:3000/api/auth/me");
}
