use super::*;
use session::UserSummary;

fn signed_in(user_type: UserType) -> SessionState {
    SessionState::authenticated(UserSummary::new(5, user_type))
}

#[test]
fn no_redirect_while_loading() {
    assert_eq!(redirect_target(&SessionState::initializing(), &[], "/login"), None);
}

#[test]
fn signed_out_visitor_goes_to_login() {
    assert_eq!(redirect_target(&SessionState::unauthenticated(), &[], "/login"), Some("/login".to_owned()));
}

#[test]
fn allowed_role_stays() {
    assert_eq!(redirect_target(&signed_in(UserType::Admin), &[UserType::Staff, UserType::Admin], "/login"), None);
}

#[test]
fn forbidden_role_goes_home() {
    assert_eq!(
        redirect_target(&signed_in(UserType::Resident), &[UserType::Admin], "/login"),
        Some("/dashboard".to_owned())
    );
}
