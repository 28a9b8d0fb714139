use super::*;
use session::{UserSummary, UserType};

#[test]
fn no_target_while_loading_or_signed_out() {
    assert_eq!(signed_in_target(&SessionState::initializing()), None);
    assert_eq!(signed_in_target(&SessionState::unauthenticated()), None);
}

#[test]
fn signed_in_visitor_goes_to_role_home() {
    let staff = SessionState::authenticated(UserSummary::new(3, UserType::Staff));
    assert_eq!(signed_in_target(&staff), Some("/staff"));
}
