use super::*;
use crate::net::types::User;

fn profile(id: &str) -> UserProfile {
    UserProfile {
        id: id.to_owned(),
        name: "Alice".to_owned(),
        avatar_url: None,
        member_since: None,
        listings: Vec::new(),
    }
}

fn session_for(id: &str) -> SessionState {
    SessionState::signed_in(User {
        id: id.to_owned(),
        name: "Alice".to_owned(),
        email: None,
        avatar_url: None,
        is_superadmin: false,
    })
}

// =============================================================
// is_current_request
// =============================================================

#[test]
fn response_for_current_route_is_applied() {
    assert!(is_current_request(Some("b"), "b"));
}

#[test]
fn late_response_for_previous_route_is_dropped() {
    // Navigated /users/a -> /users/b; the fetch for "a" finishes last.
    assert!(!is_current_request(Some("b"), "a"));
    assert!(!is_current_request(None, "a"));
}

// =============================================================
// is_own_profile
// =============================================================

#[test]
fn own_profile_is_keyed_on_profile_id() {
    assert!(is_own_profile(&profile("u1"), &session_for("u1")));
    assert!(!is_own_profile(&profile("u2"), &session_for("u1")));
}

#[test]
fn anonymous_visitor_owns_nothing() {
    assert!(!is_own_profile(&profile("u1"), &SessionState::signed_out()));
}
