use super::*;
use crate::net::types::User;
use crate::util::storage::MemoryStorage;
use std::cell::RefCell;
use std::rc::Rc;

fn user(is_superadmin: bool) -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: Some("alice@example.com".to_owned()),
        avatar_url: None,
        is_superadmin,
    }
}

fn sessions_while_loading() -> Vec<SessionState> {
    vec![
        SessionState { user: None, loading: true },
        SessionState { user: Some(user(false)), loading: true },
        SessionState { user: Some(user(true)), loading: true },
    ]
}

// =============================================================
// login_redirect_target
// =============================================================

#[test]
fn login_target_encodes_path_and_query() {
    assert_eq!(
        login_redirect_target("/listings/new?draft=1&x=a b"),
        "/login?next=%2Flistings%2Fnew%3Fdraft%3D1%26x%3Da%20b"
    );
}

#[test]
fn login_target_round_trips_through_decode() {
    let path = "/a/b?x=1";
    let target = login_redirect_target(path);
    let encoded = target.strip_prefix("/login?next=").unwrap();
    assert_eq!(urlencoding::decode(encoded).unwrap(), path);
}

// =============================================================
// decide_authenticated
// =============================================================

#[test]
fn auth_guard_pending_while_loading() {
    for session in sessions_while_loading() {
        assert_eq!(decide_authenticated(&session, "/listings/new"), GuardDecision::Pending);
    }
}

#[test]
fn auth_guard_redirects_anonymous_to_login_with_next() {
    let decision = decide_authenticated(&SessionState::signed_out(), "/a/b?x=1");
    assert_eq!(
        decision,
        GuardDecision::Redirect(Redirect {
            target: "/login?next=%2Fa%2Fb%3Fx%3D1".to_owned(),
            remember: Some("/a/b?x=1".to_owned()),
        })
    );
}

#[test]
fn auth_guard_allows_any_signed_in_user() {
    assert!(decide_authenticated(&SessionState::signed_in(user(false)), "/x").is_allowed());
    assert!(decide_authenticated(&SessionState::signed_in(user(true)), "/x").is_allowed());
}

// =============================================================
// decide_superadmin
// =============================================================

#[test]
fn admin_guard_pending_while_loading() {
    for session in sessions_while_loading() {
        assert!(decide_superadmin(&session).is_pending());
    }
}

#[test]
fn admin_guard_sends_regular_user_to_root() {
    assert_eq!(
        decide_superadmin(&SessionState::signed_in(user(false))),
        GuardDecision::Redirect(Redirect { target: "/".to_owned(), remember: None })
    );
}

#[test]
fn admin_guard_sends_anonymous_to_root() {
    assert_eq!(
        decide_superadmin(&SessionState::signed_out()),
        GuardDecision::Redirect(Redirect { target: "/".to_owned(), remember: None })
    );
}

#[test]
fn admin_guard_allows_superadmin() {
    assert!(decide_superadmin(&SessionState::signed_in(user(true))).is_allowed());
}

// =============================================================
// follow_guard_decision
// =============================================================

fn recorder() -> (Rc<RefCell<Vec<(String, bool)>>>, impl Fn(&str, NavigateOptions)) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    (calls, move |path: &str, opts: NavigateOptions| {
        sink.borrow_mut().push((path.to_owned(), opts.replace));
    })
}

#[test]
fn follow_redirect_remembers_then_replaces_history() {
    let storage = MemoryStorage::new();
    let memory = NextDestination::new(storage.clone());
    let (calls, navigate) = recorder();

    let decision = decide_authenticated(&SessionState::signed_out(), "/a/b?x=1");
    follow_guard_decision(&decision, &memory, &navigate);

    assert_eq!(*calls.borrow(), vec![("/login?next=%2Fa%2Fb%3Fx%3D1".to_owned(), true)]);
    assert_eq!(memory.pop_and_forget(), Some("/a/b?x=1".to_owned()));
}

#[test]
fn follow_admin_redirect_does_not_remember() {
    let storage = MemoryStorage::new();
    let memory = NextDestination::new(storage.clone());
    let (calls, navigate) = recorder();

    follow_guard_decision(&decide_superadmin(&SessionState::signed_in(user(false))), &memory, &navigate);

    assert_eq!(*calls.borrow(), vec![("/".to_owned(), true)]);
    assert!(storage.is_empty());
}

#[test]
fn follow_pending_and_allow_do_nothing() {
    let storage = MemoryStorage::new();
    let memory = NextDestination::new(storage.clone());
    let (calls, navigate) = recorder();

    follow_guard_decision(&GuardDecision::Pending, &memory, &navigate);
    follow_guard_decision(&GuardDecision::Allow, &memory, &navigate);

    assert!(calls.borrow().is_empty());
    assert!(storage.is_empty());
}

#[test]
fn follow_redirect_navigates_even_when_storage_fails() {
    let storage = MemoryStorage::new();
    storage.set_unavailable(true);
    let memory = NextDestination::new(storage);
    let (calls, navigate) = recorder();

    follow_guard_decision(&decide_authenticated(&SessionState::signed_out(), "/x"), &memory, &navigate);

    assert_eq!(calls.borrow().len(), 1);
}
