//! Route authorization decisions and the redirect they trigger.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards must behave identically wherever they are used, so the policy
//! is a pure function of [`SessionState`] and the side effect is a separate
//! step that only remembers a destination and navigates.
//!
//! INVARIANTS
//! ==========
//! - While the session is loading the decision is always [`GuardDecision::Pending`].
//! - Every redirect replaces the current history entry so a protected route
//!   never stays behind as a back-navigation target.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::consts::{LOGIN_PATH, NEXT_QUERY_PARAM, ROOT_PATH};
use crate::state::session::SessionState;
use crate::util::next_destination::NextDestination;
use crate::util::storage::KeyValueStorage;

/// Where to send a visitor who may not see the current route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    /// Navigation target.
    pub target: String,
    /// Destination to store for after login, if any.
    pub remember: Option<String>,
}

/// Outcome of evaluating a guard against the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet; show a neutral waiting state.
    Pending,
    /// Render the protected content.
    Allow,
    /// Render nothing and navigate away.
    Redirect(Redirect),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Login route carrying `path` as the URL-encoded `next` parameter.
pub fn login_redirect_target(path: &str) -> String {
    format!("{LOGIN_PATH}?{NEXT_QUERY_PARAM}={}", urlencoding::encode(path))
}

/// Policy for routes that only need a signed-in user. `current_path` is the
/// full path and query of the route being guarded.
pub fn decide_authenticated(session: &SessionState, current_path: &str) -> GuardDecision {
    if session.loading {
        return GuardDecision::Pending;
    }
    if session.user.is_some() {
        return GuardDecision::Allow;
    }
    GuardDecision::Redirect(Redirect {
        target: login_redirect_target(current_path),
        remember: Some(current_path.to_owned()),
    })
}

/// Policy for admin routes: the user must exist and be a superadmin.
/// Everyone else goes to the root; signing in again would not help.
pub fn decide_superadmin(session: &SessionState) -> GuardDecision {
    if session.loading {
        return GuardDecision::Pending;
    }
    if session.user.as_ref().is_some_and(|u| u.is_superadmin) {
        return GuardDecision::Allow;
    }
    GuardDecision::Redirect(Redirect { target: ROOT_PATH.to_owned(), remember: None })
}

/// Carry out a decision: remember the destination if asked, then navigate
/// with history replacement. `Pending` and `Allow` do nothing.
pub fn follow_guard_decision<S, F>(decision: &GuardDecision, memory: &NextDestination<S>, navigate: &F)
where
    S: KeyValueStorage,
    F: Fn(&str, NavigateOptions),
{
    let GuardDecision::Redirect(redirect) = decision else {
        return;
    };
    if let Some(path) = redirect.remember.as_deref() {
        memory.remember(Some(path));
    }
    log::debug!("guard redirect to {}", redirect.target);
    navigate(&redirect.target, NavigateOptions { replace: true, ..NavigateOptions::default() });
}

/// Re-evaluate `decide` whenever it changes and follow redirects.
///
/// `decide` is a reactive closure (it reads the session signal); the effect
/// reruns when it does.
pub fn install_guard_redirect<S, D, F>(decide: D, memory: NextDestination<S>, navigate: F)
where
    S: KeyValueStorage + 'static,
    D: Fn() -> GuardDecision + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let decision = decide();
        follow_guard_decision(&decision, &memory, &navigate);
    });
}
