//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The session is resolved once
//! per page load from `/api/auth/me`; until then it is *unknown*, not
//! anonymous. A backend that cannot answer keeps the session unknown and is
//! retried with backoff; only 401/403 resolves to signed out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::User;

const RETRY_BASE_MS: u32 = 1_000;
const RETRY_MAX_MS: u32 = 15_000;

/// Authentication state tracking the current user and loading status.
///
/// `user: None` only means "signed out" once `loading` is `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// Initial state while `/api/auth/me` is in flight.
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    /// Resolved state for a signed-in user.
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    /// Resolved state with nobody signed in.
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    pub fn is_superadmin(&self) -> bool {
        !self.loading && self.user.as_ref().is_some_and(|u| u.is_superadmin)
    }

    /// Display name for chrome, if signed in.
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}

/// Whether a failed `/api/auth/me` lookup should be retried.
///
/// Outages and server errors are retried. A body that does not parse as a
/// user will not get better on retry and resolves to signed out.
pub fn should_retry_session_lookup(err: &ApiError) -> bool {
    match err {
        ApiError::Network(_) => true,
        ApiError::Status(status) => !crate::net::api::is_signed_out_status(*status),
        ApiError::Decode(_) | ApiError::Unavailable => false,
    }
}

/// Backoff before retry number `attempt` (zero-based), doubling from one
/// second and capped at fifteen.
pub fn session_retry_delay_ms(attempt: u32) -> u32 {
    RETRY_BASE_MS
        .checked_shl(attempt)
        .filter(|ms| *ms <= RETRY_MAX_MS)
        .unwrap_or(RETRY_MAX_MS)
}

/// Put a resolving session in context and start resolving it.
///
/// The lookup is retried until the backend answers. If the owning scope is
/// gone in the meantime, the loop stops and the result is dropped.
pub fn provide_session() -> RwSignal<SessionState> {
    let session = RwSignal::new(SessionState::resolving());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let mut attempt = 0;
        let resolved = loop {
            match crate::net::api::fetch_current_user().await {
                Ok(Some(user)) => break SessionState::signed_in(user),
                Ok(None) => {
                    log::debug!("no active session");
                    break SessionState::signed_out();
                }
                Err(e) if should_retry_session_lookup(&e) => {
                    let delay = session_retry_delay_ms(attempt);
                    log::warn!("session lookup failed ({e}); retrying in {delay}ms");
                    gloo_timers::future::TimeoutFuture::new(delay).await;
                    if session.try_get_untracked().is_none() {
                        return;
                    }
                    attempt = attempt.saturating_add(1);
                }
                Err(e) => {
                    log::warn!("session lookup failed ({e}); treating as signed out");
                    break SessionState::signed_out();
                }
            }
        };
        let _ = session.try_set(resolved);
    });

    session
}

/// Sign the current user out and return them to the login page.
pub fn sign_out(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        let _ = session.try_set(SessionState::signed_out());
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href(crate::consts::LOGIN_PATH);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    session.set(SessionState::signed_out());
}
