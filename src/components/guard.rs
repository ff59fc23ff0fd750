//! Route guard components wrapping protected page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages wrap their body in [`RequireAuth`] or [`RequireAdmin`]. The guard
//! reads the session from context, decides with the pure policies in
//! `util::guard`, and redirects through the router with history replacement.
//! These guards shape navigation only; the API still authorizes every call.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;
use crate::util::guard::{GuardDecision, decide_authenticated, decide_superadmin, install_guard_redirect};
use crate::util::next_destination::NextDestination;

/// Neutral placeholder shown while the session resolves.
#[component]
pub fn WaitingIndicator() -> impl IntoView {
    view! {
        <div class="guard-waiting" aria-busy="true">
            <span class="guard-waiting__spinner"></span>
        </div>
    }
}

/// Join a router pathname and search string into `path?query`.
///
/// Accepts `search` with or without its leading `?`.
pub fn path_with_query(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{query}")
    }
}

/// What a guard puts on screen for a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// [`WaitingIndicator`] while the session resolves.
    Waiting,
    /// The protected children.
    Content,
    /// Nothing; a redirect is under way.
    Nothing,
}

pub fn guard_view(decision: &GuardDecision) -> GuardView {
    match decision {
        GuardDecision::Pending => GuardView::Waiting,
        GuardDecision::Allow => GuardView::Content,
        GuardDecision::Redirect(_) => GuardView::Nothing,
    }
}

fn render_decision(decision: &GuardDecision, children: &ChildrenFn) -> AnyView {
    match guard_view(decision) {
        GuardView::Waiting => view! { <WaitingIndicator/> }.into_any(),
        GuardView::Content => children().into_any(),
        GuardView::Nothing => ().into_any(),
    }
}

/// Render children only for a signed-in user; otherwise remember the current
/// location and replace it with `/login?next=...`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    let decision = Memo::new(move |_| {
        let current = path_with_query(&location.pathname.get(), &location.search.get());
        session.with(|s| decide_authenticated(s, &current))
    });
    install_guard_redirect(move || decision.get(), NextDestination::browser(), use_navigate());

    move || decision.with(|d| render_decision(d, &children))
}

/// Render children only for a superadmin. Anyone else is sent to the root
/// and sees nothing in the meantime.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let decision = Memo::new(move |_| session.with(decide_superadmin));
    install_guard_redirect(move || decision.get(), NextDestination::browser(), use_navigate());

    move || decision.with(|d| render_decision(d, &children))
}
