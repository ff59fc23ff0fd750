//! Top navigation bar with session-aware links and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. It never redirects by itself; protected routes
//! rely on their guards.

use leptos::prelude::*;

use crate::state::session::{SessionState, sign_out};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let name = move || session.with(|s| s.display_name().map(str::to_owned));
    let on_logout = move |_| sign_out(session);

    view! {
        <header class="nav-bar">
            <a href="/" class="nav-bar__brand">"Houser"</a>
            <nav class="nav-bar__links">
                <a href="/listings/new">"Post a listing"</a>
                <Show when=move || session.with(SessionState::is_superadmin)>
                    <a href="/admin">"Admin"</a>
                </Show>
            </nav>
            <div class="nav-bar__session">
                <Show
                    when=move || session.with(SessionState::is_authenticated)
                    fallback=move || {
                        view! {
                            <Show when=move || !session.with(|s| s.loading)>
                                <a href="/login" class="nav-bar__login">"Sign in"</a>
                            </Show>
                        }
                    }
                >
                    <span class="nav-bar__name">{name}</span>
                    <button class="nav-bar__logout" on:click=on_logout>"Log out"</button>
                </Show>
            </div>
        </header>
    }
}
