//! Login page with email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards send visitors here with `?next=<path>`. After a successful sign-in
//! the remembered destination is always consumed, and the visitor continues
//! to the safest available target.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::consts::NEXT_QUERY_PARAM;
use crate::net::types::LoginRequest;
use crate::state::session::SessionState;
use crate::util::next_destination::{NextDestination, post_login_destination};

/// Trim and check login form input.
///
/// # Errors
///
/// Returns the message to show when either field is unusable.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let next_param = move || query.read().get(NEXT_QUERY_PARAM);

    // Already signed in (e.g. back-navigation to /login): continue onward.
    let navigate_resolved = navigate.clone();
    Effect::new(move || {
        if session.with(SessionState::is_authenticated) && !busy.get_untracked() {
            let remembered = NextDestination::browser().pop_and_forget();
            let target = post_login_destination(next_param().as_deref(), remembered);
            navigate_resolved(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let next = next_param();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(user) => {
                        log::info!("signed in as {}", user.id);
                        let remembered = NextDestination::browser().pop_and_forget();
                        let target = post_login_destination(next.as_deref(), remembered);
                        session.set(SessionState::signed_in(user));
                        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(e) => {
                        log::warn!("sign-in failed: {e}");
                        info.set(e.user_message().to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Houser"</h1>
                <p class="login-card__subtitle">"Sign in to manage your listings"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
