//! Public user profile with the user's published listings.
//!
//! INVARIANTS
//! ==========
//! A response is shown only while its requested id is still the routed id;
//! late answers for an earlier route are dropped.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::listing_card::ListingCard;
use crate::net::types::UserProfile;
use crate::state::session::SessionState;

/// Whether a fetch for `requested` should still be applied.
pub fn is_current_request(routed: Option<&str>, requested: &str) -> bool {
    routed == Some(requested)
}

/// Whether the signed-in user owns `profile` and may edit its listings.
pub fn is_own_profile(profile: &UserProfile, session: &SessionState) -> bool {
    session.user.as_ref().is_some_and(|u| u.id == profile.id)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let profile = RwSignal::new(None::<UserProfile>);
    let missing = RwSignal::new(false);

    let user_id = move || params.read().get("id").unwrap_or_default();

    Effect::new(move || {
        let id = user_id();
        profile.set(None);
        missing.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_user_profile(&id).await;
            let routed = params.try_with_untracked(|p| p.get("id")).flatten();
            if !is_current_request(routed.as_deref(), &id) {
                log::debug!("dropping stale profile response for {id}");
                return;
            }
            match result {
                Some(p) => {
                    let _ = profile.try_set(Some(p));
                }
                None => {
                    let _ = missing.try_set(true);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <main class="profile-page">
            <Show when=move || missing.get()>
                <p class="profile-page__missing">"This profile does not exist."</p>
            </Show>
            {move || {
                profile
                    .get()
                    .map(|p| {
                        let editable = session.with(|s| is_own_profile(&p, s));
                        view! {
                            <header class="profile-page__header">
                                <h1>{p.name.clone()}</h1>
                                {p.member_since.clone().map(|since| view! {
                                    <p class="profile-page__since">"Member since " {since}</p>
                                })}
                            </header>
                            <section class="listing-grid">
                                {p.listings
                                    .into_iter()
                                    .map(|listing| view! { <ListingCard listing=listing editable=editable/> })
                                    .collect_view()}
                            </section>
                        }
                    })
            }}
        </main>
    }
}
