//! Public landing page listing the newest classifieds.

use leptos::prelude::*;

use crate::components::listing_card::ListingCard;
use crate::net::types::Listing;

#[component]
pub fn HomePage() -> impl IntoView {
    let listings = RwSignal::new(Vec::<Listing>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<&'static str>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_listings().await {
            Ok(items) => {
                let _ = listings.try_set(items);
            }
            Err(e) => {
                log::warn!("listings unavailable: {e}");
                let _ = error.try_set(Some(e.user_message()));
            }
        }
        let _ = loading.try_set(false);
    });

    view! {
        <main class="home-page">
            <h1 class="home-page__title">"Latest listings"</h1>
            <Show when=move || error.get().is_some()>
                <p class="home-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="home-page__loading">"Loading listings..."</p> }
            >
                <div class="listing-grid">
                    <For
                        each=move || listings.get()
                        key=|listing| listing.id.clone()
                        children=|listing| view! { <ListingCard listing=listing/> }
                    />
                </div>
            </Show>
        </main>
    }
}
