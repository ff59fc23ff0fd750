//! Listing summary card with share and print actions.

#[cfg(test)]
#[path = "listing_card_test.rs"]
mod listing_card_test;

use leptos::prelude::*;

use crate::net::types::Listing;

/// Format a whole-unit price with thin grouping, e.g. `1 250 000 €`.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    let sign = if price < 0 { "-" } else { "" };
    format!("{sign}{grouped} €")
}

/// Path to a listing on its owner's profile, used for sharing.
pub fn listing_share_path(listing: &Listing) -> String {
    format!("/users/{}#listing-{}", urlencoding::encode(&listing.owner_id), listing.id)
}

#[component]
pub fn ListingCard(listing: Listing, #[prop(optional)] editable: bool) -> impl IntoView {
    let status = RwSignal::new(None::<&'static str>);
    let share_path = listing_share_path(&listing);
    let title = listing.title.clone();
    let edit_href = format!("/listings/{}/edit", urlencoding::encode(&listing.id));

    let on_share = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let title = title.clone();
            let share_path = share_path.clone();
            leptos::task::spawn_local(async move {
                let url = web_sys::window()
                    .and_then(|w| w.location().origin().ok())
                    .map_or_else(|| share_path.clone(), |origin| format!("{origin}{share_path}"));
                let outcome = crate::util::share::share_link(&title, &url).await;
                status.set(outcome.message());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&title, &share_path);
        }
    };
    let on_print = move |_| crate::util::share::print_page();

    view! {
        <article class="listing-card" id=format!("listing-{}", listing.id)>
            <h3 class="listing-card__title">{listing.title.clone()}</h3>
            <p class="listing-card__meta">
                <span class="listing-card__price">{format_price(listing.price)}</span>
                " · "
                <span class="listing-card__city">{listing.city.clone()}</span>
            </p>
            <p class="listing-card__description">{listing.description.clone()}</p>
            <div class="listing-card__actions">
                <button class="listing-card__action" on:click=on_share>"Share"</button>
                <button class="listing-card__action" on:click=on_print>"Print"</button>
                <Show when=move || editable>
                    <a class="listing-card__action" href=edit_href.clone()>"Edit"</a>
                </Show>
            </div>
            <Show when=move || status.get().is_some()>
                <p class="listing-card__status">{move || status.get().unwrap_or_default()}</p>
            </Show>
        </article>
    }
}
