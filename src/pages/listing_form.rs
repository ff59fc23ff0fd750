//! Create/edit form for a classified listing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/listings/new` and `/listings/:id/edit`, both behind
//! [`RequireAuth`]. The backend decides whether the signed-in user may edit a
//! given listing; this page only shapes the request.

#[cfg(test)]
#[path = "listing_form_test.rs"]
mod listing_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::guard::RequireAuth;
use crate::net::types::ListingDraft;

const MAX_TITLE_LEN: usize = 120;

/// Parse a price typed by a person: spaces, commas, and underscores are
/// ignored; the result must be a non-negative integer.
pub fn parse_price(input: &str) -> Option<i64> {
    let digits: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '_')
        .collect();
    digits.parse::<i64>().ok().filter(|p| *p >= 0)
}

/// Trim and check form fields, producing the request body.
///
/// # Errors
///
/// Returns the message to show for the first invalid field.
pub fn validate_listing_draft(
    title: &str,
    price: &str,
    city: &str,
    description: &str,
) -> Result<ListingDraft, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Enter a title.");
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err("Keep the title under 120 characters.");
    }
    let Some(price) = parse_price(price) else {
        return Err("Enter the price as a whole number.");
    };
    let city = city.trim();
    if city.is_empty() {
        return Err("Enter a city.");
    }
    Ok(ListingDraft {
        title: title.to_owned(),
        price,
        city: city.to_owned(),
        description: description.trim().to_owned(),
    })
}

/// Route component; the listing id is present only on the edit route.
#[component]
pub fn ListingFormPage() -> impl IntoView {
    let params = use_params_map();
    let listing_id = Memo::new(move |_| params.read().get("id"));

    view! {
        <RequireAuth>
            {move || view! { <ListingForm listing_id=listing_id.get()/> }}
        </RequireAuth>
    }
}

#[component]
fn ListingForm(listing_id: Option<String>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let heading = if listing_id.is_some() { "Edit listing" } else { "New listing" };

    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = listing_id.clone() {
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_listing(&id).await {
                    Ok(listing) => {
                        let _ = title.try_set(listing.title);
                        let _ = price.try_set(listing.price.to_string());
                        let _ = city.try_set(listing.city);
                        let _ = description.try_set(listing.description);
                    }
                    Err(e) => {
                        let _ = info.try_set(e.user_message().to_owned());
                    }
                }
                let _ = busy.try_set(false);
            });
        }
    }

    let navigate = leptos_router::hooks::use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_listing_draft(&title.get(), &price.get(), &city.get(), &description.get()) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let listing_id = listing_id.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::save_listing(listing_id.as_deref(), &draft).await {
                    Ok(saved) => {
                        let target = format!("/users/{}", urlencoding::encode(&saved.owner_id));
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("listing not saved: {e}");
                        let _ = info.try_set(e.user_message().to_owned());
                        let _ = busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, &listing_id, &navigate);
        }
    };

    view! {
        <main class="listing-form-page">
            <h1>{heading}</h1>
            <form class="listing-form" on:submit=on_submit>
                <label class="listing-form__field">
                    "Title"
                    <input
                        type="text"
                        maxlength="120"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="listing-form__field">
                    "Price"
                    <input
                        type="text"
                        inputmode="numeric"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                <label class="listing-form__field">
                    "City"
                    <input
                        type="text"
                        prop:value=move || city.get()
                        on:input=move |ev| city.set(event_target_value(&ev))
                    />
                </label>
                <label class="listing-form__field">
                    "Description"
                    <textarea
                        rows="6"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="listing-form__submit" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="listing-form__message">{move || info.get()}</p>
            </Show>
        </main>
    }
}
