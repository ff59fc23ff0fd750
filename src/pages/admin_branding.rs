//! Branding editor for superadmins.
//!
//! SYSTEM CONTEXT
//! ==============
//! Saving applies the theme to this page immediately, then signals other
//! mounted broadcasters; other tabs follow through the native storage event.

#[cfg(test)]
#[path = "admin_branding_test.rs"]
mod admin_branding_test;

use leptos::prelude::*;

use crate::components::guard::RequireAdmin;
use crate::util::branding::{BRAND_PROPERTIES, BrandRecord, BrandStore, DocumentRoot, publish_brand};
use crate::util::broadcast::WindowChannels;

/// Human label for a brand record key.
pub fn brand_key_label(key: &str) -> &'static str {
    match key {
        "pageBg" => "Page background",
        "textColor" => "Text color",
        "primary" => "Primary color",
        "accent" => "Accent color",
        "headerBg" => "Header background",
        "headerText" => "Header text",
        _ => "Other",
    }
}

/// Build a record from edited fields. Blank fields are left out so they fall
/// back to the stylesheet defaults.
pub fn record_from_fields<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> BrandRecord {
    fields
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .fold(BrandRecord::new(), |record, (key, value)| record.with(key, value.trim()))
}

#[component]
pub fn AdminBrandingPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <BrandingEditor/>
        </RequireAdmin>
    }
}

#[component]
fn BrandingEditor() -> impl IntoView {
    let stored = BrandStore::browser().load().unwrap_or_default();
    let fields: Vec<(&'static str, RwSignal<String>)> = BRAND_PROPERTIES
        .iter()
        .map(|(key, _)| (*key, RwSignal::new(stored.get(key).unwrap_or_default().to_owned())))
        .collect();
    let saved = RwSignal::new(false);

    let fields_for_save = fields.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let values: Vec<(&str, String)> = fields_for_save.iter().map(|(k, v)| (*k, v.get())).collect();
        let record = record_from_fields(values.iter().map(|(k, v)| (*k, v.as_str())));
        publish_brand(&BrandStore::browser(), &WindowChannels, &DocumentRoot, &record);
        log::info!("branding saved with {} keys", record.len());
        saved.set(true);
    };

    view! {
        <main class="admin-branding-page">
            <h1>"Branding"</h1>
            <form class="branding-form" on:submit=on_submit>
                {fields
                    .into_iter()
                    .map(|(key, value)| {
                        view! {
                            <label class="branding-form__field">
                                {brand_key_label(key)}
                                <input
                                    type="text"
                                    placeholder="#ffffff"
                                    prop:value=move || value.get()
                                    on:input=move |ev| {
                                        saved.set(false);
                                        value.set(event_target_value(&ev));
                                    }
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                <button class="branding-form__submit" type="submit">"Save branding"</button>
            </form>
            <Show when=move || saved.get()>
                <p class="branding-form__message">"Branding saved."</p>
            </Show>
        </main>
    }
}
