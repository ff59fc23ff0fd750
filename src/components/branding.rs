//! Applies persisted branding and keeps it current for the page's lifetime.

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "branding_test.rs"]
mod branding_test;

use leptos::prelude::*;

use crate::util::branding::BrandingMount;

/// Start branding sync on `<html>`. `None` outside the browser, so server
/// renders never hold listener registrations.
pub fn mount_document_branding() -> Option<BrandingMount> {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::branding::{BrandStore, BrandingSync, DocumentRoot};
        use crate::util::broadcast::WindowChannels;

        Some(BrandingSync::mount(BrandStore::browser(), &WindowChannels, DocumentRoot))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Mounts branding sync on `<html>`. Renders nothing.
///
/// Any number of these may be mounted; each listens independently and all of
/// them are released when their owner is cleaned up.
#[component]
pub fn BrandingBroadcaster() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let mount = StoredValue::new_local(mount_document_branding());
        on_cleanup(move || {
            let _ = mount.try_update_value(Option::take);
        });
    }
}
