//! Native share and print for listing pages.
//!
//! ERROR HANDLING
//! ==============
//! A user dismissing the share sheet rejects with `AbortError`; that is a
//! normal outcome ([`ShareOutcome::Cancelled`]), not an error. Any other share
//! failure falls back to copying the link.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// What happened when the user asked to share a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share sheet completed.
    Shared,
    /// The link was copied to the clipboard instead.
    Copied,
    /// The user dismissed the share sheet.
    Cancelled,
    /// Neither sharing nor copying is available.
    Unsupported,
}

impl ShareOutcome {
    /// Status line to show, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Copied => Some("Link copied."),
            Self::Unsupported => Some("Sharing is not available in this browser."),
            Self::Shared | Self::Cancelled => None,
        }
    }
}

/// Map a rejected `navigator.share()` to a final outcome. `None` means the
/// caller should fall back to copying.
pub fn outcome_for_share_rejection(error_name: Option<&str>) -> Option<ShareOutcome> {
    match error_name {
        Some("AbortError") => Some(ShareOutcome::Cancelled),
        _ => None,
    }
}

/// Share `url` through the native share sheet, or copy it when sharing is
/// unavailable.
pub async fn share_link(title: &str, url: &str) -> ShareOutcome {
    #[cfg(feature = "hydrate")]
    {
        use js_sys::{Function, Object, Promise, Reflect};
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;

        let Some(window) = web_sys::window() else {
            return ShareOutcome::Unsupported;
        };
        let navigator = window.navigator();

        let share = Reflect::get(&navigator, &JsValue::from_str("share"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        if let Some(share) = share {
            let data = Object::new();
            let _ = Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title));
            let _ = Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(url));
            if let Ok(promise) = share.call1(&navigator, &data) {
                match JsFuture::from(Promise::from(promise)).await {
                    Ok(_) => return ShareOutcome::Shared,
                    Err(err) => {
                        let name = err.dyn_ref::<web_sys::DomException>().map(web_sys::DomException::name);
                        if let Some(outcome) = outcome_for_share_rejection(name.as_deref()) {
                            return outcome;
                        }
                        log::debug!("share failed, copying instead: {err:?}");
                    }
                }
            }
        }

        let write_text = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .ok()
            .filter(|c| !c.is_undefined())
            .and_then(|clipboard| {
                Reflect::get(&clipboard, &JsValue::from_str("writeText"))
                    .ok()
                    .and_then(|f| f.dyn_into::<Function>().ok())
                    .map(|f| (clipboard, f))
            });
        let Some((clipboard, write_text)) = write_text else {
            return ShareOutcome::Unsupported;
        };
        let Ok(promise) = write_text.call1(&clipboard, &JsValue::from_str(url)) else {
            return ShareOutcome::Unsupported;
        };
        match JsFuture::from(Promise::from(promise)).await {
            Ok(_) => ShareOutcome::Copied,
            Err(_) => ShareOutcome::Unsupported,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, url);
        ShareOutcome::Unsupported
    }
}

/// Open the browser print dialog. Cancelling or failing is ignored.
pub fn print_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    }
}
