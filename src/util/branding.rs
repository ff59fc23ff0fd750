//! Persisted theme record and its application to the document root.
//!
//! SYSTEM CONTEXT
//! ==============
//! An admin edits branding once; every page load and every open tab should
//! pick it up. The record lives in `localStorage` under `houser.brand` and is
//! applied as CSS custom properties on `<html>`.
//!
//! DESIGN
//! ======
//! The writer applies its own change immediately and only *then* broadcasts,
//! because the native `storage` event never fires in the originating tab.
//! [`publish_brand`] encodes that order: save, apply, notify.
//!
//! TRADE-OFFS
//! ==========
//! Values are never validated; any string is written verbatim as a style
//! value. Malformed persisted data reads as "no branding".

#[cfg(test)]
#[path = "branding_test.rs"]
mod branding_test;

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::BRAND_STORAGE_KEY;
use crate::util::broadcast::{BrandChannels, Subscription};
use crate::util::storage::{BrowserStorage, KeyValueStorage};

/// Record keys understood by [`apply`], paired with the CSS custom property
/// each one drives.
pub const BRAND_PROPERTIES: &[(&str, &str)] = &[
    ("pageBg", "--page-bg"),
    ("textColor", "--text-color"),
    ("primary", "--brand-primary"),
    ("accent", "--brand-accent"),
    ("headerBg", "--header-bg"),
    ("headerText", "--header-text"),
];

/// CSS custom property for a record key, if the key is known.
pub fn css_property_for(key: &str) -> Option<&'static str> {
    BRAND_PROPERTIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, prop)| *prop)
}

/// Partial theme: any subset of keys, each mapped to a raw style value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BrandRecord(BTreeMap<String, String>);

impl BrandRecord {
    /// Empty record; applying it changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or overwrite one brand key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Drop a key, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Value for a brand key such as `primary`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'de> Deserialize<'de> for BrandRecord {
    /// Accepts any JSON object; entries whose value is not a string are
    /// dropped rather than failing the whole record.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let entries = raw
            .into_iter()
            .filter_map(|(k, v)| match v {
                serde_json::Value::String(s) => Some((k, s)),
                _ => None,
            })
            .collect();
        Ok(Self(entries))
    }
}

/// Element whose style receives brand custom properties.
pub trait StyleTarget {
    fn set_property(&self, name: &str, value: &str);
}

impl<T: StyleTarget + ?Sized> StyleTarget for Rc<T> {
    fn set_property(&self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }
}

/// The document's `<html>` element. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl StyleTarget for DocumentRoot {
    fn set_property(&self, name: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                return;
            };
            if let Err(e) = root.style().set_property(name, value) {
                log::debug!("brand property {name} not applied: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value);
        }
    }
}

/// Write each known key of `record` to `target`. Unknown keys are ignored;
/// keys absent from `record` keep whatever value `target` already has.
pub fn apply(record: &BrandRecord, target: &impl StyleTarget) {
    for (key, value) in record.iter() {
        if let Some(property) = css_property_for(key) {
            target.set_property(property, value);
        }
    }
}

/// Brand record persistence over any [`KeyValueStorage`].
#[derive(Clone, Debug)]
pub struct BrandStore<S> {
    storage: S,
}

impl BrandStore<BrowserStorage> {
    /// Store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage::local())
    }
}

impl<S: KeyValueStorage> BrandStore<S> {
    /// Store backed by `storage`, e.g. [`MemoryStorage`](crate::util::storage::MemoryStorage) in tests.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist `record`. Failures are logged and otherwise ignored.
    pub fn save(&self, record: &BrandRecord) {
        let raw = match serde_json::to_string(record) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("brand record not serialized: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set_item(BRAND_STORAGE_KEY, &raw) {
            log::debug!("brand record not saved: {e}");
        }
    }

    /// Read the persisted record. Missing, unreadable, or malformed data all
    /// read as `None`.
    pub fn load(&self) -> Option<BrandRecord> {
        let raw = match self.storage.get_item(BRAND_STORAGE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                log::debug!("brand record unreadable: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::debug!("brand record malformed, ignoring: {e}");
                None
            }
        }
    }

    /// Load and apply in one step; does nothing when no record exists.
    pub fn refresh(&self, target: &impl StyleTarget) {
        if let Some(record) = self.load() {
            apply(&record, target);
        }
    }
}

/// Save `record`, apply it to this document right away, then notify other
/// in-page observers. Other tabs learn about it from the native storage event.
pub fn publish_brand<S, C, T>(store: &BrandStore<S>, channels: &C, target: &T, record: &BrandRecord)
where
    S: KeyValueStorage,
    C: BrandChannels + ?Sized,
    T: StyleTarget,
{
    store.save(record);
    apply(record, target);
    channels.notify_brand_updated();
}

/// Listener registrations held while branding sync is mounted. Dropping it
/// unmounts: neither channel triggers another apply afterwards.
#[derive(Debug)]
pub struct BrandingMount {
    _in_page: Subscription,
    _cross_tab: Subscription,
}

impl BrandingMount {
    pub fn unmount(self) {
        drop(self);
    }
}

/// Keeps a [`StyleTarget`] in step with the persisted brand record.
pub struct BrandingSync;

impl BrandingSync {
    /// Apply the persisted record now, then re-apply whenever the in-page
    /// signal fires or another tab writes `houser.brand`.
    pub fn mount<S, C, T>(store: BrandStore<S>, channels: &C, target: T) -> BrandingMount
    where
        S: KeyValueStorage + 'static,
        C: BrandChannels + ?Sized,
        T: StyleTarget + 'static,
    {
        let refresh: Rc<dyn Fn()> = Rc::new(move || store.refresh(&target));
        refresh();

        let in_page = channels.subscribe_brand_updated(Rc::clone(&refresh));

        let on_storage = Rc::clone(&refresh);
        let cross_tab = channels.subscribe_storage_changed(Rc::new(move |key: Option<&str>| {
            if key == Some(BRAND_STORAGE_KEY) {
                on_storage();
            }
        }));

        BrandingMount { _in_page: in_page, _cross_tab: cross_tab }
    }
}
