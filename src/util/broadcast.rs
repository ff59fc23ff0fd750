//! Publish/subscribe channels that keep branding in sync.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two channels carry "branding changed" notices:
//! - the in-page `houser:brand:updated` event, seen by every listener in the
//!   current tab (including the sender);
//! - the native `storage` event, seen only by *other* tabs of the origin.
//!
//! [`BrandChannels`] hides which mechanism delivers them. [`WindowChannels`]
//! is the browser implementation; [`LocalChannels`] is an in-memory bus used
//! by tests and anywhere no `window` exists.
//!
//! LIFECYCLE
//! =========
//! Every subscribe call returns a [`Subscription`]. Dropping it removes the
//! listener, so a listener can never outlive the component that owns it.

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod broadcast_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Callback for the in-page "brand updated" signal.
pub type SignalHandler = Rc<dyn Fn()>;

/// Callback for cross-tab storage changes; receives the changed key, or
/// `None` when the other tab cleared all storage.
pub type StorageHandler = Rc<dyn Fn(Option<&str>)>;

/// Listener registration released on drop.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Subscription that runs `release` exactly once, on [`Self::unsubscribe`]
    /// or drop, whichever comes first.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Registration that holds nothing; used when no listener could be added.
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Explicitly release the listener.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Notification channels for branding changes.
pub trait BrandChannels {
    /// Listen for the in-page "brand updated" signal.
    fn subscribe_brand_updated(&self, handler: SignalHandler) -> Subscription;

    /// Listen for storage writes made by other tabs.
    fn subscribe_storage_changed(&self, handler: StorageHandler) -> Subscription;

    /// Tell every in-page listener the brand record was saved.
    fn notify_brand_updated(&self);
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    brand: Vec<(u64, SignalHandler)>,
    storage: Vec<(u64, StorageHandler)>,
}

impl Registry {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory channel bus. Clones share listeners.
#[derive(Clone, Default)]
pub struct LocalChannels {
    registry: Rc<RefCell<Registry>>,
}

impl LocalChannels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a storage-change notice as if another tab wrote `key`.
    pub fn emit_storage_changed(&self, key: Option<&str>) {
        let handlers: Vec<StorageHandler> = self
            .registry
            .borrow()
            .storage
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in handlers {
            handler(key);
        }
    }

    /// Total number of live listeners on both channels.
    pub fn listener_count(&self) -> usize {
        let registry = self.registry.borrow();
        registry.brand.len() + registry.storage.len()
    }

    fn release(registry: &Weak<RefCell<Registry>>, id: u64) -> impl FnOnce() + 'static {
        let registry = registry.clone();
        move || {
            if let Some(registry) = registry.upgrade() {
                let mut registry = registry.borrow_mut();
                registry.brand.retain(|(i, _)| *i != id);
                registry.storage.retain(|(i, _)| *i != id);
            }
        }
    }
}

impl BrandChannels for LocalChannels {
    fn subscribe_brand_updated(&self, handler: SignalHandler) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.allocate_id();
            registry.brand.push((id, handler));
            id
        };
        Subscription::new(Self::release(&Rc::downgrade(&self.registry), id))
    }

    fn subscribe_storage_changed(&self, handler: StorageHandler) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.allocate_id();
            registry.storage.push((id, handler));
            id
        };
        Subscription::new(Self::release(&Rc::downgrade(&self.registry), id))
    }

    fn notify_brand_updated(&self) {
        // Snapshot first: handlers may subscribe or unsubscribe while running.
        let handlers: Vec<SignalHandler> = self
            .registry
            .borrow()
            .brand
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in handlers {
            handler();
        }
    }
}

/// Channels backed by `window` events. Without a browser every
/// subscription is empty and notifications are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowChannels;

impl BrandChannels for WindowChannels {
    fn subscribe_brand_updated(&self, handler: SignalHandler) -> Subscription {
        #[cfg(feature = "hydrate")]
        {
            listen(crate::consts::BRAND_UPDATED_EVENT, move |_ev| handler())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = handler;
            Subscription::empty()
        }
    }

    fn subscribe_storage_changed(&self, handler: StorageHandler) -> Subscription {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            listen(crate::consts::STORAGE_EVENT, move |ev| {
                let key = ev
                    .dyn_ref::<web_sys::StorageEvent>()
                    .and_then(web_sys::StorageEvent::key);
                handler(key.as_deref());
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = handler;
            Subscription::empty()
        }
    }

    fn notify_brand_updated(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            match web_sys::CustomEvent::new(crate::consts::BRAND_UPDATED_EVENT) {
                Ok(event) => {
                    let _ = window.dispatch_event(&event);
                }
                Err(e) => log::debug!("brand update event not created: {e:?}"),
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn listen(event: &'static str, handler: impl Fn(web_sys::Event) + 'static) -> Subscription {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return Subscription::empty();
    };
    let closure = Closure::<dyn Fn(web_sys::Event)>::new(handler);
    if let Err(e) = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::debug!("{event} listener not added: {e:?}");
        return Subscription::empty();
    }
    Subscription::new(move || {
        let _ = window.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    })
}
