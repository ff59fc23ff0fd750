//! Tab-scoped memory of where an unauthenticated visitor was headed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards call [`NextDestination::remember`] before bouncing a visitor to
//! `/login`; the login page calls [`NextDestination::pop_and_forget`] right
//! after a successful sign-in. Only one pending destination exists at a time.

#[cfg(test)]
#[path = "next_destination_test.rs"]
mod next_destination_test;

use crate::consts::{NEXT_AFTER_LOGIN_KEY, ROOT_PATH};
use crate::util::storage::{BrowserStorage, KeyValueStorage};

/// Single-slot destination store over any [`KeyValueStorage`].
#[derive(Clone, Debug)]
pub struct NextDestination<S> {
    storage: S,
}

impl NextDestination<BrowserStorage> {
    /// Store backed by `window.sessionStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage::session())
    }
}

impl<S: KeyValueStorage> NextDestination<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Record `path`, or the current location when `None`. Overwrites any
    /// earlier value. Storage failures are ignored.
    pub fn remember(&self, path: Option<&str>) {
        let path = path.map_or_else(current_location, str::to_owned);
        if let Err(e) = self.storage.set_item(NEXT_AFTER_LOGIN_KEY, &path) {
            log::debug!("next destination not remembered: {e}");
        }
    }

    /// Take the remembered destination, clearing it. Returns `None` when
    /// nothing was stored or storage cannot be read.
    pub fn pop_and_forget(&self) -> Option<String> {
        let value = match self.storage.get_item(NEXT_AFTER_LOGIN_KEY) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("next destination unreadable: {e}");
                return None;
            }
        };
        if let Err(e) = self.storage.remove_item(NEXT_AFTER_LOGIN_KEY) {
            log::debug!("next destination not cleared: {e}");
        }
        value.filter(|v| !v.is_empty())
    }
}

/// Current `pathname + search`, or `/` outside a browser.
pub fn current_location() -> String {
    #[cfg(feature = "hydrate")]
    {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return ROOT_PATH.to_owned();
        };
        let path = location.pathname().unwrap_or_else(|_| ROOT_PATH.to_owned());
        let search = location.search().unwrap_or_default();
        format!("{path}{search}")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ROOT_PATH.to_owned()
    }
}

/// Whether `path` is a same-origin absolute path safe to navigate to.
///
/// Rejects protocol-relative (`//host`) and backslash tricks (`/\host`) that
/// browsers resolve to another origin.
pub fn is_safe_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}

/// Where to send a user right after signing in.
///
/// Prefers the login route's `next` query parameter, then the remembered
/// destination, then the root. Unsafe candidates are skipped.
pub fn post_login_destination(next_param: Option<&str>, remembered: Option<String>) -> String {
    if let Some(next) = next_param.filter(|p| is_safe_local_path(p)) {
        return next.to_owned();
    }
    remembered
        .filter(|p| is_safe_local_path(p))
        .unwrap_or_else(|| ROOT_PATH.to_owned())
}
