//! Injectable key-value storage used by every persisted client store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session-scoped navigation memory and durable branding both persist through
//! [`KeyValueStorage`]. Browser builds back it with `sessionStorage` /
//! `localStorage`; tests and SSR use [`MemoryStorage`] or get
//! [`StorageError::Unavailable`] from [`BrowserStorage`].
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns a `Result`, but no caller in this crate surfaces
//! the error: stores log it and degrade to "nothing stored".

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Failure reading or writing persisted storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage object exists (SSR, privacy mode, disabled by policy).
    #[error("storage is unavailable")]
    Unavailable,
    /// The storage object exists but rejected the operation (quota, security).
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Minimal `Storage`-shaped interface.
pub trait KeyValueStorage {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    items: HashMap<String, String>,
    unavailable: bool,
}

/// In-memory storage. Clones share the same backing map, mirroring how every
/// handle to `window.localStorage` sees the same data.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStorage {
    /// Empty, available storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle simulated unavailability; while set, every call fails.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.borrow_mut().unavailable = unavailable;
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().items.is_empty()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.inner.borrow().unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.inner.borrow().items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner
            .borrow_mut()
            .items
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.borrow_mut().items.remove(key);
        Ok(())
    }
}

/// Which browser storage area to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageScope {
    /// `localStorage`: durable, shared by every tab of the origin.
    Durable,
    /// `sessionStorage`: scoped to one tab.
    Tab,
}

/// Browser `Storage` handle resolved on every call, so a storage area that
/// becomes unavailable mid-session degrades instead of panicking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserStorage {
    scope: StorageScope,
}

impl BrowserStorage {
    /// `window.localStorage`.
    pub fn local() -> Self {
        Self { scope: StorageScope::Durable }
    }

    /// `window.sessionStorage`.
    pub fn session() -> Self {
        Self { scope: StorageScope::Tab }
    }

    /// Which browser store this handle reads and writes.
    pub fn scope(self) -> StorageScope {
        self.scope
    }

    #[cfg(feature = "hydrate")]
    fn storage(self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = match self.scope {
            StorageScope::Durable => window.local_storage(),
            StorageScope::Tab => window.session_storage(),
        };
        storage
            .map_err(|e| StorageError::Access(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?
                .get_item(key)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
