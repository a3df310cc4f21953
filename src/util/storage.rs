//! Key/value persistence backends for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStorage` isolates the `window.localStorage` glue so the credential
//! store stays testable; `MemoryStorage` stands in for it in tests and SSR.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (storage disabled, quota exceeded, no window) surfaces as
//! `SessionError::StorageUnavailable`. Nothing here retries.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::state::session::SessionError;

/// String key/value persistence shared by the whole process.
pub trait KeyValueStorage {
    /// Read `key`, `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend cannot be reached.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Storage handle shared between the store and anything that outlives a render.
pub type SharedStorage = std::sync::Arc<dyn KeyValueStorage + Send + Sync>;

/// `window.localStorage`, looked up on every call so the handle never
/// outlives a page and the type stays `Send + Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .ok_or_else(|| SessionError::StorageUnavailable("no window".to_owned()))?
        .local_storage()
        .map_err(|e| SessionError::StorageUnavailable(format!("{e:?}")))?
        .ok_or_else(|| SessionError::StorageUnavailable("localStorage disabled".to_owned()))
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| SessionError::StorageUnavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(unavailable_outside_browser())
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| SessionError::StorageUnavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(unavailable_outside_browser())
        }
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| SessionError::StorageUnavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(unavailable_outside_browser())
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable_outside_browser() -> SessionError {
    SessionError::StorageUnavailable("localStorage requires a browser".to_owned())
}

/// In-process backend. `fail_writes` makes every `set` fail after
/// `writes_before_failure` successful writes, to exercise quota errors.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
    fail_writes: Mutex<Option<usize>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing any failure switch.
    pub fn insert(&self, key: &str, value: &str) {
        lock(&self.items).insert(key.to_owned(), value.to_owned());
    }

    /// Raw value currently held for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        lock(&self.items).get(key).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.items).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allow `writes_before_failure` more writes, then reject every write.
    pub fn fail_writes_after(&self, writes_before_failure: usize) {
        *lock(&self.fail_writes) = Some(writes_before_failure);
    }

    pub fn heal(&self) {
        *lock(&self.fail_writes) = None;
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut budget = lock(&self.fail_writes);
        match budget.as_mut() {
            Some(0) => return Err(SessionError::StorageUnavailable("quota exceeded".to_owned())),
            Some(remaining) => *remaining -= 1,
            None => {}
        }
        drop(budget);
        self.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        lock(&self.items).remove(key);
        Ok(())
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        (**self).remove(key)
    }
}
