//! Credential store: the persisted session and its in-process mirror.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is three string keys in persistent storage (token, admin flag,
//! display name). This module is the only writer of those keys; every other
//! part of the console reads identity through `state::identity`.
//!
//! DESIGN
//! ======
//! `set` and `clear` treat the three keys as one record. A failed write rolls
//! back the keys already written; when the rollback itself cannot write, the
//! record is removed. A token paired with another session's admin flag is
//! never observable. The cache is filled lazily on the first `get` and is only
//! replaced by `set`/`clear`, under the same lock, so it cannot drift from
//! storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::StorageKeys;
use crate::util::storage::{KeyValueStorage, SharedStorage};

/// Persisted value of the admin flag that grants the admin role.
pub const ADMIN_FLAG_TRUE: &str = "true";
const ADMIN_FLAG_FALSE: &str = "false";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("malformed token: {0}")]
    MalformedToken(String),
}

/// Access level of the current browser user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Anonymous,
    User,
    Admin,
}

/// A stored session. Only exists while a token is present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    /// Raw persisted admin flag; only the literal `"true"` means admin.
    pub admin_flag: Option<String>,
    pub display_name: Option<String>,
}

impl Session {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.admin_flag.as_deref() == Some(ADMIN_FLAG_TRUE)
    }

    #[must_use]
    pub fn role(&self) -> Role {
        if self.is_admin() { Role::Admin } else { Role::User }
    }
}

/// Role for an optional session: absent session is always anonymous.
#[must_use]
pub fn role_of(session: Option<&Session>) -> Role {
    session.map_or(Role::Anonymous, Session::role)
}

/// The process-wide store handed to the router, dispatcher and pages.
pub type SharedStore = Arc<CredentialStore<SharedStorage>>;

/// Durable session persistence mirrored into an in-process cache.
#[derive(Debug)]
pub struct CredentialStore<S> {
    storage: S,
    keys: StorageKeys,
    cache: Mutex<Option<Session>>,
}

impl<S: KeyValueStorage> CredentialStore<S> {
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self { storage, keys, cache: Mutex::new(None) }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Current session, loading it from storage when the cache is empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if storage cannot be read.
    pub fn get(&self) -> Result<Option<Session>, SessionError> {
        let mut cache = self.lock_cache();
        self.load_into(&mut cache)
    }

    /// Persist a complete session and replace the cache with it.
    ///
    /// # Errors
    ///
    /// Returns `MalformedToken` for an empty token and `StorageUnavailable`
    /// if any key cannot be written; in the latter case storage is restored
    /// to its previous contents.
    pub fn set(&self, token: &str, is_admin: bool, display_name: &str) -> Result<Session, SessionError> {
        if token.is_empty() {
            return Err(SessionError::MalformedToken("empty token".to_owned()));
        }
        let mut cache = self.lock_cache();
        let flag = if is_admin { ADMIN_FLAG_TRUE } else { ADMIN_FLAG_FALSE };
        let writes = [
            (self.keys.token.as_str(), token),
            (self.keys.is_admin.as_str(), flag),
            (self.keys.user_name.as_str(), display_name),
        ];

        let previous = writes
            .iter()
            .map(|(key, _)| self.storage.get(key))
            .collect::<Result<Vec<_>, _>>()?;

        for (written, (key, value)) in writes.iter().enumerate() {
            if let Err(err) = self.storage.set(key, value) {
                log::error!("session write failed at {key}: {err}");
                self.rollback(&writes[..written], &previous);
                *cache = None;
                return Err(err);
            }
        }

        let session = Session {
            token: token.to_owned(),
            admin_flag: Some(flag.to_owned()),
            display_name: non_empty(Some(display_name.to_owned())),
        };
        *cache = Some(session.clone());
        Ok(session)
    }

    /// Remove the session and return the token that was stored, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if storage cannot be read or a key cannot
    /// be removed. The cache is dropped either way.
    pub fn clear(&self) -> Result<Option<String>, SessionError> {
        let mut cache = self.lock_cache();
        let previous = self.load_into(&mut cache).map(|s| s.map(|s| s.token));
        *cache = None;

        let mut first_err = None;
        for key in [&self.keys.token, &self.keys.is_admin, &self.keys.user_name] {
            if let Err(err) = self.storage.remove(key) {
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => previous,
        }
    }

    fn load_into(&self, cache: &mut Option<Session>) -> Result<Option<Session>, SessionError> {
        if let Some(session) = cache.as_ref() {
            return Ok(Some(session.clone()));
        }
        let Some(token) = non_empty(self.storage.get(&self.keys.token)?) else {
            return Ok(None);
        };
        let session = Session {
            token,
            admin_flag: self.storage.get(&self.keys.is_admin)?,
            display_name: non_empty(self.storage.get(&self.keys.user_name)?),
        };
        *cache = Some(session.clone());
        Ok(Some(session))
    }

    /// Restore the keys in `written` to `previous`. If any restore fails the
    /// whole record is removed instead, leaving no session at all.
    fn rollback(&self, written: &[(&str, &str)], previous: &[Option<String>]) {
        let mut restored = true;
        for ((key, _), old) in written.iter().zip(previous) {
            let result = match old {
                Some(value) => self.storage.set(key, value),
                None => self.storage.remove(key),
            };
            if let Err(err) = result {
                log::error!("session rollback failed at {key}: {err}");
                restored = false;
                break;
            }
        }
        if restored {
            return;
        }
        for key in [&self.keys.token, &self.keys.is_admin, &self.keys.user_name] {
            if let Err(err) = self.storage.remove(key) {
                log::error!("session wipe failed at {key}: {err}");
            }
        }
    }

    fn lock_cache(&self) -> MutexGuard<'_, Option<Session>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
