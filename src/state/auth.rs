//! Auth-session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` and read by route guards, the navbar and pages.
//! It owns the credential store; a revision signal bumps on every login and
//! logout so anything that derived a role re-renders without a reload.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use super::identity::Identity;
use super::session::{Session, SessionError, SharedStore};
use crate::net::error::{UserMessage, alert_user};

/// Shared session handle. Cheap to clone; every clone sees the same store.
#[derive(Clone)]
pub struct AuthContext {
    store: SharedStore,
    revision: RwSignal<u64>,
    storage_alerted: Arc<AtomicBool>,
}

impl AuthContext {
    pub fn new(store: SharedStore) -> Self {
        Self { store, revision: RwSignal::new(0), storage_alerted: Arc::new(AtomicBool::new(false)) }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Identity for the current render. Reactive: re-runs after login/logout.
    ///
    /// A storage failure is alerted once per page load and read as anonymous.
    pub fn identity(&self) -> Identity {
        self.revision.track();
        self.identity_untracked()
    }

    pub fn identity_untracked(&self) -> Identity {
        match Identity::snapshot(&self.store) {
            Ok(identity) => identity,
            Err(err) => {
                log::error!("reading session failed: {err}");
                if !self.storage_alerted.swap(true, Ordering::Relaxed) {
                    alert_user(&err.user_message());
                }
                Identity::anonymous()
            }
        }
    }

    /// Store a fresh session from a successful login.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` from the store; nothing is stored on error.
    pub fn login(&self, token: &str, is_admin: bool, display_name: &str) -> Result<Session, SessionError> {
        let result = self.store.set(token, is_admin, display_name);
        if result.is_ok() {
            log::info!("session started for {display_name:?} (admin: {is_admin})");
        }
        self.bump();
        result
    }

    /// Clear the session and return the token that was in use.
    ///
    /// # Errors
    ///
    /// Propagates `StorageUnavailable` from the store.
    pub fn logout(&self) -> Result<Option<String>, SessionError> {
        let result = self.store.clear();
        if let Ok(Some(_)) = &result {
            log::info!("session ended");
        }
        self.bump();
        result
    }

    pub fn revision(&self) -> u64 {
        self.revision.get_untracked()
    }

    fn bump(&self) {
        self.revision.update(|r| *r += 1);
    }
}
