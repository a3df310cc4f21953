use std::sync::Arc;

use super::*;
use crate::config::StorageKeys;
use crate::state::session::{CredentialStore, Role};
use crate::util::storage::{MemoryStorage, SharedStorage};

fn context() -> AuthContext {
    let storage: SharedStorage = Arc::new(MemoryStorage::new());
    AuthContext::new(Arc::new(CredentialStore::new(storage, StorageKeys::default())))
}

// =============================================================
// AuthContext
// =============================================================

#[test]
fn fresh_context_is_anonymous() {
    let auth = context();
    assert_eq!(auth.identity_untracked().role(), Role::Anonymous);
    assert_eq!(auth.revision(), 0);
}

#[test]
fn login_updates_role_and_bumps_revision() {
    let auth = context();
    auth.login("tok", true, "Maria").unwrap();

    let identity = auth.identity_untracked();
    assert_eq!(identity.role(), Role::Admin);
    assert_eq!(identity.display_name(), Some("Maria"));
    assert_eq!(auth.revision(), 1);
}

#[test]
fn logout_returns_token_and_resets_role() {
    let auth = context();
    auth.login("tok", false, "Joao").unwrap();

    assert_eq!(auth.logout().unwrap().as_deref(), Some("tok"));
    assert_eq!(auth.identity_untracked().role(), Role::Anonymous);
    assert_eq!(auth.revision(), 2);
}

#[test]
fn clones_share_the_same_session() {
    let auth = context();
    let other = auth.clone();
    auth.login("tok", false, "Joao").unwrap();

    assert_eq!(other.identity_untracked().role(), Role::User);
    assert_eq!(other.revision(), 1);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn unreadable_storage_reads_as_anonymous() {
    let storage: SharedStorage = Arc::new(crate::util::storage::BrowserStorage);
    let auth = AuthContext::new(Arc::new(CredentialStore::new(storage, StorageKeys::default())));

    assert_eq!(auth.identity_untracked().role(), Role::Anonymous);
    assert_eq!(auth.identity_untracked().role(), Role::Anonymous);
    assert!(auth.login("tok", false, "Joao").is_err());
}
