//! Read-side identity facts derived from the stored session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the navbar and pages ask an `Identity` for role, public key
//! and display name. An `Identity` is a snapshot taken per render, so a login
//! or logout is reflected the next time anything re-renders.
//!
//! ERROR HANDLING
//! ==============
//! Token decoding failures stop here: `public_key` logs and answers `None`.
//! Only `try_public_key` exposes `MalformedToken` to callers that want it.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;

use super::session::{CredentialStore, Role, Session, SessionError, role_of};
use crate::util::storage::KeyValueStorage;

/// base64url, with or without trailing `=` padding.
const CLAIMS_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Claims carried in the middle segment of the bearer token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub public_key: Option<String>,
}

/// Decode the claims segment of a `header.claims.signature` token.
///
/// # Errors
///
/// Returns `MalformedToken` if the token has no claims segment, the segment
/// is not base64, or the payload is not a JSON object.
pub fn decode_claims(token: &str) -> Result<TokenClaims, SessionError> {
    let segment = token
        .split('.')
        .nth(1)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SessionError::MalformedToken("missing claims segment".to_owned()))?;

    // Tokens minted with the standard alphabet still decode.
    let normalized: String = segment
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = CLAIMS_ENGINE
        .decode(normalized.as_bytes())
        .map_err(|e| SessionError::MalformedToken(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| SessionError::MalformedToken(e.to_string()))
}

/// Identity facts for one render pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    session: Option<Session>,
}

impl Identity {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_session(session: Option<Session>) -> Self {
        Self { session }
    }

    /// Snapshot the store's current session.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the store cannot be read.
    pub fn snapshot<S: KeyValueStorage>(store: &CredentialStore<S>) -> Result<Self, SessionError> {
        store.get().map(Self::from_session)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Role {
        role_of(self.session.as_ref())
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// The `public_key` claim, or `None` when anonymous or undecodable.
    pub fn public_key(&self) -> Option<String> {
        match self.try_public_key() {
            Ok(key) => key,
            Err(err) => {
                log::warn!("ignoring session token: {err}");
                None
            }
        }
    }

    /// # Errors
    ///
    /// Returns `MalformedToken` if a token is present but cannot be decoded.
    pub fn try_public_key(&self) -> Result<Option<String>, SessionError> {
        match self.token() {
            Some(token) => decode_claims(token).map(|c| c.public_key.filter(|k| !k.is_empty())),
            None => Ok(None),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.display_name.as_deref())
            .filter(|n| !n.is_empty())
    }
}
