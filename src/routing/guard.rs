//! Route guard: decides render / redirect for every navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guarded route resolves its descriptor here on every render. The guard
//! never caches a role; it asks an `IdentitySource` each time, so a login or
//! logout changes the outcome of the very next render.
//!
//! ORDERING
//! ========
//! 1. actions (`Logout`, `Profile`) run and redirect
//! 2. restricted + unauthenticated redirects to login
//! 3. grant, with a presentation frame chosen by role
//!
//! An unauthenticated user never reaches step 3 on a restricted route. Admin
//! policy lives in the navigation link sets and in the embedded views.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::table::{RouteAction, RouteDescriptor, RouteTarget, user_detail_path};
use crate::config::ConsoleConfig;
use crate::net::error::{UserMessage, alert_user};
use crate::state::auth::AuthContext;
use crate::state::identity::Identity;
use crate::state::session::{CredentialStore, Role, SessionError};
use crate::util::storage::KeyValueStorage;

/// Navbar/layout variant a granted view renders inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Anonymous,
    User,
    Admin,
}

impl From<Role> for Frame {
    fn from(role: Role) -> Self {
        match role {
            Role::Anonymous => Self::Anonymous,
            Role::User => Self::User,
            Role::Admin => Self::Admin,
        }
    }
}

impl Frame {
    #[must_use]
    pub fn role(self) -> Role {
        match self {
            Self::Anonymous => Role::Anonymous,
            Self::User => Role::User,
            Self::Admin => Role::Admin,
        }
    }
}

/// Guard outcome for one navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// No decision yet.
    #[default]
    Pending,
    Granted(Frame),
    /// Navigation is replaced by this path; the requested route is dropped.
    Redirected(String),
    /// Waiting on an asynchronous prerequisite. Identity is synchronous
    /// today, so `resolve` never returns this.
    Deferred,
}

/// Where the guard reads identity and ends sessions.
pub trait IdentitySource {
    fn identity(&self) -> Identity;

    /// Clear the stored session, returning the token that was in use.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the session cannot be removed.
    fn end_session(&self) -> Result<Option<String>, SessionError>;
}

impl IdentitySource for AuthContext {
    fn identity(&self) -> Identity {
        AuthContext::identity(self)
    }

    fn end_session(&self) -> Result<Option<String>, SessionError> {
        self.logout()
    }
}

impl<S: KeyValueStorage> IdentitySource for CredentialStore<S> {
    fn identity(&self) -> Identity {
        Identity::snapshot(self).unwrap_or_else(|err| {
            log::error!("reading session failed: {err}");
            Identity::anonymous()
        })
    }

    fn end_session(&self) -> Result<Option<String>, SessionError> {
        self.clear()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    login_route: String,
    home_route: String,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::from_config(&ConsoleConfig::default())
    }
}

impl RouteGuard {
    #[must_use]
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self { login_route: config.login_route.clone(), home_route: config.home_route.clone() }
    }

    /// Decide the outcome of navigating to `route`.
    ///
    /// # Errors
    ///
    /// Only the `Logout` action can fail, when storage rejects the clear.
    pub fn resolve<I: IdentitySource + ?Sized>(&self, route: &RouteDescriptor, source: &I) -> Result<GuardState, SessionError> {
        let state = match route.target {
            RouteTarget::Action(RouteAction::Logout) => {
                source.end_session()?;
                GuardState::Redirected(self.home_route.clone())
            }
            RouteTarget::Action(RouteAction::Profile) => match source.identity().public_key() {
                Some(key) => GuardState::Redirected(user_detail_path(&key)),
                None => GuardState::Redirected(self.home_route.clone()),
            },
            RouteTarget::View(_) => self.decide(route, &source.identity()),
        };
        log::debug!("guard {} -> {state:?}", route.pattern);
        Ok(state)
    }

    /// `resolve` for action routes, which must always leave their path.
    ///
    /// A failed action is alerted once and navigation continues home; reloading
    /// would land on the same action and fail again.
    pub fn resolve_action<I: IdentitySource + ?Sized>(&self, route: &RouteDescriptor, source: &I) -> GuardState {
        match self.resolve(route, source) {
            Ok(state) => state,
            Err(err) => {
                log::error!("{} failed: {err}", route.pattern);
                alert_user(&err.user_message());
                GuardState::Redirected(self.home_route.clone())
            }
        }
    }

    /// Decision for a view route against an identity snapshot.
    pub fn decide(&self, route: &RouteDescriptor, identity: &Identity) -> GuardState {
        if route.restricted && !identity.is_authenticated() {
            log::warn!("{} requires a session, redirecting to login", route.pattern);
            return GuardState::Redirected(self.login_route.clone());
        }
        GuardState::Granted(Frame::from(identity.role()))
    }
}
