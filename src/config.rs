//! Console configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A browser bundle has no process environment, so overrides are baked in by
//! `option_env!` when the WASM artifact is compiled. Everything else in the
//! crate receives a `ConsoleConfig` value instead of reading constants.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_PREFIX: &str = "api/";
pub const DEFAULT_STORAGE_PREFIX: &str = "auth";
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_HOME_ROUTE: &str = "/";

/// Names of the three persisted session keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub token: String,
    pub is_admin: String,
    pub user_name: String,
}

impl StorageKeys {
    /// Derive `<prefix>.token`, `<prefix>.isAdmin` and `<prefix>.userName`.
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            token: format!("{prefix}.token"),
            is_admin: format!("{prefix}.isAdmin"),
            user_name: format!("{prefix}.userName"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_STORAGE_PREFIX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Prepended verbatim to every dispatched path.
    pub api_prefix: String,
    pub storage_keys: StorageKeys,
    pub login_route: String,
    pub home_route: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_prefix: DEFAULT_API_PREFIX.to_owned(),
            storage_keys: StorageKeys::default(),
            login_route: DEFAULT_LOGIN_ROUTE.to_owned(),
            home_route: DEFAULT_HOME_ROUTE.to_owned(),
        }
    }
}

impl ConsoleConfig {
    /// Build config from variables captured when the bundle was compiled.
    ///
    /// Optional:
    /// - `SPRINKLE_API_PREFIX`: default `api/`
    /// - `SPRINKLE_STORAGE_PREFIX`: default `auth`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "SPRINKLE_API_PREFIX" => option_env!("SPRINKLE_API_PREFIX"),
            "SPRINKLE_STORAGE_PREFIX" => option_env!("SPRINKLE_STORAGE_PREFIX"),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup. Blank values fall back to defaults.
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let non_blank = |key: &str| lookup(key).map(str::trim).filter(|v| !v.is_empty());

        let api_prefix = non_blank("SPRINKLE_API_PREFIX").map_or_else(|| DEFAULT_API_PREFIX.to_owned(), normalize_prefix);
        let storage_keys = non_blank("SPRINKLE_STORAGE_PREFIX").map_or_else(StorageKeys::default, StorageKeys::with_prefix);

        Self { api_prefix, storage_keys, ..Self::default() }
    }
}

fn normalize_prefix(raw: &str) -> String {
    if raw.ends_with('/') { raw.to_owned() } else { format!("{raw}/") }
}
