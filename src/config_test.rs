use super::*;

#[test]
fn default_storage_keys_match_persisted_layout() {
    let keys = StorageKeys::default();
    assert_eq!(keys.token, "auth.token");
    assert_eq!(keys.is_admin, "auth.isAdmin");
    assert_eq!(keys.user_name, "auth.userName");
}

#[test]
fn default_config_routes() {
    let config = ConsoleConfig::default();
    assert_eq!(config.api_prefix, "api/");
    assert_eq!(config.login_route, "/login");
    assert_eq!(config.home_route, "/");
}

#[test]
fn from_lookup_without_values_is_default() {
    let config = ConsoleConfig::from_lookup(|_| None);
    assert_eq!(config, ConsoleConfig::default());
}

#[test]
fn from_lookup_applies_overrides() {
    let config = ConsoleConfig::from_lookup(|key| match key {
        "SPRINKLE_API_PREFIX" => Some("/v2/api"),
        "SPRINKLE_STORAGE_PREFIX" => Some("outorga"),
        _ => None,
    });
    assert_eq!(config.api_prefix, "/v2/api/");
    assert_eq!(config.storage_keys.token, "outorga.token");
    assert_eq!(config.login_route, "/login");
}

#[test]
fn from_lookup_blank_values_fall_back() {
    let config = ConsoleConfig::from_lookup(|_| Some("   "));
    assert_eq!(config, ConsoleConfig::default());
}

#[test]
fn from_build_env_has_usable_prefix() {
    let config = ConsoleConfig::from_build_env();
    assert!(config.api_prefix.ends_with('/'));
}
