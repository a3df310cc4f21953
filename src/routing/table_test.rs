use super::*;

// =============================================================
// Pattern matching
// =============================================================

#[test]
fn match_path_root() {
    let (route, params) = RouteTable::console().match_path("/").unwrap();
    assert_eq!(route.target, RouteTarget::View(View::Dashboard));
    assert_eq!(params, RouteParams::default());
}

#[test]
fn match_path_captures_param() {
    let (route, params) = RouteTable::console().match_path("/users/02abc").unwrap();
    assert_eq!(route.target, RouteTarget::View(View::UserDetail));
    assert_eq!(params.get("publicKey"), Some("02abc"));
    assert_eq!(params.get("sensorId"), None);
}

#[test]
fn match_path_ignores_trailing_slash_and_query() {
    let table = RouteTable::console();
    assert_eq!(table.match_path("/sensors/").unwrap().0.pattern, "/sensors");
    assert_eq!(table.match_path("/sensors?page=2").unwrap().0.pattern, "/sensors");
    let (_, params) = table.match_path("/sensors/s-9#top").unwrap();
    assert_eq!(params.get("sensorId"), Some("s-9"));
}

#[test]
fn match_path_unknown_is_none() {
    let table = RouteTable::console();
    assert!(table.match_path("/nope").is_none());
    assert!(table.match_path("/users/a/b").is_none());
}

#[test]
fn action_routes_are_listed() {
    let table = RouteTable::console();
    assert_eq!(table.match_path("/logout").unwrap().0.target, RouteTarget::Action(RouteAction::Logout));
    assert_eq!(table.match_path("/profile").unwrap().0.target, RouteTarget::Action(RouteAction::Profile));
}

// =============================================================
// Authorization flags
// =============================================================

#[test]
fn only_register_route_is_restricted() {
    let restricted: Vec<_> = RouteTable::console()
        .routes()
        .iter()
        .filter(|r| r.restricted)
        .map(|r| r.pattern)
        .collect();
    assert_eq!(restricted, vec!["/register"]);
}

#[test]
fn public_routes() {
    let table = RouteTable::console();
    for pattern in ["/", "/login", "/sensors", "/sensors/:sensorId", "/users", "/users/:publicKey", "/signup"] {
        assert!(!table.get(pattern).unwrap().restricted, "{pattern}");
    }
}

#[test]
fn user_detail_path_formats_key() {
    assert_eq!(user_detail_path("pub123"), "/users/pub123");
}

#[test]
fn route_params_from_iter() {
    let params: RouteParams = vec![("id".to_owned(), "7".to_owned())].into_iter().collect();
    assert_eq!(params.iter().collect::<Vec<_>>(), vec![("id", "7")]);
}
