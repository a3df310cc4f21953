use super::*;

#[test]
fn login_response_with_bool_flag() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"authorization":"h.c.s","adminflag":true,"username":"maria"}"#).unwrap();
    assert_eq!(resp.authorization, "h.c.s");
    assert!(resp.is_admin());
    assert_eq!(resp.display_name(), "maria");
}

#[test]
fn login_response_with_string_flag() {
    let admin: LoginResponse = serde_json::from_str(r#"{"authorization":"t","adminflag":"true"}"#).unwrap();
    assert!(admin.is_admin());

    let user: LoginResponse = serde_json::from_str(r#"{"authorization":"t","adminflag":"false"}"#).unwrap();
    assert!(!user.is_admin());
}

#[test]
fn login_response_token_only() {
    let resp: LoginResponse = serde_json::from_str(r#"{"authorization":"t"}"#).unwrap();
    assert!(!resp.is_admin());
    assert_eq!(resp.display_name(), "");
}

#[test]
fn login_response_numeric_flag_is_not_admin() {
    let resp: LoginResponse = serde_json::from_str(r#"{"authorization":"t","adminflag":1}"#).unwrap();
    assert!(!resp.is_admin());
}

#[test]
fn login_request_serializes_credentials() {
    let req = LoginRequest { username: "maria".to_owned(), password: "s3cret".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "username": "maria", "password": "s3cret" })
    );
}

#[test]
fn server_error_body_tolerates_missing_field() {
    let body: ServerErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.error, None);
}
