use super::*;

#[test]
fn validate_login_input_trims_username_only() {
    assert_eq!(
        validate_login_input("  maria  ", " s3cret "),
        Ok(("maria".to_owned(), " s3cret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "s3cret"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("   ", "s3cret"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("maria", ""), Err(MISSING_CREDENTIALS));
}
