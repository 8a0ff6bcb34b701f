use budget_core::{validate_draft, Draft, SignUpError, ValidationError};

fn draft(display_name: &str, one: &str, two: &str) -> Draft {
    Draft {
        display_name: display_name.to_string(),
        email: "alice@example.com".to_string(),
        password_one: one.to_string(),
        password_two: two.to_string(),
        ..Default::default()
    }
}

#[test]
fn two_character_display_name_is_too_short() {
    let res = validate_draft(&draft("Al", "abc123", "abc123"));
    assert_eq!(res, Err(ValidationError::DisplayNameTooShort));
}

#[test]
fn display_name_is_trimmed_before_counting() {
    let res = validate_draft(&draft("  Al  ", "abc123", "abc123"));
    assert_eq!(res, Err(ValidationError::DisplayNameTooShort));
}

#[test]
fn display_name_length_counts_characters_not_bytes() {
    assert!(validate_draft(&draft("Zoë", "pw1234", "pw1234")).is_ok());
    assert_eq!(
        validate_draft(&draft("Éa", "pw1234", "pw1234")),
        Err(ValidationError::DisplayNameTooShort)
    );
}

#[test]
fn mismatched_passwords_are_rejected() {
    let res = validate_draft(&draft("Alice", "abc123", "xyz987"));
    assert_eq!(res, Err(ValidationError::PasswordMismatch));
}

#[test]
fn display_name_check_runs_before_password_check() {
    let res = validate_draft(&draft("Al", "abc123", "xyz987"));
    assert_eq!(res, Err(ValidationError::DisplayNameTooShort));
}

#[test]
fn weak_password_and_odd_email_are_left_to_the_backend() {
    let mut d = draft("Alice", "1", "1");
    d.email = "not an email".to_string();
    assert!(validate_draft(&d).is_ok());
}

#[test]
fn validation_errors_display_as_user_messages() {
    let err = SignUpError::from(ValidationError::PasswordMismatch);
    assert_eq!(err.to_string(), "The passwords don't match.");
    assert_eq!(
        ValidationError::DisplayNameTooShort.to_string(),
        "The display name is too short."
    );
}
