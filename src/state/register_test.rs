use super::*;

// =============================================================
// RegisterForm validation
// =============================================================

fn filled() -> RegisterForm {
    RegisterForm {
        email: "a@b.c".to_owned(),
        password: "hunter22".to_owned(),
        confirm: "hunter22".to_owned(),
    }
}

#[test]
fn matching_passwords_pass_validation() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn mismatched_passwords_are_rejected() {
    let form = RegisterForm { confirm: "hunter23".to_owned(), ..filled() };
    assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
}

#[test]
fn blank_email_is_rejected_first() {
    let form = RegisterForm { email: "   ".to_owned(), ..filled() };
    assert_eq!(form.validate(), Err(FormError::EmptyEmail));
}

#[test]
fn empty_password_is_rejected() {
    let form = RegisterForm {
        password: String::new(),
        confirm: String::new(),
        ..filled()
    };
    assert_eq!(form.validate(), Err(FormError::EmptyPassword));
}

#[test]
fn mismatch_message_is_user_facing() {
    assert_eq!(FormError::PasswordMismatch.to_string(), "Passwords do not match.");
}
