#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

/// Registration form fields, validated locally before any remote call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl RegisterForm {
    /// Local-only validation. A failure here means the submit handler
    /// returns before the backend is ever contacted.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.trim().is_empty() {
            return Err(FormError::EmptyEmail);
        }
        if self.password.is_empty() {
            return Err(FormError::EmptyPassword);
        }
        if self.password != self.confirm {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

/// User-facing validation failures for the data-entry forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter your email address.")]
    EmptyEmail,
    #[error("Please choose a password.")]
    EmptyPassword,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Username must be at least 3 characters.")]
    UsernameTooShort,
}
