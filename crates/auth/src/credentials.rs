//! Sign-in form credentials and their validation rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use furnish_core::StoreError;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Why a sign-in submission was rejected.
///
/// Display strings are the exact texts the login page shows the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

impl From<CredentialError> for StoreError {
    fn from(value: CredentialError) -> Self {
        StoreError::validation(value.to_string())
    }
}

/// Submitted sign-in form values. Inputs are trimmed on construction, the way
/// the form reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into().trim().to_string(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Check the submission. Rules are applied in the order the form does:
    /// required fields, then email shape, then password length.
    pub fn validate(&self) -> Result<(), CredentialError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(CredentialError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(CredentialError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialError::PasswordTooShort);
        }
        Ok(())
    }
}

/// Accepts `local@domain.tld`: exactly one `@`, no whitespace, and a dot with
/// characters on both sides somewhere after the `@`.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_credentials_pass() {
        let creds = Credentials::new("shopper@example.com", "hunter22");
        assert_eq!(creds.validate(), Ok(()));
    }

    #[test]
    fn inputs_are_trimmed_before_validation() {
        let creds = Credentials::new("  shopper@example.com  ", " hunter22 ");
        assert_eq!(creds.validate(), Ok(()));
        assert_eq!(creds.email(), "shopper@example.com");
    }

    #[test]
    fn blank_fields_are_reported_first() {
        assert_eq!(
            Credentials::new("", "hunter22").validate(),
            Err(CredentialError::MissingFields)
        );
        assert_eq!(
            Credentials::new("shopper@example.com", "   ").validate(),
            Err(CredentialError::MissingFields)
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "no-at-sign.example.com",
            "@example.com",
            "two@@example.com",
            "spaced out@example.com",
            "shopper@nodot",
            "shopper@.com",
            "shopper@example.",
        ] {
            assert_eq!(
                Credentials::new(email, "hunter22").validate(),
                Err(CredentialError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert_eq!(
            Credentials::new("shopper@example.com", "12345").validate(),
            Err(CredentialError::PasswordTooShort)
        );
        assert_eq!(
            Credentials::new("shopper@example.com", "123456").validate(),
            Ok(())
        );
    }

    #[test]
    fn error_texts_match_the_form_messages() {
        assert_eq!(
            CredentialError::MissingFields.to_string(),
            "Please fill in all required fields"
        );
        assert_eq!(
            CredentialError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            CredentialError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters long"
        );
    }
}
