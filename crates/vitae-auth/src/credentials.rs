//! Email/password draft and its validated form.
//!
//! # Design
//! - The draft is an immutable value replaced on every edit.
//! - Validation produces [`Credentials`]; providers never see raw drafts.
//! - Passwords stay out of `Debug` output.

use crate::error::ValidationError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").ok());

/// Uncommitted email/password input.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialsDraft {
    /// Email field contents, as typed.
    pub email: String,
    /// Password field contents, as typed.
    pub password: String,
}

impl CredentialsDraft {
    /// Replace the email field.
    #[must_use]
    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self
        }
    }

    /// Replace the password field.
    #[must_use]
    pub fn with_password(self, password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            ..self
        }
    }

    /// Check the draft and produce submit-ready credentials.
    ///
    /// The email is trimmed; the password is passed through untouched.
    ///
    /// # Errors
    /// Returns the first failing rule: empty email, malformed email (only when
    /// `require_well_formed_email` is set), then empty password.
    pub fn validate(
        &self,
        require_well_formed_email: bool,
    ) -> Result<Credentials, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if require_well_formed_email && !is_well_formed_email(email) {
            return Err(ValidationError::MalformedEmail);
        }
        if self.password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(Credentials {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

impl fmt::Debug for CredentialsDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsDraft")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated credentials ready for the provider.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn is_well_formed_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}
