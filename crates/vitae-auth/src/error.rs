//! Error types for provider calls and credential validation.

use thiserror::Error;

/// Failure reported by an authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The provider could not be reached.
    #[error("authentication request failed: {detail}")]
    Network {
        /// Transport-level detail for logs.
        detail: String,
    },
    /// Email/password pair was not accepted.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The provider refused the request for another reason.
    #[error("authentication rejected: {reason}")]
    Rejected {
        /// Provider-supplied reason.
        reason: String,
    },
    /// The user dismissed the OAuth popup before finishing.
    #[error("sign-in popup closed")]
    PopupClosed,
    /// The requested sign-in method is not enabled.
    #[error("sign-in method unavailable")]
    Unavailable,
}

impl AuthError {
    /// Translation key for the user-facing message.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::Network { .. } => "modals.auth.errors.network",
            Self::InvalidCredentials => "modals.auth.errors.invalid_credentials",
            Self::Rejected { .. } => "modals.auth.errors.rejected",
            Self::PopupClosed => "modals.auth.errors.popup_closed",
            Self::Unavailable => "modals.auth.errors.unavailable",
        }
    }
}

/// Result alias for provider operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Reason a credentials draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email field is empty.
    #[error("email is required")]
    EmptyEmail,
    /// Email field is not an address.
    #[error("email is malformed")]
    MalformedEmail,
    /// Password field is empty.
    #[error("password is required")]
    EmptyPassword,
}

impl ValidationError {
    /// Translation key for the user-facing message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::EmptyEmail => "modals.auth.errors.empty_email",
            Self::MalformedEmail => "modals.auth.errors.malformed_email",
            Self::EmptyPassword => "modals.auth.errors.empty_password",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_display_includes_detail() {
        let err = AuthError::Network {
            detail: "timeout".to_string(),
        };
        assert_eq!(err.to_string(), "authentication request failed: timeout");
        assert_eq!(err.message_key(), "modals.auth.errors.network");
    }

    #[test]
    fn validation_keys_are_distinct() {
        let keys = [
            ValidationError::EmptyEmail.message_key(),
            ValidationError::MalformedEmail.message_key(),
            ValidationError::EmptyPassword.message_key(),
        ];
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
        assert_ne!(keys[0], keys[2]);
    }
}
