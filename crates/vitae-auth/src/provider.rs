//! Authentication provider contract.
//!
//! # Design
//! - Futures are `?Send`: providers run on the browser event loop.
//! - Every call returns a result; callers decide how to surface failures.
//! - `current_user` is a synchronous read of the provider's session cache.

use crate::error::AuthResult;
use crate::user::User;
use async_trait::async_trait;

/// Sign-in methods offered by the dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignInMethod {
    /// Google OAuth.
    Google,
    /// Anonymous session.
    Anonymous,
    /// Email and password.
    Password,
}

impl SignInMethod {
    /// Stable identifier for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Anonymous => "anonymous",
            Self::Password => "password",
        }
    }
}

/// External service that owns authentication and the current session.
#[async_trait(?Send)]
pub trait AuthProvider {
    /// Sign in through Google OAuth.
    async fn login_with_google(&self) -> AuthResult<User>;

    /// Start an anonymous session.
    async fn login_anonymously(&self) -> AuthResult<User>;

    /// Sign in with an email/password pair.
    async fn login_with_password(&self, email: &str, password: &str) -> AuthResult<User>;

    /// End the current session.
    async fn logout(&self) -> AuthResult<()>;

    /// Currently signed-in user, if any.
    fn current_user(&self) -> Option<User>;
}
