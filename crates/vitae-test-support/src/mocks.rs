//! Scriptable in-memory authentication provider.

use crate::fixtures::{anonymous_user, google_user, password_user};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use tokio::sync::Semaphore;
use vitae_auth::{AuthError, AuthProvider, AuthResult, User};

/// Provider call recorded by [`MockAuthProvider`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderCall {
    /// `login_with_google`.
    Google,
    /// `login_anonymously`.
    Anonymous,
    /// `login_with_password` with the literal arguments.
    Password {
        /// Email argument.
        email: String,
        /// Password argument.
        password: String,
    },
    /// `logout`.
    Logout,
}

/// In-memory provider that records calls, keeps a session, and can hold each
/// call open until the test releases it.
#[derive(Debug, Default)]
pub struct MockAuthProvider {
    calls: RefCell<Vec<ProviderCall>>,
    failures: RefCell<VecDeque<AuthError>>,
    session: RefCell<Option<User>>,
    gate: Option<Semaphore>,
}

impl MockAuthProvider {
    /// Provider whose calls resolve immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose calls stay pending until [`Self::release`] is called.
    #[must_use]
    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    /// Start with `user` already signed in.
    #[must_use]
    pub fn with_session(self, user: User) -> Self {
        *self.session.borrow_mut() = Some(user);
        self
    }

    /// Make the next settled call fail with `error`.
    pub fn fail_next(&self, error: AuthError) {
        self.failures.borrow_mut().push_back(error);
    }

    /// Let one pending (or future) call settle.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Calls recorded so far, in invocation order.
    #[must_use]
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: ProviderCall) {
        self.calls.borrow_mut().push(call);
    }

    async fn wait_for_release(&self) {
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
    }

    fn settle_login(&self, user: User) -> AuthResult<User> {
        if let Some(error) = self.failures.borrow_mut().pop_front() {
            return Err(error);
        }
        *self.session.borrow_mut() = Some(user.clone());
        Ok(user)
    }
}

#[async_trait(?Send)]
impl AuthProvider for MockAuthProvider {
    async fn login_with_google(&self) -> AuthResult<User> {
        self.record(ProviderCall::Google);
        self.wait_for_release().await;
        self.settle_login(google_user())
    }

    async fn login_anonymously(&self) -> AuthResult<User> {
        self.record(ProviderCall::Anonymous);
        self.wait_for_release().await;
        self.settle_login(anonymous_user())
    }

    async fn login_with_password(&self, email: &str, password: &str) -> AuthResult<User> {
        self.record(ProviderCall::Password {
            email: email.to_string(),
            password: password.to_string(),
        });
        self.wait_for_release().await;
        self.settle_login(password_user(email))
    }

    async fn logout(&self) -> AuthResult<()> {
        self.record(ProviderCall::Logout);
        self.wait_for_release().await;
        if let Some(error) = self.failures.borrow_mut().pop_front() {
            return Err(error);
        }
        self.session.borrow_mut().take();
        Ok(())
    }

    fn current_user(&self) -> Option<User> {
        self.session.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn successful_login_updates_session() {
        let provider = MockAuthProvider::new();
        let user = provider.login_with_google().await.expect("login");
        assert_eq!(provider.current_user(), Some(user));
        assert_eq!(provider.calls(), vec![ProviderCall::Google]);

        provider.logout().await.expect("logout");
        assert_eq!(provider.current_user(), None);
    }

    #[tokio::test]
    async fn scripted_failure_applies_once() {
        let provider = MockAuthProvider::new();
        provider.fail_next(AuthError::InvalidCredentials);
        let first = provider.login_with_password("a@b.com", "bad").await;
        assert_eq!(first, Err(AuthError::InvalidCredentials));
        assert_eq!(provider.current_user(), None);

        let second = provider.login_with_password("a@b.com", "good").await;
        assert!(second.is_ok());
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn gated_calls_wait_for_release() {
        let provider = MockAuthProvider::gated();
        let call = provider.login_anonymously();
        futures::pin_mut!(call);
        assert!(futures::poll!(call.as_mut()).is_pending());
        assert_eq!(provider.calls(), vec![ProviderCall::Anonymous]);

        provider.release();
        let user = call.await.expect("anonymous login");
        assert!(user.is_anonymous);
    }
}
