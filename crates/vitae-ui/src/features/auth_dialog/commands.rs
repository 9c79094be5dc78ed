//! Side-effecting dialog commands.
//!
//! # Design
//! - Commands talk to the provider/router and report back only through a [`DialogSink`].
//! - Every sign-in resets its loading flag, including when the future is dropped mid-flight.
//! - Failures come back as `Result`s and are mirrored into the dialog error state.
//! - The session mirror is refreshed from the provider after every provider call.

use crate::core::config::DialogConfig;
use crate::core::navigation::Router;
use crate::features::auth_dialog::actions::AuthDialogAction;
use crate::features::auth_dialog::state::AuthDialogState;
use std::cell::RefCell;
use thiserror::Error;
use vitae_auth::{
    AuthError, AuthProvider, Credentials, CredentialsDraft, SignInMethod, User, ValidationError,
};
#[cfg(target_arch = "wasm32")]
use yewdux::dispatch::Dispatch;

/// Destination for dialog actions.
pub trait DialogSink {
    /// Apply `action` to the dialog state.
    fn send(&self, action: AuthDialogAction);
}

impl DialogSink for RefCell<AuthDialogState> {
    fn send(&self, action: AuthDialogAction) {
        self.borrow_mut().reduce(action);
    }
}

#[cfg(target_arch = "wasm32")]
impl DialogSink for Dispatch<AuthDialogState> {
    fn send(&self, action: AuthDialogAction) {
        self.reduce_mut(|state| state.reduce(action));
    }
}

/// Failure returned by a dialog command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The provider call failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// The draft was rejected before any provider call.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Sign-in request with its method-specific payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInRequest {
    /// Google OAuth.
    Google,
    /// Anonymous session.
    Anonymous,
    /// Validated email/password pair.
    Password(Credentials),
}

impl SignInRequest {
    /// Method this request uses.
    #[must_use]
    pub const fn method(&self) -> SignInMethod {
        match self {
            Self::Google => SignInMethod::Google,
            Self::Anonymous => SignInMethod::Anonymous,
            Self::Password(_) => SignInMethod::Password,
        }
    }
}

/// Loading-flag guard for one sign-in. Reports `SignInAbandoned` if dropped
/// before [`PendingSignIn::settle`].
struct PendingSignIn<'a, S: DialogSink + ?Sized> {
    sink: &'a S,
    method: SignInMethod,
    settled: bool,
}

impl<'a, S: DialogSink + ?Sized> PendingSignIn<'a, S> {
    fn start(sink: &'a S, method: SignInMethod) -> Self {
        sink.send(AuthDialogAction::SignInStarted(method));
        Self {
            sink,
            method,
            settled: false,
        }
    }

    fn settle(mut self, error: Option<AuthError>) {
        self.settled = true;
        self.sink.send(AuthDialogAction::SignInSettled {
            method: self.method,
            error,
        });
    }
}

impl<S: DialogSink + ?Sized> Drop for PendingSignIn<'_, S> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!(method = self.method.as_str(), "sign-in abandoned before settling");
            self.sink.send(AuthDialogAction::SignInAbandoned(self.method));
        }
    }
}

/// Run one sign-in against the provider.
///
/// The loading flag for the request's method flips on before the provider is
/// called and off once the call settles.
///
/// # Errors
/// Returns [`CommandError::Auth`] when the provider rejects the sign-in.
pub async fn sign_in<P, S>(
    provider: &P,
    sink: &S,
    request: SignInRequest,
) -> Result<User, CommandError>
where
    P: AuthProvider + ?Sized,
    S: DialogSink + ?Sized,
{
    let method = request.method();
    let pending = PendingSignIn::start(sink, method);
    let outcome = match &request {
        SignInRequest::Google => provider.login_with_google().await,
        SignInRequest::Anonymous => provider.login_anonymously().await,
        SignInRequest::Password(credentials) => {
            provider
                .login_with_password(credentials.email(), credentials.password())
                .await
        }
    };
    match &outcome {
        Ok(user) => tracing::info!(method = method.as_str(), uid = %user.uid, "sign-in completed"),
        Err(error) => tracing::warn!(method = method.as_str(), %error, "sign-in failed"),
    }
    pending.settle(outcome.as_ref().err().cloned());
    sync_session(provider, sink);
    outcome.map_err(CommandError::from)
}

/// Validate the password draft and, when valid, sign in with it.
///
/// # Errors
/// Returns [`CommandError::Validation`] without calling the provider when the
/// draft is incomplete, or [`CommandError::Auth`] when the provider fails.
pub async fn submit_password<P, S>(
    provider: &P,
    sink: &S,
    draft: &CredentialsDraft,
    config: &DialogConfig,
) -> Result<User, CommandError>
where
    P: AuthProvider + ?Sized,
    S: DialogSink + ?Sized,
{
    let credentials = match draft.validate(config.require_well_formed_email) {
        Ok(credentials) => credentials,
        Err(error) => {
            tracing::debug!(%error, "password draft rejected");
            sink.send(AuthDialogAction::ValidationFailed(error));
            return Err(error.into());
        }
    };
    sign_in(provider, sink, SignInRequest::Password(credentials)).await
}

/// End the provider session.
///
/// # Errors
/// Returns [`CommandError::Auth`] when the provider logout fails.
pub async fn sign_out<P, S>(provider: &P, sink: &S) -> Result<(), CommandError>
where
    P: AuthProvider + ?Sized,
    S: DialogSink + ?Sized,
{
    let outcome = provider.logout().await;
    if let Err(error) = &outcome {
        tracing::warn!(%error, "sign-out failed");
    } else {
        tracing::info!("signed out");
    }
    sink.send(AuthDialogAction::SignOutSettled {
        error: outcome.as_ref().err().cloned(),
    });
    sync_session(provider, sink);
    outcome.map_err(CommandError::from)
}

/// Navigate to the dashboard and close the dialog.
pub fn go_to_app<R, S>(router: &R, sink: &S, config: &DialogConfig)
where
    R: Router + ?Sized,
    S: DialogSink + ?Sized,
{
    router.navigate_to(&config.dashboard_path);
    sink.send(AuthDialogAction::Close);
}

/// Mirror the provider's current user into the dialog state.
pub fn sync_session<P, S>(provider: &P, sink: &S)
where
    P: AuthProvider + ?Sized,
    S: DialogSink + ?Sized,
{
    sink.send(AuthDialogAction::SessionChanged(provider.current_user()));
}
