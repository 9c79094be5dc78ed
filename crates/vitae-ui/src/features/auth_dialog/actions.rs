//! Sign-in dialog actions.
//!
//! # Design
//! - Capture user intent and command outcomes as plain data.
//! - Actions never perform side effects; the reducer applies them.

use vitae_auth::{AuthError, SignInMethod, User, ValidationError};

/// Everything that can change the dialog state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthDialogAction {
    /// The modal bus asked for the dialog.
    OpenRequested,
    /// The modal host (or "go to app") closed the dialog.
    Close,
    /// Switch from the buttons region to the password form.
    UsePassword,
    /// Leave the password form without submitting.
    CancelPassword,
    /// Email field edited.
    EmailChanged(String),
    /// Password field edited.
    PasswordChanged(String),
    /// A provider sign-in call is about to start.
    SignInStarted(SignInMethod),
    /// A provider sign-in call settled.
    SignInSettled {
        /// Method that settled.
        method: SignInMethod,
        /// Failure, when the call did not succeed.
        error: Option<AuthError>,
    },
    /// A sign-in future was dropped before it settled.
    SignInAbandoned(SignInMethod),
    /// The password draft failed validation; nothing was sent.
    ValidationFailed(ValidationError),
    /// The provider logout call settled.
    SignOutSettled {
        /// Failure, when logout did not succeed.
        error: Option<AuthError>,
    },
    /// Fresh snapshot of the provider's current user.
    SessionChanged(Option<User>),
    /// Clear the displayed error.
    DismissError,
}
