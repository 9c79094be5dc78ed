//! Sign-in dialog state and reducer.
//!
//! # Design
//! - Presentation state only; the provider owns the real session.
//! - `user` is the dialog's read-only mirror of the provider's current user.
//! - Loading flags are independent; concurrent sign-ins are allowed.
//! - The credentials draft survives cancel and close.

use crate::features::auth_dialog::actions::AuthDialogAction;
use vitae_auth::{AuthError, CredentialsDraft, SignInMethod, User, ValidationError};
#[cfg(target_arch = "wasm32")]
use yewdux::store::Store;

/// In-flight markers, one per sign-in method.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    /// Google sign-in in flight.
    pub google: bool,
    /// Anonymous sign-in in flight.
    pub anonymous: bool,
    /// Password sign-in in flight.
    pub password: bool,
}

impl LoadingFlags {
    /// Set the flag for `method`.
    pub const fn set(&mut self, method: SignInMethod, value: bool) {
        match method {
            SignInMethod::Google => self.google = value,
            SignInMethod::Anonymous => self.anonymous = value,
            SignInMethod::Password => self.password = value,
        }
    }
}

/// Which logged-out region is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    /// Sign-in method buttons.
    #[default]
    Buttons,
    /// Email/password form.
    PasswordForm,
}

/// Failure surfaced inside the dialog body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogError {
    /// Password draft rejected before reaching the provider.
    Validation(ValidationError),
    /// Provider sign-in failed.
    SignIn {
        /// Method that failed.
        method: SignInMethod,
        /// Provider failure.
        error: AuthError,
    },
    /// Provider logout failed.
    SignOut(AuthError),
}

impl DialogError {
    /// Translation key for the message shown to the user.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::Validation(error) => error.message_key(),
            Self::SignIn { error, .. } => error.message_key(),
            Self::SignOut(_) => "modals.auth.errors.logout",
        }
    }
}

/// Rendered region, derived from state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogView {
    /// No session; method buttons visible.
    LoggedOutButtons,
    /// No session; password form visible.
    LoggedOutPasswordForm,
    /// Session present; logout and "go to app" visible.
    LoggedIn,
}

/// Complete dialog state held in the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(target_arch = "wasm32", derive(Store))]
pub struct AuthDialogState {
    /// Whether the modal is open.
    pub visible: bool,
    /// Per-method in-flight markers.
    pub loading: LoadingFlags,
    /// Email/password draft.
    pub draft: CredentialsDraft,
    /// Logged-out region selector.
    pub mode: FormMode,
    /// Mirror of the provider's current user.
    pub user: Option<User>,
    /// Last failure, until dismissed or superseded.
    pub error: Option<DialogError>,
}

impl AuthDialogState {
    /// Initial state for a dialog mounted while `user` is signed in (or not).
    #[must_use]
    pub fn mounted(user: Option<User>) -> Self {
        Self {
            user,
            ..Self::default()
        }
    }

    /// Region to render.
    #[must_use]
    pub fn view(&self) -> DialogView {
        match (&self.user, self.mode) {
            (Some(_), _) => DialogView::LoggedIn,
            (None, FormMode::Buttons) => DialogView::LoggedOutButtons,
            (None, FormMode::PasswordForm) => DialogView::LoggedOutPasswordForm,
        }
    }

    /// Apply one action.
    pub fn reduce(&mut self, action: AuthDialogAction) {
        match action {
            AuthDialogAction::OpenRequested => self.visible = true,
            AuthDialogAction::Close => self.visible = false,
            AuthDialogAction::UsePassword => self.mode = FormMode::PasswordForm,
            AuthDialogAction::CancelPassword => self.mode = FormMode::Buttons,
            AuthDialogAction::EmailChanged(email) => {
                self.draft = std::mem::take(&mut self.draft).with_email(email);
            }
            AuthDialogAction::PasswordChanged(password) => {
                self.draft = std::mem::take(&mut self.draft).with_password(password);
            }
            AuthDialogAction::SignInStarted(method) => {
                self.loading.set(method, true);
                self.error = None;
            }
            AuthDialogAction::SignInSettled { method, error } => {
                self.finish_sign_in(method);
                match error {
                    Some(error) => self.error = Some(DialogError::SignIn { method, error }),
                    None => {
                        if matches!(
                            self.error,
                            Some(DialogError::SignIn { method: failed, .. }) if failed == method
                        ) {
                            self.error = None;
                        }
                    }
                }
            }
            AuthDialogAction::SignInAbandoned(method) => self.finish_sign_in(method),
            AuthDialogAction::ValidationFailed(error) => {
                self.error = Some(DialogError::Validation(error));
            }
            AuthDialogAction::SignOutSettled { error } => {
                self.error = error.map(DialogError::SignOut);
            }
            AuthDialogAction::SessionChanged(user) => {
                if self.user.is_some() != user.is_some() {
                    self.mode = FormMode::Buttons;
                }
                self.user = user;
            }
            AuthDialogAction::DismissError => self.error = None,
        }
    }

    const fn finish_sign_in(&mut self, method: SignInMethod) {
        self.loading.set(method, false);
        if matches!(method, SignInMethod::Password) {
            self.mode = FormMode::Buttons;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::new("alice").with_display_name("Alice")
    }

    fn reduce_all(state: &mut AuthDialogState, actions: Vec<AuthDialogAction>) {
        for action in actions {
            state.reduce(action);
        }
    }

    #[test]
    fn view_follows_session_presence() {
        let mut state = AuthDialogState::mounted(None);
        assert_eq!(state.view(), DialogView::LoggedOutButtons);
        state.reduce(AuthDialogAction::UsePassword);
        assert_eq!(state.view(), DialogView::LoggedOutPasswordForm);

        let signed_in = AuthDialogState::mounted(Some(alice()));
        assert_eq!(signed_in.view(), DialogView::LoggedIn);
        let mut password_mode = signed_in;
        password_mode.mode = FormMode::PasswordForm;
        assert_eq!(password_mode.view(), DialogView::LoggedIn);
    }

    #[test]
    fn open_is_idempotent() {
        let mut state = AuthDialogState::default();
        state.reduce(AuthDialogAction::OpenRequested);
        assert!(state.visible);
        state.reduce(AuthDialogAction::OpenRequested);
        assert!(state.visible);
        state.reduce(AuthDialogAction::Close);
        assert!(!state.visible);
    }

    #[test]
    fn cancel_keeps_draft() {
        let mut state = AuthDialogState::default();
        reduce_all(
            &mut state,
            vec![
                AuthDialogAction::UsePassword,
                AuthDialogAction::EmailChanged("a@b.com".to_string()),
                AuthDialogAction::PasswordChanged("secret".to_string()),
                AuthDialogAction::CancelPassword,
            ],
        );
        assert_eq!(state.view(), DialogView::LoggedOutButtons);
        assert_eq!(state.draft.email, "a@b.com");
        assert_eq!(state.draft.password, "secret");

        state.reduce(AuthDialogAction::UsePassword);
        assert_eq!(state.draft.email, "a@b.com");
    }

    #[test]
    fn password_settle_returns_to_buttons_on_any_outcome() {
        for error in [None, Some(AuthError::InvalidCredentials)] {
            let mut state = AuthDialogState::default();
            reduce_all(
                &mut state,
                vec![
                    AuthDialogAction::UsePassword,
                    AuthDialogAction::SignInStarted(SignInMethod::Password),
                ],
            );
            assert!(state.loading.password);
            state.reduce(AuthDialogAction::SignInSettled {
                method: SignInMethod::Password,
                error: error.clone(),
            });
            assert!(!state.loading.password);
            assert_eq!(state.mode, FormMode::Buttons);
            assert_eq!(state.error.is_some(), error.is_some());
        }
    }

    #[test]
    fn validation_failure_stays_in_form() {
        let mut state = AuthDialogState::default();
        reduce_all(
            &mut state,
            vec![
                AuthDialogAction::UsePassword,
                AuthDialogAction::ValidationFailed(ValidationError::EmptyEmail),
            ],
        );
        assert_eq!(state.view(), DialogView::LoggedOutPasswordForm);
        assert_eq!(
            state.error.as_ref().map(DialogError::message_key),
            Some("modals.auth.errors.empty_email")
        );
        state.reduce(AuthDialogAction::DismissError);
        assert_eq!(state.error, None);
    }

    #[test]
    fn flags_are_independent() {
        let mut state = AuthDialogState::default();
        reduce_all(
            &mut state,
            vec![
                AuthDialogAction::SignInStarted(SignInMethod::Google),
                AuthDialogAction::SignInStarted(SignInMethod::Anonymous),
            ],
        );
        assert!(state.loading.google && state.loading.anonymous);
        state.reduce(AuthDialogAction::SignInSettled {
            method: SignInMethod::Anonymous,
            error: None,
        });
        assert!(state.loading.google);
        assert!(!state.loading.anonymous);
        state.reduce(AuthDialogAction::SignInAbandoned(SignInMethod::Google));
        assert_eq!(state.loading, LoadingFlags::default());
    }

    #[test]
    fn success_keeps_another_methods_failure() {
        let mut state = AuthDialogState::default();
        reduce_all(
            &mut state,
            vec![
                AuthDialogAction::SignInStarted(SignInMethod::Google),
                AuthDialogAction::SignInStarted(SignInMethod::Anonymous),
                AuthDialogAction::SignInSettled {
                    method: SignInMethod::Google,
                    error: Some(AuthError::PopupClosed),
                },
                AuthDialogAction::SignInSettled {
                    method: SignInMethod::Anonymous,
                    error: None,
                },
            ],
        );
        assert_eq!(
            state.error,
            Some(DialogError::SignIn {
                method: SignInMethod::Google,
                error: AuthError::PopupClosed,
            })
        );
    }

    #[test]
    fn success_clears_own_earlier_failure() {
        let mut state = AuthDialogState::default();
        reduce_all(
            &mut state,
            vec![
                AuthDialogAction::SignInSettled {
                    method: SignInMethod::Google,
                    error: Some(AuthError::PopupClosed),
                },
                AuthDialogAction::SignInSettled {
                    method: SignInMethod::Google,
                    error: None,
                },
            ],
        );
        assert_eq!(state.error, None);
    }

    #[test]
    fn session_transitions_reset_form_mode() {
        let mut state = AuthDialogState::default();
        state.reduce(AuthDialogAction::UsePassword);
        state.reduce(AuthDialogAction::SessionChanged(Some(alice())));
        assert_eq!(state.view(), DialogView::LoggedIn);

        state.reduce(AuthDialogAction::SessionChanged(None));
        assert_eq!(state.view(), DialogView::LoggedOutButtons);
    }

    #[test]
    fn sign_out_failure_is_surfaced() {
        let mut state = AuthDialogState::mounted(Some(alice()));
        state.reduce(AuthDialogAction::SignOutSettled {
            error: Some(AuthError::Network {
                detail: "offline".to_string(),
            }),
        });
        assert_eq!(
            state.error.as_ref().map(DialogError::message_key),
            Some("modals.auth.errors.logout")
        );
        assert_eq!(state.view(), DialogView::LoggedIn);
    }
}
