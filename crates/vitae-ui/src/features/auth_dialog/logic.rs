//! Dialog copy helpers.
//!
//! # Design
//! - Pure functions of the session user, config, and translation bundle.

use crate::core::config::DialogConfig;
use crate::i18n::TranslationBundle;
use vitae_auth::User;

/// Dialog title: a welcome for signed-in users, a prompt otherwise.
#[must_use]
pub fn title(bundle: &TranslationBundle, user: Option<&User>, config: &DialogConfig) -> String {
    match user {
        Some(user) => {
            let name = user.display_name_or(&config.fallback_display_name);
            bundle.text_with("modals.auth.welcome", "Welcome, {{name}}!", &[("name", name)])
        }
        None => bundle.text("modals.auth.who_are_you", "Who are you?"),
    }
}

/// Dialog body copy.
#[must_use]
pub fn message(bundle: &TranslationBundle, user: Option<&User>) -> String {
    if user.is_some() {
        bundle.text("modals.auth.logged_in_text", "")
    } else {
        bundle.text("modals.auth.logged_out_text", "")
    }
}
