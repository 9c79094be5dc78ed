//! Canned users returned by the mock provider.

use vitae_auth::User;

/// User returned by a successful Google sign-in.
#[must_use]
pub fn google_user() -> User {
    User::new("google-uid")
        .with_display_name("Google User")
        .with_email("google.user@example.com")
}

/// User returned by a successful anonymous sign-in.
#[must_use]
pub fn anonymous_user() -> User {
    User::new("anonymous-uid").anonymous()
}

/// User returned by a successful password sign-in. Password accounts start
/// without a display name.
#[must_use]
pub fn password_user(email: &str) -> User {
    User::new(format!("password-{email}")).with_email(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_have_expected_shape() {
        assert_eq!(google_user().display_name.as_deref(), Some("Google User"));
        assert!(anonymous_user().is_anonymous);
        let user = password_user("a@b.com");
        assert_eq!(user.email.as_deref(), Some("a@b.com"));
        assert_eq!(user.display_name, None);
    }
}
