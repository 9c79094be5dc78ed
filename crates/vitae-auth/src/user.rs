//! Session user as reported by the authentication provider.

use serde::{Deserialize, Serialize};

/// Authenticated user snapshot. Owned by the provider; callers only read it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Provider-assigned user identifier.
    pub uid: String,
    /// Display name, when the account has one.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Email address, when known.
    #[serde(default)]
    pub email: Option<String>,
    /// Whether the session was created by anonymous sign-in.
    #[serde(default)]
    pub is_anonymous: bool,
}

impl User {
    /// Build a user with only an identifier.
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            email: None,
            is_anonymous: false,
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Attach an email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Mark the user as anonymous.
    #[must_use]
    pub const fn anonymous(mut self) -> Self {
        self.is_anonymous = true;
        self
    }

    /// Display name, or `fallback` when unset or empty. Whitespace is kept as given.
    #[must_use]
    pub fn display_name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::User;

    #[test]
    fn display_name_falls_back_when_missing_or_empty() {
        let named = User::new("u1").with_display_name("Alice");
        assert_eq!(named.display_name_or("Agent 47"), "Alice");

        let unnamed = User::new("u2");
        assert_eq!(unnamed.display_name_or("Agent 47"), "Agent 47");

        let empty = User::new("u3").with_display_name("");
        assert_eq!(empty.display_name_or("Agent 47"), "Agent 47");
    }

    #[test]
    fn display_name_is_shown_verbatim() {
        let padded = User::new("u4").with_display_name("  Alice ");
        assert_eq!(padded.display_name_or("Agent 47"), "  Alice ");

        let spaces = User::new("u5").with_display_name("   ");
        assert_eq!(spaces.display_name_or("Agent 47"), "   ");
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let user: User = serde_json::from_str(
            r#"{"uid":"abc","displayName":"Bob","isAnonymous":false}"#,
        )
        .expect("user payload");
        assert_eq!(user.uid, "abc");
        assert_eq!(user.display_name.as_deref(), Some("Bob"));
        assert_eq!(user.email, None);
        assert!(!user.is_anonymous);
    }
}
