//! Dialog configuration.
//!
//! # Design
//! - Every field has a default so partial JSON overrides stay valid.
//! - Parsing failures fall back to defaults; the caller decides how to log.

use serde::Deserialize;

/// Path the "go to app" action navigates to.
pub const DEFAULT_DASHBOARD_PATH: &str = "/app/dashboard";
/// Name shown in the welcome title when the user has no display name.
pub const DEFAULT_FALLBACK_NAME: &str = "Agent 47";

/// Tunables for the sign-in dialog.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DialogConfig {
    /// Destination for the "go to app" action.
    pub dashboard_path: String,
    /// Placeholder name for users without a display name.
    pub fallback_display_name: String,
    /// Reject emails that do not look like addresses before calling the provider.
    pub require_well_formed_email: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_string(),
            fallback_display_name: DEFAULT_FALLBACK_NAME.to_string(),
            require_well_formed_email: true,
        }
    }
}

impl DialogConfig {
    /// Parse a JSON override on top of the defaults.
    ///
    /// # Errors
    /// Returns the parse error when `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_values() {
        let config = DialogConfig::default();
        assert_eq!(config.dashboard_path, "/app/dashboard");
        assert_eq!(config.fallback_display_name, "Agent 47");
        assert!(config.require_well_formed_email);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            DialogConfig::from_json(r#"{"fallback_display_name":"Guest"}"#).expect("config");
        assert_eq!(config.fallback_display_name, "Guest");
        assert_eq!(config.dashboard_path, DEFAULT_DASHBOARD_PATH);
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(DialogConfig::from_json("not json").is_err());
    }
}
