//! HTTP status classification for the auth endpoints.

use vitae_auth::AuthError;

/// Status the session endpoint answers with when nobody is signed in.
pub const SIGNED_OUT: u16 = 401;

/// Failure for a non-success status the backend gives a fixed meaning, or
/// `None` when the response body should become the rejection reason.
#[must_use]
pub const fn known_failure(status: u16) -> Option<AuthError> {
    match status {
        SIGNED_OUT => Some(AuthError::InvalidCredentials),
        404 | 501 => Some(AuthError::Unavailable),
        410 => Some(AuthError::PopupClosed),
        _ => None,
    }
}

/// Whether a non-success session lookup needs reporting. A signed-out answer
/// is the normal cold-start case.
#[must_use]
pub const fn restore_failed(status: u16) -> bool {
    status != SIGNED_OUT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_statuses_map_to_auth_errors() {
        assert_eq!(known_failure(401), Some(AuthError::InvalidCredentials));
        assert_eq!(known_failure(404), Some(AuthError::Unavailable));
        assert_eq!(known_failure(501), Some(AuthError::Unavailable));
        assert_eq!(known_failure(410), Some(AuthError::PopupClosed));
        assert_eq!(known_failure(500), None);
        assert_eq!(known_failure(403), None);
    }

    #[test]
    fn only_signed_out_restore_is_silent() {
        assert!(!restore_failed(401));
        assert!(restore_failed(500));
        assert!(restore_failed(403));
        assert!(restore_failed(404));
    }
}
