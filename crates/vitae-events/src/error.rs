//! Modal bus error primitives.

use thiserror::Error;

/// Error emitted when a modal request cannot be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusError {
    /// No modal is currently subscribed to the event.
    #[error("no subscriber for {event_kind}")]
    NoSubscribers {
        /// Event kind string for filtering in logs.
        event_kind: &'static str,
    },
}

impl BusError {
    /// Event kind associated with the failed delivery.
    #[must_use]
    pub const fn event_kind(&self) -> &'static str {
        match self {
            Self::NoSubscribers { event_kind } => event_kind,
        }
    }
}

/// Result wrapper for bus operations.
pub type BusResult<T> = Result<T, BusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_error_exposes_fields() {
        let err = BusError::NoSubscribers {
            event_kind: "auth_modal",
        };
        assert_eq!(err.event_kind(), "auth_modal");
        assert_eq!(err.to_string(), "no subscriber for auth_modal");
    }
}
