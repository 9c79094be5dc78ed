#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

//! Modal request bus for the Vitae UI.
//!
//! Components ask for a modal by emitting a typed [`ModalEvent`]; the modal
//! that owns the event subscribes on mount, spawns the listener future, and
//! holds the returned [`Subscription`] until teardown. Dropping the guard
//! aborts the listener, so a remounted modal never ends up with duplicate
//! handlers.

pub mod bus;
pub mod error;

pub use bus::{ModalBus, ModalListener, Subscription};
pub use error::{BusError, BusResult};

/// Typed modal requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalEvent {
    /// Open the sign-in/sign-out dialog.
    Auth,
}

impl ModalEvent {
    /// Machine-friendly discriminator for logs.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Auth => "auth_modal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ModalEvent;

    #[test]
    fn event_kind_is_stable() {
        assert_eq!(ModalEvent::Auth.kind(), "auth_modal");
    }
}
