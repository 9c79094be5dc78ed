//! Broadcast-backed modal request bus.
//!
//! Requests travel over a bounded `tokio::sync::broadcast` channel. A modal
//! subscribes for one [`ModalEvent`] and turns its listener into a future that
//! the caller spawns on its local executor; the [`Subscription`] returned next to
//! that future aborts it on drop, which releases the receiver.

use crate::ModalEvent;
use crate::error::{BusError, BusResult};
use futures::future::{AbortHandle, Abortable};
use std::future::Future;
use tokio::sync::broadcast::{self, Receiver, Sender, error::RecvError};

/// Default broadcast buffer size.
const DEFAULT_CAPACITY: usize = 16;

/// Shared modal request bus. Clones publish on the same channel.
#[derive(Clone, Debug)]
pub struct ModalBus {
    sender: Sender<ModalEvent>,
}

impl ModalBus {
    /// Construct a bus with the default buffer size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Construct a bus buffering up to `capacity` undelivered requests per
    /// listener.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "modal bus capacity must be positive");
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Listen for `event`. Requests emitted before this call are not seen.
    #[must_use]
    pub fn subscribe(&self, event: ModalEvent) -> ModalListener {
        tracing::debug!(event = event.kind(), "modal listener registered");
        ModalListener {
            event,
            receiver: self.sender.subscribe(),
        }
    }

    /// Publish `event` and return how many listeners were live to receive it.
    ///
    /// # Errors
    /// Returns [`BusError::NoSubscribers`] when nothing is listening.
    pub fn emit(&self, event: ModalEvent) -> BusResult<usize> {
        match self.sender.send(event) {
            Ok(listeners) => {
                tracing::debug!(event = event.kind(), listeners, "modal request published");
                Ok(listeners)
            }
            Err(_) => {
                tracing::warn!(event = event.kind(), "modal request dropped");
                Err(BusError::NoSubscribers {
                    event_kind: event.kind(),
                })
            }
        }
    }
}

impl Default for ModalBus {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ModalBus {
    fn eq(&self, other: &Self) -> bool {
        self.sender.same_channel(&other.sender)
    }
}

/// Receiving end for one modal event.
#[derive(Debug)]
pub struct ModalListener {
    event: ModalEvent,
    receiver: Receiver<ModalEvent>,
}

impl ModalListener {
    /// Wait for the next request for this listener's event. Returns `None`
    /// once every bus handle is gone.
    pub async fn recv(&mut self) -> Option<ModalEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if event == self.event => return Some(event),
                Ok(_) => {}
                // Requests are idempotent; a lagged listener still owes one delivery.
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(event = self.event.kind(), skipped, "modal listener lagged");
                    return Some(self.event);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Run `handler` for every request until the returned [`Subscription`] is
    /// dropped. The future must be spawned (or polled) by the caller.
    pub fn attach<F>(mut self, handler: F) -> (impl Future<Output = ()>, Subscription)
    where
        F: Fn(),
    {
        let (abort, registration) = AbortHandle::new_pair();
        let event = self.event;
        let run = async move {
            while self.recv().await.is_some() {
                handler();
            }
        };
        let task = Abortable::new(run, registration);
        let listen = async move {
            if task.await.is_err() {
                tracing::debug!(event = event.kind(), "modal listener released");
            }
        };
        (listen, Subscription { abort })
    }
}

/// Scoped subscription guard; aborts the listener future on drop.
#[derive(Debug)]
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    abort: AbortHandle,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::poll;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(bus: &ModalBus, hits: &Rc<Cell<u32>>) -> (impl Future<Output = ()>, Subscription) {
        let hits = Rc::clone(hits);
        bus.subscribe(ModalEvent::Auth)
            .attach(move || hits.set(hits.get() + 1))
    }

    #[tokio::test]
    async fn emit_reaches_listener_until_guard_drops() {
        let bus = ModalBus::new();
        let hits = Rc::new(Cell::new(0));
        let (listen, guard) = counting(&bus, &hits);
        let mut listen = Box::pin(listen);
        assert!(poll!(listen.as_mut()).is_pending());

        assert_eq!(bus.emit(ModalEvent::Auth), Ok(1));
        assert_eq!(bus.emit(ModalEvent::Auth), Ok(1));
        assert!(poll!(listen.as_mut()).is_pending());
        assert_eq!(hits.get(), 2);

        drop(guard);
        assert!(poll!(listen.as_mut()).is_ready());
        drop(listen);
        assert_eq!(
            bus.emit(ModalEvent::Auth),
            Err(BusError::NoSubscribers {
                event_kind: "auth_modal"
            })
        );
        assert_eq!(hits.get(), 2);
    }

    #[tokio::test]
    async fn remount_does_not_duplicate_handlers() {
        let bus = ModalBus::new();
        let hits = Rc::new(Cell::new(0));

        let (first, first_guard) = counting(&bus, &hits);
        drop(first_guard);
        drop(first);
        let (second, _second_guard) = counting(&bus, &hits);
        let mut second = Box::pin(second);

        assert_eq!(bus.emit(ModalEvent::Auth), Ok(1));
        assert!(poll!(second.as_mut()).is_pending());
        assert_eq!(hits.get(), 1);
    }

    #[tokio::test]
    async fn emit_without_listener_is_reported() {
        let bus = ModalBus::new();
        let err = bus.emit(ModalEvent::Auth).expect_err("no listener");
        assert_eq!(err.event_kind(), "auth_modal");
    }

    #[tokio::test]
    async fn listener_ends_when_bus_is_gone() {
        let bus = ModalBus::new();
        let mut listener = bus.subscribe(ModalEvent::Auth);
        drop(bus);
        assert_eq!(listener.recv().await, None);
    }

    #[tokio::test]
    async fn lagged_listener_still_opens_once() {
        let bus = ModalBus::with_capacity(1);
        let mut listener = bus.subscribe(ModalEvent::Auth);
        for _ in 0..3 {
            bus.emit(ModalEvent::Auth).expect("listener is live");
        }
        assert_eq!(listener.recv().await, Some(ModalEvent::Auth));
    }

    #[test]
    fn clones_share_channel() {
        let bus = ModalBus::new();
        let clone = bus.clone();
        let _listener = clone.subscribe(ModalEvent::Auth);
        assert_eq!(bus.emit(ModalEvent::Auth), Ok(1));
        assert_eq!(bus, clone);
        assert_ne!(bus, ModalBus::new());
    }
}
