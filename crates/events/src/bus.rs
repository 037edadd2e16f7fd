//! Event publishing/subscription abstraction (mechanics only).
//!
//! A lightweight pub/sub contract used to tell UI collaborators that the wizard
//! draft changed:
//!
//! - **Broadcast**: every subscriber receives its own copy of every message
//! - **In-order per publisher**: messages arrive in publication order
//! - **No persistence**: the store is the source of truth, the bus only signals
//!
//! Subscribers are expected to re-read state (or take a snapshot) on receipt,
//! so dropping or coalescing notifications never corrupts what they render.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

/// A subscription to an event stream.
///
/// ```ignore
/// let subscription = state.subscribe();
/// state.next_step();
///
/// while let Ok(envelope) = subscription.try_recv() {
///     rerender(envelope.payload());
/// }
/// ```
///
/// Dropping the subscription unsubscribes; the bus prunes it on the next publish.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain every message that is already queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// `publish()` can fail (e.g. poisoned lock). Callers decide whether that is
/// fatal; the wizard store logs and carries on because state is already updated.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
