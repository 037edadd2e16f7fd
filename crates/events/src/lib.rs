//! Change notifications: event trait, envelope and an in-process pub/sub bus.
//!
//! The wizard store publishes one envelope per effective mutation; UI
//! collaborators subscribe and re-render when something they read changed.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
