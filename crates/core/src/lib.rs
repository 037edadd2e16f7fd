//! `offerwiz-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the wizard store and
//! its collaborators (no UI, no storage concerns).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ImageId, SessionId, TierId};
pub use value_object::ValueObject;
