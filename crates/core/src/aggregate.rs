//! Aggregate root trait for domain models that own a consistency boundary.

/// Aggregate root marker + minimal interface.
///
/// The wizard draft is a single aggregate: every mutation goes through it and
/// bumps its version, which observers use to detect stale snapshots.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Incremented once per effective mutation. No-op calls leave it unchanged.
    fn version(&self) -> u64;
}
