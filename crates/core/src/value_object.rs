//! Value object trait: equality by value, not identity.
//!
//! Stock rows, transfer recommendations and summary lines have **no identity**:
//! two recommendations moving the same quantity between the same sites for the
//! same article are the same recommendation.

/// Marker trait for value objects.
///
/// Implementors are compared by their attribute values and are never mutated
/// after a pipeline stage hands them on; a later stage produces new values
/// instead.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
