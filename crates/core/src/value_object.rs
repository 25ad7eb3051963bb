//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and never change once built; two values
/// with the same fields are interchangeable. `Money` is the canonical example
/// here, while catalog items are entities keyed by `ItemId`.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
