//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances holding the same values
/// are the same thing. A validated forecast request or a projected monthly row
/// is a value object; a stored history entry is an entity.
///
/// Value objects are immutable. To "change" one, build a new one (and, for
/// validated types, go through the validating constructor again).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
