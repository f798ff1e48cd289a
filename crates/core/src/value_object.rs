//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A query,
/// a weight vector or an explanation line are value objects; a catalog item or a
/// session is an entity.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Weights { camera: f64, battery: f64 }
///
/// impl ValueObject for Weights {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
