//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two independently built instances with the same values
//! are interchangeable (as map keys, in set membership checks, in equality).

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// The bounds spell out what value semantics needs in practice:
/// - **Clone**: values are copied, never shared by reference
/// - **Eq + Hash**: equal values collide in sets and maps
/// - **Debug**: values show up in errors and test failures
///
/// ```
/// use pacioli_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Currency(String);
///
/// impl ValueObject for Currency {}
///
/// assert_eq!(Currency("EUR".into()), Currency("EUR".into()));
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
