//! Value object trait: equality by value, not identity.
//!
//! Items, fees and breakdowns are value objects: two items with the same name
//! and cost are interchangeable, and a breakdown is nothing but its figures.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Item {
///     name: String,
///     cost: f64,
/// }
///
/// impl ValueObject for Item {}
/// ```
///
/// Monetary amounts are `f64`, so the trait only asks for `PartialEq`.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
