//! The containment capability.

use crate::point::Point2;

/// Polymorphic containment test: one predicate, no shared state.
///
/// Implementations are stateless over immutable geometry and never fail at
/// query time; any non-finite or degenerate input is handled by returning
/// `false` or by rejection at shape construction.
pub trait Shape {
    /// Whether `p` is contained in the shape. See each implementation for
    /// its exact boundary semantics.
    fn contains(&self, p: Point2) -> bool;
}
