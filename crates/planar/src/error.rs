//! Construction-time geometry errors.
//!
//! Policy: fail fast at construction, never at query time. Every containment
//! predicate is a total function; anything it could choke on is rejected
//! here instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {got}")]
    TooFewVertices { got: usize },

    #[error("{kind} requires exactly {expected} vertices, got {got}")]
    VertexCount {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("non-finite coordinate in {what}")]
    NonFinite { what: &'static str },

    #[error("zero-length edge between vertices {i} and {j}")]
    DegenerateEdge { i: usize, j: usize },

    #[error("polygon boundary self-intersects (edges {e1} and {e2})")]
    SelfIntersecting { e1: usize, e2: usize },

    #[error("major axis {major_axis} is shorter than the focal separation {focal_separation}")]
    MajorAxisTooShort {
        major_axis: f64,
        focal_separation: f64,
    },
}
