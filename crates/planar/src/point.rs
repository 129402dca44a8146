//! Basic 2D point types consumed by the containment predicates.
//!
//! - `Coord`: capability for anything exposing Cartesian accessors.
//! - `Point2`: the concrete immutable point every shape operates on.

use nalgebra::Vector2;

/// Capability for coordinate access in the plane.
///
/// Shapes only need enough structure to compute distances; any value with
/// Cartesian accessors qualifies. No shared state or implementation.
pub trait Coord {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

/// Immutable 2D Cartesian point.
///
/// Coordinates are stored verbatim at construction; accessors return them
/// exactly. There is no mutation API.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    x: f64,
    y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Coord for Point2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl From<Vector2<f64>> for Point2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2> for Vector2<f64> {
    #[inline]
    fn from(p: Point2) -> Self {
        p.to_vector()
    }
}
