//! Simple polygons and the crossing-number containment test.
//!
//! Purpose
//! - `Polygon`: ordered vertex list with a validated, simple boundary.
//! - Containment by ray casting: cast a +x ray from the query point, count
//!   proper edge crossings with the half-open rule, inside iff odd. Points
//!   on the boundary are contained (checked before the parity walk).
//!
//! Why validate at construction
//! - The crossing test silently misclassifies on self-intersecting or
//!   degenerate boundaries, so those are rejected up front; the query-time
//!   predicate stays total.

use nalgebra::Vector2;

use crate::error::GeometryError;
use crate::point::Point2;
use crate::shape::Shape;

/// Tolerance for on-segment checks and intersection sign tests.
const EDGE_EPS: f64 = 1e-12;

/// Simple polygon over an ordered vertex list.
///
/// Invariants (enforced by `new`):
/// - At least 3 vertices, all coordinates finite.
/// - No zero-length edge (consecutive duplicate vertices).
/// - No pair of non-adjacent edges crosses properly.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point2>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                got: vertices.len(),
            });
        }
        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite { what: "vertex" });
        }
        let n = vertices.len();
        for i in 0..n {
            let j = (i + 1) % n;
            if vertices[i].distance(vertices[j]) < EDGE_EPS {
                return Err(GeometryError::DegenerateEdge { i, j });
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                // Adjacent edges share a vertex; the wrap pair (0, n-1) too.
                if j == i + 1 || (i == 0 && j == n - 1) {
                    continue;
                }
                let (a, b) = (vertices[i], vertices[(i + 1) % n]);
                let (c, d) = (vertices[j], vertices[(j + 1) % n]);
                if segments_cross_properly(a, b, c, d) {
                    return Err(GeometryError::SelfIntersecting { e1: i, e2: j });
                }
            }
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Crossing-number containment, boundary inclusive.
    ///
    /// Edges are counted with the half-open rule `(a.y > p.y) != (b.y > p.y)`,
    /// so shared vertices and horizontal edges are never double-counted.
    /// Points within `EDGE_EPS` of an edge count as contained.
    pub fn contains(&self, p: Point2) -> bool {
        if !p.is_finite() {
            return false;
        }
        let n = self.vertices.len();
        for i in 0..n {
            if on_segment(self.vertices[i], self.vertices[(i + 1) % n], p) {
                return true;
            }
        }
        let mut inside = false;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            if (a.y() > p.y()) != (b.y() > p.y()) {
                // Non-horizontal by the half-open rule, so the division is safe.
                let t = (p.y() - a.y()) / (b.y() - a.y());
                let x_cross = a.x() + t * (b.x() - a.x());
                if p.x() < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

impl Shape for Polygon {
    #[inline]
    fn contains(&self, p: Point2) -> bool {
        Polygon::contains(self, p)
    }
}

/// Polygon the caller asserts has exactly four vertices. Containment
/// delegates to `Polygon` unchanged.
#[derive(Clone, Debug)]
pub struct Rectangle(Polygon);

impl Rectangle {
    pub fn new(vertices: Vec<Point2>) -> Result<Self, GeometryError> {
        if vertices.len() != 4 {
            return Err(GeometryError::VertexCount {
                kind: "rectangle",
                expected: 4,
                got: vertices.len(),
            });
        }
        Ok(Self(Polygon::new(vertices)?))
    }

    /// CCW corners of the axis-aligned box spanned by `min` and `max`.
    pub fn axis_aligned(min: Point2, max: Point2) -> Result<Self, GeometryError> {
        Self::new(vec![
            Point2::new(min.x(), min.y()),
            Point2::new(max.x(), min.y()),
            Point2::new(max.x(), max.y()),
            Point2::new(min.x(), max.y()),
        ])
    }

    #[inline]
    pub fn as_polygon(&self) -> &Polygon {
        &self.0
    }
}

impl Shape for Rectangle {
    #[inline]
    fn contains(&self, p: Point2) -> bool {
        self.0.contains(p)
    }
}

/// Polygon the caller asserts has exactly five vertices. Containment
/// delegates to `Polygon` unchanged.
#[derive(Clone, Debug)]
pub struct Pentagon(Polygon);

impl Pentagon {
    pub fn new(vertices: Vec<Point2>) -> Result<Self, GeometryError> {
        if vertices.len() != 5 {
            return Err(GeometryError::VertexCount {
                kind: "pentagon",
                expected: 5,
                got: vertices.len(),
            });
        }
        Ok(Self(Polygon::new(vertices)?))
    }

    #[inline]
    pub fn as_polygon(&self) -> &Polygon {
        &self.0
    }
}

impl Shape for Pentagon {
    #[inline]
    fn contains(&self, p: Point2) -> bool {
        self.0.contains(p)
    }
}

#[inline]
fn cross(o: Point2, a: Point2, b: Point2) -> f64 {
    let oa = a.to_vector() - o.to_vector();
    let ob = b.to_vector() - o.to_vector();
    oa.x * ob.y - oa.y * ob.x
}

/// `p` lies on segment `ab` within `EDGE_EPS` perpendicular distance.
fn on_segment(a: Point2, b: Point2, p: Point2) -> bool {
    let ab: Vector2<f64> = b.to_vector() - a.to_vector();
    let ap: Vector2<f64> = p.to_vector() - a.to_vector();
    // Edge length is nonzero: the constructor rejects degenerate edges.
    let len = ab.norm();
    let perp = (ab.x * ap.y - ab.y * ap.x).abs() / len;
    if perp > EDGE_EPS {
        return false;
    }
    let t = ab.dot(&ap) / (len * len);
    (-EDGE_EPS..=1.0 + EDGE_EPS).contains(&t)
}

/// Proper crossing of segments `ab` and `cd`: interiors intersect on both
/// sides. Collinear overlap and endpoint touches do not count.
fn segments_cross_properly(a: Point2, b: Point2, c: Point2, d: Point2) -> bool {
    let d1 = cross(c, d, a);
    let d2 = cross(c, d, b);
    let d3 = cross(a, b, c);
    let d4 = cross(a, b, d);
    let straddles = |s1: f64, s2: f64| {
        (s1 > EDGE_EPS && s2 < -EDGE_EPS) || (s1 < -EDGE_EPS && s2 > EDGE_EPS)
    };
    straddles(d1, d2) && straddles(d3, d4)
}
