//! Ellipse via the focal-distance characterization.
//!
//! A point lies on the boundary of an ellipse iff the sum of its distances
//! to the two foci equals the major-axis length; it lies inside iff that sum
//! is smaller. Floating-point comparison uses an explicit tolerance instead
//! of exact equality, with `BOUNDARY_EPS` as the default.
//!
//! Both predicates are exposed under distinct names (`is_on_boundary`,
//! `is_inside_or_on_boundary`); the `Shape` impl keeps the literal
//! on-boundary semantics — see the note there.

use crate::error::GeometryError;
use crate::point::Point2;
use crate::shape::Shape;

/// Default tolerance for boundary predicates.
pub const BOUNDARY_EPS: f64 = 1e-10;

/// Ellipse defined by its two foci and major-axis length.
///
/// `center` is a scalar kept for structural parity with the system this is
/// modeled on; no predicate reads it.
#[derive(Clone, Copy, Debug)]
pub struct Ellipse {
    center: f64,
    foci: (Point2, Point2),
    major_axis: f64,
}

impl Ellipse {
    /// Fails when the parameters cannot describe an ellipse: non-finite
    /// focus coordinates or major axis, or a major axis shorter than the
    /// focal separation.
    pub fn new(
        center: f64,
        foci: (Point2, Point2),
        major_axis: f64,
    ) -> Result<Self, GeometryError> {
        if !foci.0.is_finite() || !foci.1.is_finite() {
            return Err(GeometryError::NonFinite { what: "focus" });
        }
        if !major_axis.is_finite() {
            return Err(GeometryError::NonFinite { what: "major axis" });
        }
        let focal_separation = foci.0.distance(foci.1);
        if major_axis < focal_separation {
            return Err(GeometryError::MajorAxisTooShort {
                major_axis,
                focal_separation,
            });
        }
        Ok(Self {
            center,
            foci,
            major_axis,
        })
    }

    /// Unused by any predicate; see the type-level note.
    #[inline]
    pub fn center(&self) -> f64 {
        self.center
    }

    #[inline]
    pub fn foci(&self) -> (Point2, Point2) {
        self.foci
    }

    #[inline]
    pub fn major_axis(&self) -> f64 {
        self.major_axis
    }

    /// Sum of Euclidean distances from `p` to both foci. Commutative in the
    /// foci, so swapping them never changes any predicate. Coincident foci
    /// degrade to twice the distance to the shared point (the circle case).
    #[inline]
    pub fn focal_distance_sum(&self, p: Point2) -> f64 {
        p.distance(self.foci.0) + p.distance(self.foci.1)
    }

    /// `|focal_distance_sum(p) − major_axis| < eps`.
    #[inline]
    pub fn is_on_boundary_eps(&self, p: Point2, eps: f64) -> bool {
        (self.focal_distance_sum(p) - self.major_axis).abs() < eps
    }

    /// Shorthand for `is_on_boundary_eps(p, BOUNDARY_EPS)`.
    #[inline]
    pub fn is_on_boundary(&self, p: Point2) -> bool {
        self.is_on_boundary_eps(p, BOUNDARY_EPS)
    }

    /// `focal_distance_sum(p) <= major_axis + eps`.
    #[inline]
    pub fn is_inside_or_on_boundary_eps(&self, p: Point2, eps: f64) -> bool {
        self.focal_distance_sum(p) <= self.major_axis + eps
    }

    /// Shorthand for `is_inside_or_on_boundary_eps(p, BOUNDARY_EPS)`.
    #[inline]
    pub fn is_inside_or_on_boundary(&self, p: Point2) -> bool {
        self.is_inside_or_on_boundary_eps(p, BOUNDARY_EPS)
    }
}

impl Shape for Ellipse {
    /// Literal on-boundary test: true iff the focal distance sum matches the
    /// major axis within `BOUNDARY_EPS`. Interior points fail it. This
    /// mismatch between the name and the region tested is a preserved quirk
    /// of the modeled system; use `is_inside_or_on_boundary` for the
    /// inclusive region.
    #[inline]
    fn contains(&self, p: Point2) -> bool {
        self.is_on_boundary(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_foci_ellipse() -> Ellipse {
        Ellipse::new(
            0.0,
            (Point2::new(1.0, 0.0), Point2::new(-1.0, 0.0)),
            6.0,
        )
        .unwrap()
    }

    #[test]
    fn exact_boundary_point() {
        // |3-1| + |3+1| = 6 exactly.
        let e = unit_foci_ellipse();
        let p = Point2::new(3.0, 0.0);
        assert_eq!(e.focal_distance_sum(p), 6.0);
        assert!(e.is_on_boundary(p));
        assert!(e.contains(p));
    }

    #[test]
    fn epsilon_straddle() {
        // On the +x axis beyond both foci the focal sum is 2x, so a shift of
        // d in x moves the sum by exactly 2d.
        let e = unit_foci_ellipse();
        assert!(e.is_on_boundary(Point2::new(3.0 + 4.95e-11, 0.0))); // diff 9.9e-11
        assert!(!e.is_on_boundary(Point2::new(3.0 + 5.5e-11, 0.0))); // diff 1.1e-10
    }

    #[test]
    fn demo_point_is_outside_tolerance() {
        // Focal sum 6.000000002 differs from 6.0 by 2e-9 > 1e-10.
        let e = unit_foci_ellipse();
        assert!(!e.contains(Point2::new(3.000000001, 0.0)));
    }

    #[test]
    fn interior_point_quirk() {
        // Focal sum at the center is 2.0 < 6.0: not "contained" under the
        // literal on-boundary semantics, but inside the inclusive region.
        let e = unit_foci_ellipse();
        let origin = Point2::new(0.0, 0.0);
        assert!(!e.contains(origin));
        assert!(e.is_inside_or_on_boundary(origin));
        // And exterior points fail both.
        let far = Point2::new(10.0, 10.0);
        assert!(!e.contains(far));
        assert!(!e.is_inside_or_on_boundary(far));
    }

    #[test]
    fn coincident_foci_degrade_to_circle() {
        let o = Point2::new(0.0, 0.0);
        let r = 2.5;
        let e = Ellipse::new(0.0, (o, o), 2.0 * r).unwrap();
        // On the circle of radius r, in any direction.
        assert!(e.is_on_boundary(Point2::new(r, 0.0)));
        assert!(e.is_on_boundary(Point2::new(0.0, -r)));
        let d = std::f64::consts::FRAC_1_SQRT_2 * r;
        assert!(e.is_on_boundary_eps(Point2::new(d, d), 1e-9));
        // Off the circle.
        assert!(!e.is_on_boundary(Point2::new(r + 0.1, 0.0)));
        assert!(e.is_inside_or_on_boundary(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn construction_rejects_short_major_axis() {
        let foci = (Point2::new(2.0, 0.0), Point2::new(-2.0, 0.0));
        let err = Ellipse::new(0.0, foci, 3.0).unwrap_err();
        assert!(matches!(err, GeometryError::MajorAxisTooShort { .. }));
        // Exactly the focal separation (degenerate segment) is accepted.
        assert!(Ellipse::new(0.0, foci, 4.0).is_ok());
    }

    #[test]
    fn construction_rejects_non_finite_input() {
        let good = Point2::new(1.0, 0.0);
        let bad = Point2::new(f64::NAN, 0.0);
        assert!(matches!(
            Ellipse::new(0.0, (good, bad), 6.0),
            Err(GeometryError::NonFinite { .. })
        ));
        assert!(matches!(
            Ellipse::new(0.0, (good, good), f64::INFINITY),
            Err(GeometryError::NonFinite { .. })
        ));
    }

    proptest! {
        #[test]
        fn foci_swap_never_changes_predicates(
            fx in -50.0..50.0f64, fy in -50.0..50.0f64,
            gx in -50.0..50.0f64, gy in -50.0..50.0f64,
            px in -100.0..100.0f64, py in -100.0..100.0f64,
            slack in 0.0..20.0f64,
        ) {
            let f = Point2::new(fx, fy);
            let g = Point2::new(gx, gy);
            let major = f.distance(g) + slack;
            let e1 = Ellipse::new(0.0, (f, g), major).unwrap();
            let e2 = Ellipse::new(0.0, (g, f), major).unwrap();
            let p = Point2::new(px, py);
            // IEEE addition is commutative, so the sums are bitwise equal.
            prop_assert_eq!(e1.focal_distance_sum(p), e2.focal_distance_sum(p));
            prop_assert_eq!(e1.contains(p), e2.contains(p));
            prop_assert_eq!(
                e1.is_inside_or_on_boundary(p),
                e2.is_inside_or_on_boundary(p)
            );
        }
    }
}
