//! Planar containment predicates.
//!
//! Purpose
//! - Point-in-shape tests over immutable 2D geometry: the ellipse
//!   focal-distance test and the crossing-number point-in-polygon test.
//! - All predicates are pure, total, and eps-explicit; malformed geometry is
//!   rejected at construction (`GeometryError`), never at query time.
//!
//! Conventions
//! - Coordinates are `f64`; distances use `nalgebra` norms.
//! - Every boundary predicate has an `_eps` variant taking an explicit
//!   tolerance next to the default-tolerance shorthand.

pub mod ellipse;
pub mod error;
pub mod point;
pub mod polygon;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use ellipse::{Ellipse, BOUNDARY_EPS};
pub use error::GeometryError;
pub use point::{Coord, Point2};
pub use polygon::{Pentagon, Polygon, Rectangle};
pub use shape::Shape;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ellipse::{Ellipse, BOUNDARY_EPS};
    pub use crate::error::GeometryError;
    pub use crate::point::{Coord, Point2};
    pub use crate::polygon::{Pentagon, Polygon, Rectangle};
    pub use crate::shape::Shape;
    pub use nalgebra::Vector2 as Vec2;
}
