//! The original demonstration query: one ellipse, one point, print the
//! verdict of the literal on-boundary `contains`.
//!
//! The point sits 1e-9 off the boundary along the +x axis, which doubles in
//! the focal sum and exceeds the 1e-10 tolerance, so this prints `false`.

use planar::prelude::*;

fn main() {
    let e = Ellipse::new(
        0.0,
        (Point2::new(1.0, 0.0), Point2::new(-1.0, 0.0)),
        6.0,
    )
    .expect("valid ellipse");
    let p = Point2::new(3.000000001, 0.0);
    println!("{}", e.contains(p));
}
