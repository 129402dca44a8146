use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use planar::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Point-in-shape containment queries")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Test a point against an ellipse given by its two foci and major axis
    Ellipse {
        /// Focus as `x,y`; pass exactly twice
        #[arg(long = "focus", value_parser = parse_point)]
        foci: Vec<Point2>,
        #[arg(long)]
        major_axis: f64,
        #[arg(long, value_parser = parse_point)]
        point: Point2,
        /// Interior-inclusive test instead of the default on-boundary test
        #[arg(long)]
        inclusive: bool,
    },
    /// Test a point against a polygon given by its ordered vertices
    Polygon {
        /// Vertex as `x,y`; repeat in boundary order
        #[arg(long = "vertex", value_parser = parse_point)]
        vertices: Vec<Point2>,
        #[arg(long, value_parser = parse_point)]
        point: Point2,
    },
    /// Polygon asserted to have exactly four vertices
    Rectangle {
        #[arg(long = "vertex", value_parser = parse_point)]
        vertices: Vec<Point2>,
        #[arg(long, value_parser = parse_point)]
        point: Point2,
    },
    /// Polygon asserted to have exactly five vertices
    Pentagon {
        #[arg(long = "vertex", value_parser = parse_point)]
        vertices: Vec<Point2>,
        #[arg(long, value_parser = parse_point)]
        point: Point2,
    },
    /// Reproduce the original demonstration query
    Demo,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Ellipse {
            foci,
            major_axis,
            point,
            inclusive,
        } => ellipse(foci, major_axis, point, inclusive),
        Action::Polygon { vertices, point } => polygon("polygon", vertices, point),
        Action::Rectangle { vertices, point } => rectangle(vertices, point),
        Action::Pentagon { vertices, point } => pentagon(vertices, point),
        Action::Demo => demo(),
    }
}

fn ellipse(foci: Vec<Point2>, major_axis: f64, point: Point2, inclusive: bool) -> Result<()> {
    if foci.len() != 2 {
        bail!("expected exactly two --focus arguments, got {}", foci.len());
    }
    let e = Ellipse::new(0.0, (foci[0], foci[1]), major_axis)?;
    tracing::info!(major_axis, inclusive, "ellipse query");
    let contained = if inclusive {
        e.is_inside_or_on_boundary(point)
    } else {
        e.contains(point)
    };
    let out = serde_json::json!({
        "shape": "ellipse",
        "semantics": if inclusive { "inside_or_on_boundary" } else { "on_boundary" },
        "major_axis": e.major_axis(),
        "focal_distance_sum": e.focal_distance_sum(point),
        "tolerance": BOUNDARY_EPS,
        "contained": contained,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn polygon(kind: &str, vertices: Vec<Point2>, point: Point2) -> Result<()> {
    let n = vertices.len();
    let poly = Polygon::new(vertices)?;
    tracing::info!(kind, vertices = n, "polygon query");
    let out = serde_json::json!({
        "shape": kind,
        "vertices": n,
        "contained": poly.contains(point),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn rectangle(vertices: Vec<Point2>, point: Point2) -> Result<()> {
    // Construct through the wrapper so the vertex-count check applies, then
    // report via the shared path (delegation equivalence).
    let rect = Rectangle::new(vertices)?;
    polygon("rectangle", rect.as_polygon().vertices().to_vec(), point)
}

fn pentagon(vertices: Vec<Point2>, point: Point2) -> Result<()> {
    let penta = Pentagon::new(vertices)?;
    polygon("pentagon", penta.as_polygon().vertices().to_vec(), point)
}

fn demo() -> Result<()> {
    let e = Ellipse::new(
        0.0,
        (Point2::new(1.0, 0.0), Point2::new(-1.0, 0.0)),
        6.0,
    )?;
    let p = Point2::new(3.000000001, 0.0);
    println!("{}", e.contains(p));
    Ok(())
}

/// Parse `x,y` into a point.
fn parse_point(s: &str) -> Result<Point2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Point2::new(x, y))
}
