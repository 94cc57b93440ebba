//! Shape descriptors: the draw commands a host surface replays.
//!
//! A `Shape` is the portable form of one filled, stroked path. It records
//! the same primitives a canvas API takes (move, line, arc, close) plus the
//! fill color, stroke color and alpha. Hosts turn these into SVG paths,
//! raster fills or anything else; see `svg.rs` for the SVG adapter.
//!
//! ## Curve Flattening
//!
//! Arcs are kept symbolic in the commands. When a polygon is needed (for
//! area, bounds, hit tests or JSON output) we flatten them with lyon_geom
//! at a configurable tolerance, the same way SVG curves get flattened
//! elsewhere.

use lyon_geom::{point, vector, Angle, Arc};

use crate::color::{Hsl, Rgb, STROKE};
use crate::geometry::{Point, Polygon};

/// Tolerance for arc flattening.
/// Lower = more points, smoother arcs.
pub const ARC_TOLERANCE: f64 = 0.1;

/// One drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc around `center`, sweeping from `start` to `end` radians
    /// with increasing angle.
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
    },
    ClosePath,
}

/// Which of the three petal layers a shape is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WedgeKind {
    /// Sector out to the outer breakpoint d.
    Max,
    /// The petal profile itself.
    Profile,
    /// Sector out to the inner breakpoint a.
    Min,
}

impl WedgeKind {
    /// Draw order within a petal.
    pub const ORDER: [WedgeKind; 3] = [WedgeKind::Max, WedgeKind::Profile, WedgeKind::Min];

    /// Fixed opacity for this layer.
    pub fn alpha(self) -> f64 {
        match self {
            WedgeKind::Max => 0.25,
            WedgeKind::Profile => 0.5,
            WedgeKind::Min => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WedgeKind::Max => "max",
            WedgeKind::Profile => "profile",
            WedgeKind::Min => "min",
        }
    }
}

/// A filled, stroked path belonging to one petal.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub petal: usize,
    pub kind: WedgeKind,
    pub fill: Hsl,
    pub stroke: Rgb,
    pub alpha: f64,
    pub commands: Vec<DrawCommand>,
}

impl Shape {
    /// Start an empty path with the layer's alpha and the black stroke.
    pub fn new(petal: usize, kind: WedgeKind, fill: Hsl) -> Self {
        Self {
            petal,
            kind,
            fill,
            stroke: STROKE,
            alpha: kind.alpha(),
            commands: Vec::new(),
        }
    }

    // ## Rust Lesson #12: Builder methods
    //
    // Taking `mut self` and returning `Self` lets calls chain like
    // `Shape::new(..).move_to(..).line_to(..)` without any borrowing games.

    pub fn move_to(mut self, p: Point) -> Self {
        self.commands.push(DrawCommand::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.commands.push(DrawCommand::LineTo(p));
        self
    }

    pub fn arc(mut self, center: Point, radius: f64, start: f64, end: f64) -> Self {
        self.commands.push(DrawCommand::Arc { center, radius, start, end });
        self
    }

    pub fn close_path(mut self) -> Self {
        self.commands.push(DrawCommand::ClosePath);
        self
    }

    /// Flatten the path into a polygon, approximating arcs within `tolerance`.
    pub fn outline(&self, tolerance: f64) -> Polygon {
        let mut points: Vec<Point> = Vec::new();

        for cmd in &self.commands {
            match *cmd {
                DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => points.push(p),
                DrawCommand::Arc { center, radius, start, end } => {
                    flatten_arc(center, radius, start, end, tolerance, &mut points);
                }
                DrawCommand::ClosePath => break,
            }
        }

        // Flattening repeats the arc's start point; drop exact neighbours.
        points.dedup_by(|a, b| (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        Polygon::new(points)
    }
}

/// Append the points of a flattened arc, excluding its start point.
fn flatten_arc(center: Point, radius: f64, start: f64, end: f64, tolerance: f64, out: &mut Vec<Point>) {
    let end_point = Point::new(
        center.x + end.cos() * radius,
        center.y + end.sin() * radius,
    );

    // Flattening a near-zero radius divides by it; the arc is a point anyway.
    if radius <= tolerance {
        out.push(end_point);
        return;
    }

    let arc = Arc {
        center: point(center.x, center.y),
        radii: vector(radius, radius),
        start_angle: Angle::radians(start),
        sweep_angle: Angle::radians(end - start),
        x_rotation: Angle::radians(0.0),
    };

    arc.for_each_flattened(tolerance, &mut |segment| {
        out.push(Point::new(segment.to.x, segment.to.y));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn quarter_wedge(radius: f64) -> Shape {
        let start = -PI / 2.0;
        let end = 0.0;
        Shape::new(0, WedgeKind::Max, Hsl::pure(0.0))
            .move_to(Point::ORIGIN)
            .line_to(Point::polar(start, radius))
            .arc(Point::ORIGIN, radius, start, end)
            .line_to(Point::ORIGIN)
            .close_path()
    }

    #[test]
    fn layer_alphas() {
        assert_eq!(WedgeKind::Max.alpha(), 0.25);
        assert_eq!(WedgeKind::Profile.alpha(), 0.5);
        assert_eq!(WedgeKind::Min.alpha(), 1.0);
    }

    #[test]
    fn new_shape_uses_layer_alpha_and_black_stroke() {
        let shape = Shape::new(3, WedgeKind::Profile, Hsl::pure(90.0));
        assert_eq!(shape.alpha, 0.5);
        assert_eq!(shape.stroke, STROKE);
        assert!(shape.commands.is_empty());
    }

    #[test]
    fn quarter_wedge_area() {
        let outline = quarter_wedge(100.0).outline(0.01);
        let expected = PI * 100.0 * 100.0 / 4.0;
        let area = outline.area();
        assert!(
            (area - expected).abs() / expected < 1e-3,
            "area {} vs {}", area, expected
        );
    }

    #[test]
    fn outline_stays_in_sector() {
        let outline = quarter_wedge(50.0).outline(ARC_TOLERANCE);
        for p in &outline.outer {
            assert!(p.radius() <= 50.0 + 1e-6);
            assert!(p.x >= -1e-6 && p.y <= 1e-6, "{:?} outside quadrant", p);
        }
        assert_eq!(outline.outer[0], Point::ORIGIN);
    }

    #[test]
    fn zero_radius_wedge_collapses() {
        let outline = quarter_wedge(0.0).outline(ARC_TOLERANCE);
        assert_eq!(outline.area(), 0.0);
    }
}
