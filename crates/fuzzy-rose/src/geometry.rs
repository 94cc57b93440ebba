//! Core geometry types for fuzzy-rose.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = duplicate the value (Copy is implicit, stack-only)
//! - `PartialEq` = compare with `==`
//!
//! Coordinates follow the canvas convention: origin at the rose center,
//! x to the right, y DOWN. An angle of -π/2 therefore points straight up.

use std::f64::consts::PI;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A closed outline, such as a flattened wedge.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Boundary vertices; the closing edge back to the first is implied.
    pub outer: Vec<Point>,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at angle `theta` (radians) and distance `r` from the origin.
    #[inline]
    pub fn polar(theta: f64, r: f64) -> Self {
        Self::new(theta.cos() * r, theta.sin() * r)
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance from the origin.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.distance(Point::ORIGIN)
    }

    /// Angle from the origin, normalized to [-π/2, 3π/2) so it lines up
    /// with the sector layout that starts at twelve o'clock.
    #[inline]
    pub fn angle_from_top(&self) -> f64 {
        let mut theta = self.y.atan2(self.x);
        if theta < -PI / 2.0 {
            theta += 2.0 * PI;
        }
        theta
    }
}

impl Polygon {
    pub fn new(outer: Vec<Point>) -> Self {
        Self { outer }
    }

    /// Get the bounding box as (min_x, min_y, max_x, max_y).
    ///
    /// ## Rust Lesson #6: Option<T>
    ///
    /// An empty outline has no box, so we say so with `None` rather than
    /// inventing infinities.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        bounding_box_of_points(&self.outer)
    }

    /// Signed area via the shoelace formula.
    ///
    /// With y pointing down, a positive value means the outline turns
    /// clockwise on screen.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area_of_points(&self.outer)
    }

    /// Absolute enclosed area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

/// Bounding box of a point sequence as (min_x, min_y, max_x, max_y).
pub fn bounding_box_of_points(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    if points.is_empty() {
        return None;
    }

    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    Some((min_x, min_y, max_x, max_y))
}

/// Signed area of a point sequence using the shoelace formula.
pub fn signed_area_of_points(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}
