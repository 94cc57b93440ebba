//! Polar rendering: petals in, shapes out.
//!
//! Each petal becomes three overlapping shapes drawn in a fixed order:
//!
//! 1. `Max` - a wedge out to radius d, alpha 0.25
//! 2. `Profile` - the petal outline itself, alpha 0.5
//! 3. `Min` - a wedge out to radius a, opaque
//!
//! The alphas only composite correctly in that order, petal by petal, so
//! the order of the returned `Vec` is part of the contract.

use crate::color::Hsl;
use crate::error::RoseError;
use crate::geometry::{bounding_box_of_points, Point};
use crate::petal::{Petal, PetalSpec, Sector};
use crate::shape::{Shape, WedgeKind, ARC_TOLERANCE};

/// A host display tree the rose can be attached to.
///
/// This is a capability, not a base class: anything that can take child
/// shapes and a group opacity can host a rose.
pub trait SceneGraph {
    fn add_child(&mut self, shape: &Shape);
    fn set_alpha(&mut self, alpha: f64);
}

/// Builds the three wedge shapes for a petal.
pub struct PolarRenderer;

impl PolarRenderer {
    /// The three shapes of one petal, in draw order.
    pub fn render_petal(petal: &Petal) -> [Shape; 3] {
        let (start, end) = petal.angular_range();
        let fill = Hsl::pure(petal.hue());
        let index = petal.index();

        [
            sector_wedge(index, WedgeKind::Max, fill, petal.spec.d, start, end),
            profile_wedge(index, fill, petal),
            sector_wedge(index, WedgeKind::Min, fill, petal.spec.a, start, end),
        ]
    }

    /// All shapes for all petals, petal 0 first.
    pub fn render(petals: &[Petal]) -> Vec<Shape> {
        petals
            .iter()
            .flat_map(Self::render_petal)
            .collect()
    }
}

fn sector_wedge(petal: usize, kind: WedgeKind, fill: Hsl, radius: f64, start: f64, end: f64) -> Shape {
    Shape::new(petal, kind, fill)
        .move_to(Point::ORIGIN)
        .line_to(Point::polar(start, radius))
        .arc(Point::ORIGIN, radius, start, end)
        .line_to(Point::ORIGIN)
        .close_path()
}

fn profile_wedge(petal: usize, fill: Hsl, p: &Petal) -> Shape {
    let shape = Shape::new(petal, WedgeKind::Profile, fill).move_to(Point::ORIGIN);
    p.theta
        .iter()
        .zip(&p.radii)
        .fold(shape, |shape, (&theta, &r)| shape.line_to(Point::polar(theta, r)))
        .close_path()
}

/// The complete rose: its petals, their shapes and the group opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Rose {
    pub petals: Vec<Petal>,
    pub shapes: Vec<Shape>,
    /// Opacity of the whole group, driven by the animation tick.
    pub alpha: f64,
    /// Clicks report the rose as their target, never a child shape.
    pub mouse_children: bool,
}

impl Rose {
    /// Build a rose from parameter rows.
    ///
    /// Every row is validated before any geometry is produced; the first bad
    /// row fails the whole batch. No rows gives an empty rose.
    pub fn new<R: AsRef<[f64]>>(params: &[R], resolution: usize) -> Result<Self, RoseError> {
        let specs = params
            .iter()
            .enumerate()
            .map(|(i, row)| PetalSpec::from_row(i, row.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_specs(&specs, resolution)
    }

    /// Build a rose from already validated breakpoints.
    pub fn from_specs(specs: &[PetalSpec], resolution: usize) -> Result<Self, RoseError> {
        let count = specs.len();
        let petals = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| Petal::new(*spec, i, count, resolution))
            .collect::<Result<Vec<_>, _>>()?;

        let shapes = PolarRenderer::render(&petals);

        tracing::debug!(petals = count, shapes = shapes.len(), resolution, "built rose");

        Ok(Self {
            petals,
            shapes,
            alpha: 1.0,
            mouse_children: false,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.petals.is_empty()
    }

    /// Largest outer breakpoint, i.e. the rose's radius.
    pub fn max_radius(&self) -> f64 {
        self.petals.iter().map(|p| p.spec.d).fold(0.0, f64::max)
    }

    /// Bounds of all flattened shapes as (min_x, min_y, max_x, max_y).
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        let points: Vec<Point> = self
            .shapes
            .iter()
            .flat_map(|s| s.outline(ARC_TOLERANCE).outer)
            .collect();
        bounding_box_of_points(&points)
    }

    /// The petal whose sector contains `p`, if `p` lies within its max wedge.
    pub fn petal_at(&self, p: Point) -> Option<usize> {
        let r = p.radius();
        let sector = Sector::locate(p.angle_from_top(), self.petals.len())?;
        (r <= self.petals[sector.index].spec.d).then_some(sector.index)
    }

    /// Hand every shape to a host scene, in draw order, then set the group
    /// opacity.
    pub fn attach<S: SceneGraph + ?Sized>(&self, scene: &mut S) {
        for shape in &self.shapes {
            scene.add_child(shape);
        }
        scene.set_alpha(self.alpha);
    }
}
