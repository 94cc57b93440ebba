//! Petal profile generation.
//!
//! A petal's radius is described along a normalized parameter x in [0, 1]
//! by four breakpoints (a, b, c, d). With t = c + d - a - b the profile is
//! made of three segments:
//!
//! ```text
//!   x <  p1 : r = a + sqrt(x (b - a) t)          rise from a to b
//!   x <  p2 : r = (x t + a + b) / 2              linear from b to c
//!   else    : r = d - sqrt((1 - x) (d - c) t)    ease into d
//!
//!   p1 = (b - a) / t,  p2 = (2c - a - b) / t
//! ```
//!
//! The samples are then mirrored so the petal is symmetric about its
//! middle and starts and ends at radius a.

use std::f64::consts::PI;

use crate::error::{DomainError, InputError, RoseError};

/// Samples per half-profile used by the rose.
pub const DEFAULT_RESOLUTION: usize = 50;

/// Four breakpoints shaping one petal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetalSpec {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Which piece of the profile formula applies at a given x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Rise,
    Linear,
    Fall,
}

impl PetalSpec {
    /// Validate breakpoints.
    ///
    /// Rejects non-finite values (an input error), then a zero or
    /// overflowing span, a > b and c > d. The formula itself would accept
    /// all of these and hand back NaN or infinities.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self, RoseError> {
        if ![a, b, c, d].iter().all(|v| v.is_finite()) {
            return Err(InputError::NotFinite { index: 0 }.into());
        }
        let t = c + d - a - b;
        if t == 0.0 {
            return Err(DomainError::ZeroSpan { a, b, c, d }.into());
        }
        if !t.is_finite() {
            return Err(DomainError::SpanOverflow { a, b, c, d }.into());
        }
        if a > b {
            return Err(DomainError::DescendingInner { a, b }.into());
        }
        if c > d {
            return Err(DomainError::DescendingOuter { c, d }.into());
        }
        Ok(Self { a, b, c, d })
    }

    /// Build from one input row, which must hold exactly four numbers.
    pub fn from_row(index: usize, row: &[f64]) -> Result<Self, RoseError> {
        let &[a, b, c, d] = row else {
            return Err(InputError::WrongArity { index, len: row.len() }.into());
        };
        Self::new(a, b, c, d).map_err(|e| e.at_petal(index))
    }

    /// t = c + d - a - b
    #[inline]
    pub fn span(&self) -> f64 {
        self.c + self.d - self.a - self.b
    }

    /// The segment boundaries (p1, p2) in x.
    #[inline]
    pub fn breakpoints(&self) -> (f64, f64) {
        let t = self.span();
        ((self.b - self.a) / t, (2.0 * self.c - self.a - self.b) / t)
    }

    /// The segment the profile uses at `x`.
    pub fn segment_at(&self, x: f64) -> Segment {
        let (p1, p2) = self.breakpoints();
        if x < p1 {
            Segment::Rise
        } else if x < p2 {
            Segment::Linear
        } else {
            Segment::Fall
        }
    }

    /// Evaluate one segment's formula at `x`, whether or not x falls in it.
    ///
    /// `sample` only labels the error. Breakpoints near the f64 limit can
    /// overflow here even after validation, so the radicand and the result
    /// are both checked.
    pub fn eval_segment(&self, segment: Segment, x: f64, sample: usize) -> Result<f64, DomainError> {
        let t = self.span();
        let r = match segment {
            Segment::Rise => self.a + checked_sqrt(x * (self.b - self.a) * t, sample)?,
            Segment::Linear => (x * t + self.a + self.b) / 2.0,
            Segment::Fall => self.d - checked_sqrt((1.0 - x) * (self.d - self.c) * t, sample)?,
        };
        if !r.is_finite() {
            return Err(DomainError::NonFiniteSample { sample, value: r });
        }
        Ok(r)
    }

    /// Radius at normalized position `x`.
    pub fn radius_at(&self, x: f64) -> Result<f64, DomainError> {
        self.eval_segment(self.segment_at(x), x, 0)
    }
}

fn checked_sqrt(radicand: f64, sample: usize) -> Result<f64, DomainError> {
    if !radicand.is_finite() {
        return Err(DomainError::NonFiniteSample { sample, value: radicand });
    }
    if radicand < 0.0 {
        return Err(DomainError::NegativeRadicand { sample, radicand });
    }
    Ok(radicand.sqrt())
}

/// Generate the mirrored radius profile for one petal.
///
/// Returns `2 * resolution - 1` samples: the half-profile for
/// x = j / (resolution - 1), then the same samples back down, skipping the
/// peak so it isn't repeated.
pub fn generate_profile(spec: &PetalSpec, resolution: usize) -> Result<Vec<f64>, RoseError> {
    if resolution < 2 {
        return Err(InputError::Resolution(resolution).into());
    }

    let mut samples = Vec::with_capacity(2 * resolution - 1);
    for j in 0..resolution {
        let x = j as f64 / (resolution - 1) as f64;
        let r = spec.eval_segment(spec.segment_at(x), x, j)?;
        samples.push(r);
    }

    for j in (0..resolution - 1).rev() {
        samples.push(samples[j]);
    }

    Ok(samples)
}

/// Validate the breakpoints and generate the profile in one step.
pub fn generate(a: f64, b: f64, c: f64, d: f64, resolution: usize) -> Result<Vec<f64>, RoseError> {
    let spec = PetalSpec::new(a, b, c, d)?;
    generate_profile(&spec, resolution)
}

/// The angular slice owned by petal `index` of `count`.
///
/// Sectors tile the full turn edge to edge, starting straight up at -π/2
/// and advancing clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub index: usize,
    pub count: usize,
    /// Start angle in radians.
    pub start: f64,
    /// Angular width, 2π / count.
    pub span: f64,
}

impl Sector {
    pub fn new(index: usize, count: usize) -> Self {
        let span = 2.0 * PI / count as f64;
        Self {
            index,
            count,
            start: -PI / 2.0 + index as f64 * span,
            span,
        }
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.start + self.span
    }

    /// Hue in degrees for this sector: index / count * 360.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.index as f64 * 360.0 / self.count as f64
    }

    /// The sector of `count` that owns angle `theta`.
    ///
    /// `theta` is clamped into [-π/2, 3π/2), so an angle that rounds onto
    /// the closing edge belongs to the last sector. Non-finite angles and an
    /// empty rose own nothing.
    pub fn locate(theta: f64, count: usize) -> Option<Self> {
        if count == 0 || !theta.is_finite() {
            return None;
        }
        let span = 2.0 * PI / count as f64;
        let offset = (theta + PI / 2.0).clamp(0.0, 2.0 * PI);
        let index = ((offset / span).floor() as usize).min(count - 1);
        Some(Self::new(index, count))
    }

    /// `len` angles evenly spread from `start` to `end` inclusive.
    pub fn angles(&self, len: usize) -> Vec<f64> {
        if len < 2 {
            return vec![self.start; len];
        }
        let last = (len - 1) as f64;
        (0..len)
            .map(|j| self.start + j as f64 / last * self.span)
            .collect()
    }
}

/// One petal of the rose: its breakpoints, profile and placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Petal {
    pub spec: PetalSpec,
    pub sector: Sector,
    /// Radius samples, palindromic.
    pub radii: Vec<f64>,
    /// One angle per radius sample.
    pub theta: Vec<f64>,
}

impl Petal {
    pub fn new(spec: PetalSpec, index: usize, count: usize, resolution: usize) -> Result<Self, RoseError> {
        let radii = generate_profile(&spec, resolution).map_err(|e| e.at_petal(index))?;
        let sector = Sector::new(index, count);
        let theta = sector.angles(radii.len());

        tracing::debug!(
            petal = index,
            samples = radii.len(),
            hue = sector.hue(),
            "built petal"
        );

        Ok(Self { spec, sector, radii, theta })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.sector.index
    }

    #[inline]
    pub fn hue(&self) -> f64 {
        self.sector.hue()
    }

    /// First and last angle of the profile.
    #[inline]
    pub fn angular_range(&self) -> (f64, f64) {
        (self.sector.start, self.sector.end())
    }
}
