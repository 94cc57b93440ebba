//! # fuzzy-rose
//!
//! A decorative radial rose built from per-petal radius profiles.
//!
//! Each petal is described by four breakpoints (a, b, c, d). The petal
//! module turns them into a symmetric radius profile, the render module
//! lays the profiles around the circle and emits three overlapping wedges
//! per petal, and the svg module writes the result out.
//!
//! ```
//! use fuzzy_rose::{Rose, SvgOptions, rose_to_svg};
//!
//! let rose = Rose::new(&[[10.0, 30.0, 35.0, 90.0], [20.0, 25.0, 60.0, 70.0]], 50)?;
//! assert_eq!(rose.shapes.len(), 6);
//! let svg = rose_to_svg(&rose, &SvgOptions::default());
//! assert!(svg.contains("<path"));
//! # Ok::<(), fuzzy_rose::RoseError>(())
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod animation;
pub mod color;
pub mod error;
pub mod geometry;
pub mod petal;
pub mod render;
pub mod shape;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use animation::{on_click, on_tick, pulse_alpha, tick_rose, AnimationState, ClickEvent};
pub use color::{Hsl, Rgb};
pub use error::{DomainError, InputError, RoseError};
pub use geometry::{Point, Polygon};
pub use petal::{generate, generate_profile, Petal, PetalSpec, Sector, DEFAULT_RESOLUTION};
pub use render::{PolarRenderer, Rose, SceneGraph};
pub use shape::{DrawCommand, Shape, WedgeKind, ARC_TOLERANCE};
pub use svg::{rose_to_svg, SvgOptions, SvgScene};
