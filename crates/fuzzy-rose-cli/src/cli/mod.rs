//! CLI command implementations.
//!
//! - `render` - Render a rose file to SVG, JSON or PNG
//! - `profile` - Print one petal's radius profile
//! - `pulse` - Print the opacity pulse
//! - `random` - Generate a random rose file
//! - `hit` - Report the petal under a point
//!
//! The terminal viewer lives in `main.rs`.

pub mod common;
pub mod config;
pub mod hit;
pub mod profile;
pub mod pulse;
pub mod random;
pub mod render;

pub use common::svg_to_image;
pub use config::RoseFile;
pub use hit::cmd_hit;
pub use profile::cmd_profile;
pub use pulse::cmd_pulse;
pub use random::cmd_random;
pub use render::cmd_render;
