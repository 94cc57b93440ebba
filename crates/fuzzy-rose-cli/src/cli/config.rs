//! Rose files: the YAML/JSON description of a rose and its canvas.
//!
//! ```yaml
//! name: sample rose
//! resolution: 50
//! params:
//!   - [10, 30, 35, 90]
//!   - [20, 25, 60, 70]
//! canvas:
//!   size: 400
//!   background: white
//!   stroke_width: 1.0
//! ```
//!
//! Rows are read as plain number lists so a row with the wrong length
//! reaches the library and gets reported with its index, instead of
//! surfacing as a generic deserialization error.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use fuzzy_rose::{Rose, SvgOptions, DEFAULT_RESOLUTION};

/// A complete rose description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoseFile {
    /// Optional title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Samples per half-profile
    #[serde(default = "default_resolution")]
    pub resolution: usize,

    /// One (a, b, c, d) row per petal
    pub params: Vec<Vec<f64>>,

    /// Canvas configuration
    #[serde(default)]
    pub canvas: Canvas,
}

/// Canvas/output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    /// Width and height in pixels
    #[serde(default = "default_size")]
    pub size: f64,

    /// Background color, any SVG color value
    #[serde(default = "default_background")]
    pub background: String,

    /// Outline width in pixels
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

fn default_size() -> f64 {
    400.0
}

fn default_background() -> String {
    "white".to_string()
}

fn default_stroke_width() -> f64 {
    1.0
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            size: default_size(),
            background: default_background(),
            stroke_width: default_stroke_width(),
        }
    }
}

impl Canvas {
    /// Parse the background into RGBA.
    pub fn background_color(&self) -> Result<svgtypes::Color> {
        svgtypes::Color::from_str(&self.background)
            .map_err(|e| anyhow::anyhow!("invalid background color {:?}: {}", self.background, e))
    }
}

impl RoseFile {
    /// Load from a file path, or from stdin when the path is `-`.
    ///
    /// `.json` files go through serde_json; anything else is read as YAML.
    pub fn load(path: &str) -> Result<Self> {
        let content = if path == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read rose from stdin")?;
            buf
        } else {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?
        };

        let is_json = Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file = if is_json {
            Self::from_json(&content).with_context(|| format!("failed to parse {}", path))?
        } else {
            Self::from_yaml(&content).with_context(|| format!("failed to parse {}", path))?
        };

        file.validate()?;
        Ok(file)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Canvas checks that don't need the rose built.
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas.size > 0.0) {
            anyhow::bail!("canvas size must be positive, got {}", self.canvas.size);
        }
        if !(self.canvas.stroke_width >= 0.0) {
            anyhow::bail!("stroke width must not be negative, got {}", self.canvas.stroke_width);
        }
        self.canvas.background_color()?;
        Ok(())
    }

    /// Build the rose, validating every row.
    pub fn build(&self) -> Result<Rose> {
        let rose = Rose::new(self.params.as_slice(), self.resolution).context("invalid rose parameters")?;
        tracing::info!(
            name = self.name.as_deref().unwrap_or("rose"),
            petals = rose.petals.len(),
            resolution = self.resolution,
            "rose built"
        );
        Ok(rose)
    }

    pub fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            size: self.canvas.size,
            background: Some(self.canvas.background.clone()),
            stroke_width: self.canvas.stroke_width,
            scale: None,
        }
    }
}
