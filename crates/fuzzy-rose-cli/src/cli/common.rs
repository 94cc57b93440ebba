//! Common utilities shared across CLI commands.

use std::fs;

use anyhow::{Context, Result};
use image::{DynamicImage, RgbaImage};
use resvg::usvg;
use tiny_skia::Pixmap;

/// Output format for rendered roses.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum OutputFormat {
    Svg,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "svg" => Some(OutputFormat::Svg),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Write to a file, or to stdout when the path is absent or `-`.
pub fn write_output(output_path: Option<&str>, content: &str) -> Result<()> {
    match output_path {
        Some(path) if path != "-" => {
            fs::write(path, content).with_context(|| format!("failed to write {}", path))?;
            tracing::info!(path, bytes = content.len(), "wrote output");
        }
        _ => print!("{}", content),
    }
    Ok(())
}

/// Take the value following a flag, advancing the cursor.
pub fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .with_context(|| format!("{} needs a value", flag))
}

/// Parse the value following a flag.
pub fn parse_flag<T>(args: &[String], i: &mut usize, flag: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = flag_value(args, i, flag)?;
    raw.parse()
        .map_err(|e| anyhow::anyhow!("invalid value {:?} for {}: {}", raw, flag, e))
}

/// Rasterize SVG content with resvg.
///
/// `size` is the SVG canvas size, `scale` multiplies it into pixels and
/// `background` fills the pixmap first.
pub fn rasterize(svg_content: &str, size: f64, scale: f64, background: svgtypes::Color) -> Result<Pixmap> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options).context("failed to parse generated SVG")?;

    let pixels = (size * scale).round().max(1.0) as u32;
    let mut pixmap = Pixmap::new(pixels, pixels).context("could not create pixmap")?;

    pixmap.fill(tiny_skia::Color::from_rgba8(
        background.red,
        background.green,
        background.blue,
        background.alpha,
    ));

    let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap)
}

/// Rasterize and save as PNG.
pub fn write_png(svg_content: &str, png_path: &str, size: f64, scale: f64, background: svgtypes::Color) -> Result<()> {
    let pixmap = rasterize(svg_content, size, scale, background)?;
    pixmap
        .save_png(png_path)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {}", png_path, e))?;
    tracing::info!(path = png_path, width = pixmap.width(), height = pixmap.height(), "wrote PNG");
    Ok(())
}

/// Rasterize into an `image` buffer for terminal display.
pub fn svg_to_image(svg_content: &str, size: f64, scale: f64, background: svgtypes::Color) -> Result<DynamicImage> {
    let pixmap = rasterize(svg_content, size, scale, background)?;
    let (width, height) = (pixmap.width(), pixmap.height());
    let rgba = RgbaImage::from_raw(width, height, pixmap.take()).context("failed to create image")?;
    Ok(DynamicImage::ImageRgba8(rgba))
}
