//! Colors used by the rose shapes.

use std::fmt;

use palette::{FromColor, Hsl as PaletteHsl, Srgb};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color in hue / saturation / lightness form.
///
/// Hue is in degrees, saturation and lightness are percentages (0-100),
/// matching CSS `hsl()` notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// Outline color for every wedge.
pub const STROKE: Rgb = Rgb { r: 0, g: 0, b: 0 };

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Hsl {
    /// Fully saturated, mid-lightness color at `hue` degrees.
    pub fn pure(hue: f64) -> Self {
        Self { hue, saturation: 100.0, lightness: 50.0 }
    }

    /// CSS notation, e.g. `hsl(120,100%,50%)`.
    pub fn to_css(&self) -> String {
        format!("hsl({},{}%,{}%)", self.hue, self.saturation, self.lightness)
    }

    /// Convert to 8-bit sRGB.
    pub fn to_rgb(&self) -> Rgb {
        let hsl = PaletteHsl::new_srgb(
            self.hue,
            (self.saturation / 100.0).clamp(0.0, 1.0),
            (self.lightness / 100.0).clamp(0.0, 1.0),
        );
        let rgb: Srgb<f64> = Srgb::from_color(hsl);
        let rgb: Srgb<u8> = rgb.into_format();
        Rgb::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries() {
        assert_eq!(Hsl::pure(0.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsl::pure(120.0).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsl::pure(240.0).to_rgb(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn secondaries() {
        assert_eq!(Hsl::pure(60.0).to_rgb(), Rgb::new(255, 255, 0));
        assert_eq!(Hsl::pure(180.0).to_rgb(), Rgb::new(0, 255, 255));
        assert_eq!(Hsl::pure(300.0).to_rgb(), Rgb::new(255, 0, 255));
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(Hsl::pure(360.0).to_rgb(), Hsl::pure(0.0).to_rgb());
        assert_eq!(Hsl::pure(-120.0).to_rgb(), Hsl::pure(240.0).to_rgb());
    }

    #[test]
    fn partial_saturation_and_lightness() {
        let teal = Hsl { hue: 180.0, saturation: 50.0, lightness: 25.0 };
        assert_eq!(teal.to_rgb(), Rgb::new(32, 96, 96));
        let grey = Hsl { hue: 45.0, saturation: 0.0, lightness: 50.0 };
        assert_eq!(grey.to_rgb(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn css_and_hex() {
        assert_eq!(Hsl::pure(90.0).to_css(), "hsl(90,100%,50%)");
        assert_eq!(Hsl::pure(0.0).to_rgb().to_hex(), "#ff0000");
        assert_eq!(STROKE.to_hex(), "#000000");
    }
}
