//! SVG output - the rose as a standalone SVG document.
//!
//! Every shape becomes one `<path>` inside a single group that carries the
//! rose's opacity and centers it on the canvas. Paths are written in draw
//! order, which is also SVG paint order, so the wedge alphas composite the
//! same way they would on a canvas.
//!
//! ## Arcs
//!
//! Canvas arcs are (center, radius, start angle, end angle). SVG arcs are
//! endpoint based, so each arc becomes an `A` command to its end point.
//! SVG cannot draw an arc whose start and end coincide, so a full circle
//! (a single-petal rose) is written as two half arcs.

use std::f64::consts::PI;

use crate::geometry::Point;
use crate::render::{Rose, SceneGraph};
use crate::shape::{DrawCommand, Shape};

/// Canvas settings for SVG output.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Width and height of the square canvas.
    pub size: f64,
    /// Background fill; `None` leaves the canvas transparent.
    pub background: Option<String>,
    /// Outline width in canvas pixels, independent of scale.
    pub stroke_width: f64,
    /// Rose units to canvas pixels; `None` fits the rose to the canvas.
    pub scale: Option<f64>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            size: 400.0,
            background: Some("white".to_string()),
            stroke_width: 1.0,
            scale: None,
        }
    }
}

/// Share of the canvas size the outer radius fills when fitting.
const FIT_FRACTION: f64 = 0.45;

impl SvgOptions {
    /// Scale to use for `rose`.
    pub fn scale_for(&self, rose: &Rose) -> f64 {
        if let Some(scale) = self.scale {
            return scale;
        }
        let r = rose.max_radius();
        if r > 0.0 { self.size * FIT_FRACTION / r } else { 1.0 }
    }
}

/// A scene that collects shapes as SVG path elements.
#[derive(Debug, Clone)]
pub struct SvgScene {
    body: String,
    alpha: f64,
    stroke_width: f64,
}

impl SvgScene {
    /// `stroke_width` is in the group's (scaled) units.
    pub fn new(stroke_width: f64) -> Self {
        Self {
            body: String::new(),
            alpha: 1.0,
            stroke_width,
        }
    }

    /// Wrap the collected paths into a document.
    pub fn finish(self, options: &SvgOptions, scale: f64) -> String {
        let size = options.size;
        let center = size / 2.0;

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">
"#
        ));
        if let Some(background) = &options.background {
            svg.push_str(&format!(
                "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
                background
            ));
        }
        svg.push_str(&format!(
            "<g id=\"rose\" opacity=\"{}\" transform=\"translate({},{}) scale({})\">\n",
            self.alpha, center, center, scale
        ));
        svg.push_str(&self.body);
        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

impl SceneGraph for SvgScene {
    fn add_child(&mut self, shape: &Shape) {
        self.body.push_str(&format!(
            "  <path class=\"{}\" data-petal=\"{}\" d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" opacity=\"{}\"/>\n",
            shape.kind.name(),
            shape.petal,
            path_data(&shape.commands),
            shape.fill.to_css(),
            shape.stroke.to_hex(),
            self.stroke_width,
            shape.alpha,
        ));
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }
}

/// Render a rose to an SVG document.
pub fn rose_to_svg(rose: &Rose, options: &SvgOptions) -> String {
    let scale = options.scale_for(rose);
    let mut scene = SvgScene::new(options.stroke_width / scale);
    rose.attach(&mut scene);
    scene.finish(options, scale)
}

/// Convert draw commands into SVG path data.
pub fn path_data(commands: &[DrawCommand]) -> String {
    let mut d = String::new();
    let mut current: Option<Point> = None;
    let mut subpath_start: Option<Point> = None;

    for cmd in commands {
        match *cmd {
            DrawCommand::MoveTo(p) => {
                push_cmd(&mut d, 'M', p);
                current = Some(p);
                subpath_start = Some(p);
            }
            DrawCommand::LineTo(p) => {
                push_cmd(&mut d, 'L', p);
                current = Some(p);
            }
            DrawCommand::Arc { center, radius, start, end } => {
                let from = on_circle(center, radius, start);
                let to = on_circle(center, radius, end);

                // A canvas arc draws a line from the current point to its start.
                match current {
                    Some(c) if c.distance(from) < 1e-9 => {}
                    Some(_) => push_cmd(&mut d, 'L', from),
                    None => push_cmd(&mut d, 'M', from),
                }

                let sweep = end - start;
                if radius <= 0.0 {
                    push_cmd(&mut d, 'L', to);
                } else if sweep.abs() >= 2.0 * PI - 1e-9 {
                    let mid = on_circle(center, radius, start + sweep / 2.0);
                    push_arc(&mut d, radius, false, sweep > 0.0, mid);
                    push_arc(&mut d, radius, false, sweep > 0.0, to);
                } else {
                    push_arc(&mut d, radius, sweep.abs() > PI, sweep > 0.0, to);
                }
                current = Some(to);
            }
            DrawCommand::ClosePath => {
                d.push('Z');
                current = subpath_start;
            }
        }
    }

    d
}

#[inline]
fn on_circle(center: Point, radius: f64, theta: f64) -> Point {
    Point::new(center.x + theta.cos() * radius, center.y + theta.sin() * radius)
}

fn push_cmd(d: &mut String, letter: char, p: Point) {
    d.push_str(&format!("{}{:.3},{:.3}", letter, p.x, p.y));
}

fn push_arc(d: &mut String, radius: f64, large: bool, sweep: bool, to: Point) {
    d.push_str(&format!(
        "A{:.3},{:.3} 0 {} {} {:.3},{:.3}",
        radius,
        radius,
        large as u8,
        sweep as u8,
        to.x,
        to.y
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::Event;
    use quick_xml::reader::Reader;

    /// (class, data-petal) for each path, in document order.
    fn read_paths(svg: &str) -> Vec<(String, usize)> {
        let mut reader = Reader::from_str(svg);
        let mut paths = Vec::new();
        loop {
            match reader.read_event() {
                Ok(Event::Empty(e)) if e.name().as_ref() == b"path" => {
                    let class = e
                        .try_get_attribute("class")
                        .unwrap()
                        .unwrap()
                        .unescape_value()
                        .unwrap()
                        .into_owned();
                    let petal = e
                        .try_get_attribute("data-petal")
                        .unwrap()
                        .unwrap()
                        .unescape_value()
                        .unwrap()
                        .parse()
                        .unwrap();
                    paths.push((class, petal));
                }
                Ok(Event::Eof) => break,
                Err(e) => panic!("invalid SVG at {}: {}", reader.buffer_position(), e),
                _ => {}
            }
        }
        paths
    }

    fn sample_rose() -> Rose {
        Rose::new(
            &[
                [10.0, 30.0, 35.0, 90.0],
                [20.0, 25.0, 60.0, 70.0],
                [5.0, 40.0, 45.0, 80.0],
            ],
            10,
        )
        .unwrap()
    }

    #[test]
    fn paths_in_draw_order() {
        let svg = rose_to_svg(&sample_rose(), &SvgOptions::default());
        let paths = read_paths(&svg);

        let expected: Vec<(String, usize)> = (0..3)
            .flat_map(|i| ["max", "profile", "min"].map(|k| (k.to_string(), i)))
            .collect();
        assert_eq!(paths, expected);
    }

    #[test]
    fn styling_attributes() {
        let svg = rose_to_svg(&sample_rose(), &SvgOptions::default());
        assert!(svg.contains("fill=\"hsl(0,100%,50%)\""));
        assert!(svg.contains("fill=\"hsl(120,100%,50%)\""));
        assert!(svg.contains("fill=\"hsl(240,100%,50%)\""));
        assert!(svg.contains("stroke=\"#000000\""));
        assert!(svg.contains("opacity=\"0.25\""));
        assert!(svg.contains("opacity=\"0.5\""));
        assert!(svg.contains("opacity=\"1\""));
    }

    #[test]
    fn group_carries_rose_alpha() {
        let mut rose = sample_rose();
        rose.alpha = 0.2;
        let svg = rose_to_svg(&rose, &SvgOptions::default());
        assert!(svg.contains("<g id=\"rose\" opacity=\"0.2\""));
    }

    #[test]
    fn fit_scale_uses_outer_radius() {
        let options = SvgOptions { size: 900.0, ..SvgOptions::default() };
        // 900 * 0.45 / 90
        assert!((options.scale_for(&sample_rose()) - 4.5).abs() < 1e-12);

        let fixed = SvgOptions { scale: Some(2.0), ..SvgOptions::default() };
        assert_eq!(fixed.scale_for(&sample_rose()), 2.0);
    }

    #[test]
    fn quarter_arc_path() {
        let d = path_data(&[
            DrawCommand::MoveTo(Point::ORIGIN),
            DrawCommand::LineTo(Point::new(0.0, -10.0)),
            DrawCommand::Arc { center: Point::ORIGIN, radius: 10.0, start: -PI / 2.0, end: 0.0 },
            DrawCommand::LineTo(Point::ORIGIN),
            DrawCommand::ClosePath,
        ]);
        assert_eq!(d, "M0.000,0.000L0.000,-10.000A10.000,10.000 0 0 1 10.000,0.000L0.000,0.000Z");
    }

    #[test]
    fn wide_arc_sets_large_flag() {
        let d = path_data(&[
            DrawCommand::MoveTo(Point::new(10.0, 0.0)),
            DrawCommand::Arc { center: Point::ORIGIN, radius: 10.0, start: 0.0, end: 1.5 * PI },
        ]);
        assert!(d.contains(" 0 1 1 "), "{}", d);
    }

    #[test]
    fn full_circle_is_split() {
        let rose = Rose::new(&[[10.0, 20.0, 30.0, 40.0]], 5).unwrap();
        let d = path_data(&rose.shapes[0].commands);
        assert_eq!(d.matches('A').count(), 2, "{}", d);
    }

    #[test]
    fn arc_without_current_point_moves_first() {
        let d = path_data(&[DrawCommand::Arc {
            center: Point::ORIGIN,
            radius: 5.0,
            start: 0.0,
            end: PI / 2.0,
        }]);
        assert!(d.starts_with("M5.000,0.000A"), "{}", d);
    }

    #[test]
    fn output_parses_as_svg() {
        let svg = rose_to_svg(&sample_rose(), &SvgOptions::default());
        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default());
        assert!(tree.is_ok(), "usvg rejected output: {:?}", tree.err());
    }

    #[test]
    fn empty_rose_is_valid_document() {
        let rows: [[f64; 4]; 0] = [];
        let rose = Rose::new(&rows[..], 50).unwrap();
        let svg = rose_to_svg(&rose, &SvgOptions::default());
        assert!(read_paths(&svg).is_empty());
        assert!(svg.contains("</svg>"));
    }
}
