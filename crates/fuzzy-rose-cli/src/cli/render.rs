//! Render command: rose file in, SVG / JSON / PNG out.

use anyhow::{Context, Result};
use serde::Serialize;

use fuzzy_rose::{pulse_alpha, rose_to_svg, Rose, ARC_TOLERANCE};

use super::common::{flag_value, parse_flag, write_output, write_png, OutputFormat};
use super::config::RoseFile;

/// A point in JSON output format.
#[derive(Serialize)]
struct JsonPoint {
    x: f64,
    y: f64,
}

/// One shape in JSON output.
#[derive(Serialize)]
struct JsonShape {
    petal: usize,
    kind: &'static str,
    hue: f64,
    fill: String,
    stroke: String,
    alpha: f64,
    outline: Vec<JsonPoint>,
}

/// JSON output for a whole rose.
#[derive(Serialize)]
struct JsonRose {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    petals: usize,
    resolution: usize,
    alpha: f64,
    shapes: Vec<JsonShape>,
}

fn rose_to_json(rose: &Rose, file: &RoseFile, tolerance: f64) -> Result<String> {
    let shapes = rose
        .shapes
        .iter()
        .map(|shape| JsonShape {
            petal: shape.petal,
            kind: shape.kind.name(),
            hue: shape.fill.hue,
            fill: shape.fill.to_rgb().to_hex(),
            stroke: shape.stroke.to_hex(),
            alpha: shape.alpha,
            outline: shape
                .outline(tolerance)
                .outer
                .into_iter()
                .map(|p| JsonPoint { x: p.x, y: p.y })
                .collect(),
        })
        .collect();

    let output = JsonRose {
        name: file.name.clone(),
        petals: rose.petals.len(),
        resolution: file.resolution,
        alpha: rose.alpha,
        shapes,
    };

    Ok(serde_json::to_string_pretty(&output)? + "\n")
}

/// Execute the render command.
pub fn cmd_render(args: &[String]) -> Result<()> {
    let mut input_path: Option<&str> = None;
    let mut output_path: Option<&str> = None;
    let mut format = OutputFormat::Svg;
    let mut png_output: Option<&str> = None;
    let mut png_scale = 1.0_f64;
    let mut tick: Option<u64> = None;
    let mut tolerance = ARC_TOLERANCE;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                output_path = Some(flag_value(args, &mut i, "--output")?);
            }
            "-f" | "--format" => {
                let name = flag_value(args, &mut i, "--format")?;
                format = OutputFormat::from_name(name)
                    .with_context(|| format!("unknown format: {}. Use 'svg' or 'json'.", name))?;
            }
            "--json" => {
                format = OutputFormat::Json;
            }
            "--png" => {
                png_output = Some(flag_value(args, &mut i, "--png")?);
            }
            "--png-scale" => {
                png_scale = parse_flag(args, &mut i, "--png-scale")?;
            }
            "--tick" => {
                tick = Some(parse_flag(args, &mut i, "--tick")?);
            }
            "--tolerance" => {
                tolerance = parse_flag(args, &mut i, "--tolerance")?;
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            arg if input_path.is_none() && (arg == "-" || !arg.starts_with('-')) => {
                input_path = Some(arg);
            }
            other => anyhow::bail!("unexpected argument: {}", other),
        }
        i += 1;
    }

    let Some(input_path) = input_path else {
        print_usage();
        anyhow::bail!("no rose file specified");
    };
    if !(png_scale > 0.0) {
        anyhow::bail!("--png-scale must be positive, got {}", png_scale);
    }
    if !(tolerance > 0.0) {
        anyhow::bail!("--tolerance must be positive, got {}", tolerance);
    }

    let file = RoseFile::load(input_path)?;
    let mut rose = file.build()?;

    // Freeze the pulse at a given tick.
    if let Some(n) = tick {
        rose.alpha = pulse_alpha(n);
    }

    let options = file.svg_options();
    let svg = rose_to_svg(&rose, &options);

    let output = match format {
        OutputFormat::Svg => svg.clone(),
        OutputFormat::Json => rose_to_json(&rose, &file, tolerance)?,
    };
    write_output(output_path, &output)?;

    if let Some(png_path) = png_output {
        write_png(&svg, png_path, options.size, png_scale, file.canvas.background_color()?)?;
    }

    Ok(())
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("fuzzy-rose render - Render a rose file");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    fuzzy-rose render <rose.yaml|rose.json|-> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>    Output file (- for stdout, default: stdout)");
    eprintln!("    -f, --format <fmt>     Output format: svg, json (default: svg)");
    eprintln!("    --json                 Same as --format json");
    eprintln!("    --png <file>           Also write a PNG");
    eprintln!("    --png-scale <n>        PNG scale factor (default: 1.0)");
    eprintln!("    --tick <n>             Render with the pulse opacity of tick n");
    eprintln!("    --tolerance <t>        Arc flattening tolerance for JSON (default: 0.1)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_lists_every_shape() {
        let file = RoseFile::from_yaml("name: pair\nresolution: 3\nparams:\n  - [1, 2, 3, 4]\n  - [2, 3, 4, 5]\n")
            .unwrap();
        let rose = file.build().unwrap();
        let json = rose_to_json(&rose, &file, ARC_TOLERANCE).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "pair");
        assert_eq!(value["petals"], 2);
        let shapes = value["shapes"].as_array().unwrap();
        assert_eq!(shapes.len(), 6);
        assert_eq!(shapes[0]["kind"], "max");
        assert_eq!(shapes[1]["kind"], "profile");
        assert_eq!(shapes[2]["kind"], "min");
        assert_eq!(shapes[0]["fill"], "#ff0000");
        assert_eq!(shapes[3]["fill"], "#00ffff");
        assert_eq!(shapes[3]["petal"], 1);
        // profile: origin plus five samples
        assert_eq!(shapes[1]["outline"].as_array().unwrap().len(), 6);
    }
}
