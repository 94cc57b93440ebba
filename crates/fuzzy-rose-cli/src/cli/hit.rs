//! Hit command: feed a click through the rose's click hook.
//!
//! Coordinates are in rose units with the origin at the center and y
//! pointing down, unless `--canvas` is given, in which case they are SVG
//! canvas pixels as written by `render`.

use anyhow::Result;

use fuzzy_rose::{on_click, ClickEvent};

use super::config::RoseFile;

/// Execute the hit command.
pub fn cmd_hit(args: &[String]) -> Result<()> {
    let mut input_path: Option<&str> = None;
    let mut coords: Vec<f64> = Vec::new();
    let mut canvas = false;

    for arg in args {
        if let Ok(v) = arg.parse::<f64>() {
            coords.push(v);
            continue;
        }
        match arg.as_str() {
            "--canvas" => canvas = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            path if input_path.is_none() && (path == "-" || !path.starts_with('-')) => {
                input_path = Some(path);
            }
            other => anyhow::bail!("unexpected argument: {}", other),
        }
    }

    let (Some(input_path), &[x, y]) = (input_path, coords.as_slice()) else {
        print_usage();
        anyhow::bail!("expected a rose file and two coordinates");
    };

    let file = RoseFile::load(input_path)?;
    let rose = file.build()?;

    let event = if canvas {
        let options = file.svg_options();
        let scale = options.scale_for(&rose);
        let center = options.size / 2.0;
        ClickEvent { x: (x - center) / scale, y: (y - center) / scale }
    } else {
        ClickEvent { x, y }
    };

    match on_click(&rose, &event) {
        Some(petal) => println!("{}", petal),
        None => println!("none"),
    }
    Ok(())
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("fuzzy-rose hit - Report the petal under a point");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    fuzzy-rose hit <rose.yaml|rose.json|-> <x> <y> [--canvas]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    --canvas    Read x and y as canvas pixels instead of rose units");
}
