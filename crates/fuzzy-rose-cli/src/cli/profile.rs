//! Profile command: print the radius samples for one set of breakpoints.

use anyhow::{Context, Result};

use fuzzy_rose::{generate, DEFAULT_RESOLUTION};

use super::common::parse_flag;

/// Execute the profile command.
pub fn cmd_profile(args: &[String]) -> Result<()> {
    let mut values: Vec<f64> = Vec::new();
    let mut resolution = DEFAULT_RESOLUTION;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        // Negative breakpoints look like flags; try them as numbers first.
        if let Ok(v) = arg.parse::<f64>() {
            values.push(v);
            i += 1;
            continue;
        }
        match arg {
            "-r" | "--resolution" => {
                resolution = parse_flag(args, &mut i, "--resolution")?;
            }
            "--json" => {
                json = true;
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => anyhow::bail!("unexpected argument: {}", other),
        }
        i += 1;
    }

    let &[a, b, c, d] = values.as_slice() else {
        print_usage();
        anyhow::bail!("expected four breakpoints a b c d, got {}", values.len());
    };

    let samples = generate(a, b, c, d, resolution)
        .with_context(|| format!("cannot build profile for ({}, {}, {}, {})", a, b, c, d))?;
    tracing::debug!(samples = samples.len(), resolution, "profile generated");

    if json {
        println!("{}", serde_json::to_string(&samples)?);
    } else {
        for r in &samples {
            println!("{}", r);
        }
    }
    Ok(())
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("fuzzy-rose profile - Print a petal's radius profile");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    fuzzy-rose profile <a> <b> <c> <d> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -r, --resolution <n>   Samples per half profile (default: 50)");
    eprintln!("    --json                 Print a JSON array instead of one value per line");
}
