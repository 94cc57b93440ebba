//! Pulse command: print the group opacity the tick hook produces.

use anyhow::Result;
use serde::Serialize;

use fuzzy_rose::{on_tick, AnimationState};

use super::common::parse_flag;

#[derive(Serialize)]
struct JsonTick {
    tick: u64,
    alpha: f64,
}

/// Run `ticks` ticks from a fresh state.
fn pulse_table(ticks: u64) -> Vec<JsonTick> {
    let mut state = AnimationState::new();
    (0..ticks)
        .map(|tick| JsonTick { tick, alpha: on_tick(&mut state) })
        .collect()
}

/// Execute the pulse command.
pub fn cmd_pulse(args: &[String]) -> Result<()> {
    let mut ticks: u64 = 64;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--ticks" => {
                ticks = parse_flag(args, &mut i, "--ticks")?;
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

    let table = pulse_table(ticks);
    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        for row in &table {
            println!("{}\t{:.6}", row.tick, row.alpha);
        }
    }
    Ok(())
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("fuzzy-rose pulse - Print the opacity pulse tick by tick");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    fuzzy-rose pulse [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -n, --ticks <n>   Number of ticks (default: 64)");
    eprintln!("    --json            Print JSON instead of tab separated rows");
}
