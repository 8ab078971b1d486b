//! fleetenc CLI - vehicle fleet serialization driver
//!
//! Thin wrapper over the fleet_encoder library: picks an output format,
//! loads a fleet (built-in demo or a JSON fleet file), and emits one
//! document per vehicle.

// Exclude from coverage - CLI binary tested via integration tests
#![cfg_attr(tarpaulin, ignore)]

use clap::Parser;
use fleet_encoder::{create_serializer, demo_fleet, load_fleet, Serializable};
use std::fs;
use std::path::PathBuf;
use std::process;

/// Serialize a vehicle fleet to XML or JSON
#[derive(Parser, Debug)]
#[command(name = "fleetenc")]
#[command(version = fleet_encoder::VERSION)]
#[command(about = "Serialize a vehicle fleet to XML or JSON")]
#[command(after_help = "EXAMPLES:
  # Demo fleet as JSON to stdout
  fleetenc

  # Demo fleet as XML
  fleetenc --format xml

  # A custom fleet file, written to disk
  fleetenc --fleet fleet.json --format xml -o fleet.xml
")]
struct Cli {
    /// Output format [xml, json]
    #[arg(long = "format", value_name = "FORMAT", default_value = "json")]
    format: String,

    /// Fleet file (JSON array of vehicles); defaults to the demo fleet
    #[arg(long = "fleet", value_name = "FILE")]
    fleet: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    run();
}

fn run() {
    let cli = Cli::parse();

    // The factory matches identifiers as-is; normalization and the
    // default-to-JSON fallback both live here, on the driver side.
    let mut format = cli.format.to_lowercase();
    if create_serializer(&format).is_err() {
        eprintln!("Invalid format '{}'. Using JSON by default.", cli.format);
        format = "json".to_string();
    }

    let fleet = match &cli.fleet {
        Some(path) => match load_fleet(path) {
            Ok(fleet) => fleet,
            Err(e) => {
                eprintln!("Error: failed to load fleet from '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => demo_fleet(),
    };

    // One fresh serializer per vehicle: instances are single-use builders
    let mut rendered = String::new();
    for (i, vehicle) in fleet.iter().enumerate() {
        let mut serializer = match create_serializer(&format) {
            Ok(serializer) => serializer,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };
        vehicle.serialize(serializer.as_mut());
        let document = serializer.build();

        if i > 0 {
            rendered.push('\n');
        }
        rendered.push_str(&document);
        if !document.ends_with('\n') {
            rendered.push('\n');
        }
    }

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                eprintln!("Error: failed to write '{}': {}", path.display(), e);
                process::exit(1);
            }
            eprintln!("Wrote {} vehicles to {}", fleet.len(), path.display());
        }
        None => print!("{}", rendered),
    }
}
