//! Flight dataset report
//! Run: ./target/release/analyze_flights --input flight_data.json

use anyhow::{bail, Result};
use clap::Parser;
use flight_delay_sim::analysis::DatasetStats;
use flight_delay_sim::export::{load_csv, load_json};
use flight_delay_sim::logging::init_logging;
use std::path::PathBuf;
use tracing::info;

/// Print descriptive statistics for a generated flight dataset
#[derive(Parser, Debug)]
#[command(name = "analyze_flights")]
struct Args {
    /// Dataset written by generate_flights (.json or .csv)
    #[arg(long, default_value = "flight_data.json")]
    input: PathBuf,

    /// Print the statistics as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(false, args.json)?;

    let flights = match args.input.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(&args.input)?,
        Some("csv") => load_csv(&args.input)?,
        _ => bail!(
            "Unsupported input {}: expected a .json or .csv file",
            args.input.display()
        ),
    };
    info!("Loaded {} flights from {}", flights.len(), args.input.display());

    let stats = DatasetStats::compute(&flights);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        stats.print_report();
    }

    Ok(())
}
