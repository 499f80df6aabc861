//! Synthetic flight-delay data generator
//!
//! Usage:
//!   cargo run --release --bin generate_flights -- [OPTIONS]
//!
//! Options:
//!   --start-date <DATE>       First day to generate, YYYY-MM-DD (default: today)
//!   --days <N>                Number of consecutive days (default: 30)
//!   --flights-per-day <N>     Flights generated per day (default: 100)
//!   --output-json <PATH>      JSON output path (default: flight_data.json)
//!   --output-csv <PATH>       CSV output path (default: flight_data.csv)
//!   --seed <N>                Random seed for reproducibility (optional)
//!   --no-analysis             Skip the statistics report

use anyhow::{Context, Result};
use clap::Parser;
use flight_delay_sim::analysis::DatasetStats;
use flight_delay_sim::config::{parse_start_date, DatasetConfig};
use flight_delay_sim::dataset::generate_from_config;
use flight_delay_sim::export::write_outputs;
use flight_delay_sim::logging::init_logging;
use std::path::PathBuf;
use tracing::info;

/// Generate mock flight delay data
#[derive(Parser, Debug)]
#[command(name = "generate_flights")]
#[command(about = "Generate synthetic flight records with realistic delay patterns")]
struct Args {
    /// Start date for data generation (YYYY-MM-DD), defaults to today
    #[arg(long)]
    start_date: Option<String>,

    /// Number of days to generate data for
    #[arg(long, default_value = "30")]
    days: u32,

    /// Number of flights to generate per day
    #[arg(long, default_value = "100")]
    flights_per_day: usize,

    /// Output JSON file path
    #[arg(long, default_value = "flight_data.json")]
    output_json: PathBuf,

    /// Output CSV file path
    #[arg(long, default_value = "flight_data.csv")]
    output_csv: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the statistics report
    #[arg(long)]
    no_analysis: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn into_config(self) -> Result<DatasetConfig> {
        let defaults = DatasetConfig::default();
        let start_date = match self.start_date.as_deref() {
            Some(s) => parse_start_date(s)?,
            None => defaults.start_date,
        };

        Ok(DatasetConfig {
            start_date,
            days: self.days,
            flights_per_day: self.flights_per_day,
            seed: self.seed,
            output_json: self.output_json,
            output_csv: self.output_csv,
            analyze: !self.no_analysis,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet)?;

    let config = args.into_config()?;

    info!(
        "Generating {} days x {} flights starting {}",
        config.days, config.flights_per_day, config.start_date
    );
    if let Some(seed) = config.seed {
        info!("Random seed: {}", seed);
    }

    let flights = generate_from_config(&config).context("Flight generation failed")?;
    write_outputs(&flights, &config)?;

    if config.analyze {
        DatasetStats::compute(&flights).print_report();
    }

    Ok(())
}
