use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use tracing::warn;

use crate::error::{GeneratorError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Dataset generation settings
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    pub start_date: NaiveDate,
    pub days: u32,
    pub flights_per_day: usize,
    /// Fixed seed for reproducible output; entropy-seeded when absent
    pub seed: Option<u64>,
    pub output_json: PathBuf,
    pub output_csv: PathBuf,
    pub analyze: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            start_date: Local::now().date_naive(),
            days: 30,
            flights_per_day: 100,
            seed: None,
            output_json: PathBuf::from("flight_data.json"),
            output_csv: PathBuf::from("flight_data.csv"),
            analyze: true,
        }
    }
}

impl DatasetConfig {
    pub fn total_flights(&self) -> usize {
        self.days as usize * self.flights_per_day
    }

    /// Warn when the CSV write would overwrite the JSON output.
    ///
    /// Empty datasets and overlapping paths are legal; the run still goes ahead.
    pub fn overlapping_outputs(&self) -> bool {
        let overlapping = self.output_json == self.output_csv;
        if overlapping {
            warn!(
                "JSON and CSV outputs share the path {}; the CSV write replaces the JSON file",
                self.output_csv.display()
            );
        }
        overlapping
    }
}

/// Parse a `YYYY-MM-DD` start date
pub fn parse_start_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| {
        GeneratorError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}
