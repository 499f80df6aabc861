//! JSON and CSV writers for generated flights

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::config::DatasetConfig;
use crate::models::FlightRecord;

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Write flights as a pretty-printed JSON array
pub fn save_json(flights: &[FlightRecord], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;

    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, flights)
        .with_context(|| format!("Failed to serialize flights to {}", path.display()))?;
    writer.flush()?;

    info!("Saved {} flights to {}", flights.len(), path.display());
    Ok(())
}

/// Read a JSON array previously written by `save_json`
pub fn load_json(path: &Path) -> Result<Vec<FlightRecord>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let flights: Vec<FlightRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse flights from {}", path.display()))?;
    Ok(flights)
}

/// Write flights as CSV with a header row. Absent timestamps become empty cells.
pub fn save_csv(flights: &[FlightRecord], path: &Path) -> Result<()> {
    if flights.is_empty() {
        warn!("No flights to save, skipping {}", path.display());
        return Ok(());
    }

    ensure_parent_dir(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for flight in flights {
        writer.serialize(flight)?;
    }
    writer.flush()?;

    info!("Saved {} flights to {}", flights.len(), path.display());
    Ok(())
}

/// Read a CSV file previously written by `save_csv`
pub fn load_csv(path: &Path) -> Result<Vec<FlightRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut flights = Vec::new();
    for (i, row) in reader.deserialize().enumerate() {
        let flight: FlightRecord =
            row.with_context(|| format!("Invalid row {} in {}", i + 1, path.display()))?;
        flights.push(flight);
    }
    Ok(flights)
}

/// Write both output files named by `config`, JSON first
pub fn write_outputs(flights: &[FlightRecord], config: &DatasetConfig) -> Result<()> {
    config.overlapping_outputs();
    save_json(flights, &config.output_json)?;
    save_csv(flights, &config.output_csv)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::FlightGenerator;
    use chrono::NaiveDate;

    fn flights() -> Vec<FlightRecord> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
        FlightGenerator::seeded(4)
            .generate_flight_data(date, 200)
            .unwrap()
    }

    #[test]
    fn test_json_preserves_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("flights.json");
        let flights = flights();

        save_json(&flights, &path).unwrap();
        assert_eq!(load_json(&path).unwrap(), flights);
    }

    #[test]
    fn test_csv_header_and_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.csv");
        let flights = flights();

        save_csv(&flights, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(
            header,
            "flight_number,airline_code,airline_name,origin_code,origin_name,\
             destination_code,destination_name,scheduled_departure,estimated_departure,\
             actual_departure,scheduled_arrival,estimated_arrival,actual_arrival,status,\
             delay_minutes,cancelled,weather_condition"
        );
        assert_eq!(content.lines().count(), flights.len() + 1);
        assert_eq!(load_csv(&path).unwrap(), flights);
    }

    #[test]
    fn test_csv_skips_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        save_csv(&[], &path).unwrap();
        assert!(!path.exists());
    }
}
