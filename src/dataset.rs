use chrono::{Days, NaiveDate};
use rand::Rng;
use tracing::{debug, info};

use crate::config::DatasetConfig;
use crate::error::{GeneratorError, Result};
use crate::generator::FlightGenerator;
use crate::models::FlightRecord;

/// Generate `flights_per_day` flights for each of `days` consecutive days.
///
/// Records are ordered day by day, then in generation order within the day.
pub fn generate_dataset<R: Rng>(
    generator: &mut FlightGenerator<R>,
    start_date: NaiveDate,
    days: u32,
    flights_per_day: usize,
) -> Result<Vec<FlightRecord>> {
    let mut all_flights = Vec::with_capacity(days as usize * flights_per_day);

    for day in 0..days {
        let current_date = start_date
            .checked_add_days(Days::new(day as u64))
            .ok_or_else(|| GeneratorError::InvalidConfig {
                field: "days".to_string(),
                reason: format!("{} days after {} is out of range", day, start_date),
            })?;

        let daily_flights = generator.generate_flight_data(current_date, flights_per_day)?;
        debug!("Generated {} flights for {}", daily_flights.len(), current_date);
        all_flights.extend(daily_flights);
    }

    info!(
        "Generated {} flights over {} days starting {}",
        all_flights.len(),
        days,
        start_date
    );

    Ok(all_flights)
}

/// Generate the dataset described by `config`, seeding from entropy when no seed is set
pub fn generate_from_config(config: &DatasetConfig) -> Result<Vec<FlightRecord>> {
    match config.seed {
        Some(seed) => generate_dataset(
            &mut FlightGenerator::seeded(seed),
            config.start_date,
            config.days,
            config.flights_per_day,
        ),
        None => generate_dataset(
            &mut FlightGenerator::from_entropy(),
            config.start_date,
            config.days,
            config.flights_per_day,
        ),
    }
}
