//! Per-flight generator
//!
//! `FlightGenerator` owns its random source, so a seeded generator replays the
//! exact same flights and independent generators never share state.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::debug;

use crate::error::{GeneratorError, Result};
use crate::models::FlightRecord;
use crate::outcome::{determine_cancellation, generate_delay_minutes, FlightStatus, RiskFactors};
use crate::reference::{day_factor, time_factor, WeatherCondition, AIRLINES, AIRPORTS};
use crate::sampling::{sample_excluding, sample_uniform, sample_weighted};

/// Departure minutes within the hour
const DEPARTURE_MINUTES: [u32; 4] = [0, 15, 30, 45];

/// Scheduled flight duration bounds in minutes (inclusive)
const MIN_DURATION_MINUTES: i64 = 60;
const MAX_DURATION_MINUTES: i64 = 720;

/// Flight number suffix bounds (inclusive)
const MIN_FLIGHT_NUMBER: u32 = 100;
const MAX_FLIGHT_NUMBER: u32 = 9999;

pub struct FlightGenerator<R: Rng = StdRng> {
    rng: R,
}

impl FlightGenerator<StdRng> {
    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> FlightGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one flight departing on `date`
    pub fn generate_flight(&mut self, date: NaiveDate) -> Result<FlightRecord> {
        let rng = &mut self.rng;

        // Airlines and airports carry the default weight, so these draws are uniform
        let airline = sample_weighted(AIRLINES, rng)?;
        let origin = sample_weighted(AIRPORTS, rng)?;
        let destination = sample_excluding(AIRPORTS, |a| a.code == origin.code, rng)?;

        let hour = rng.gen_range(0..24);
        let minute = *sample_uniform(&DEPARTURE_MINUTES, rng)?;
        let scheduled_departure = departure_time(date, hour, minute)?;

        let duration = Duration::minutes(rng.gen_range(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES));
        let scheduled_arrival = scheduled_departure + duration;

        let weather = *sample_weighted(&WeatherCondition::ALL, rng)?;
        let cancelled = determine_cancellation(weather, airline.delay_factor, rng);

        let factors = RiskFactors {
            airline: airline.delay_factor,
            origin: origin.congestion_factor,
            destination: destination.congestion_factor,
            weather: weather.delay_factor(),
            time_of_day: time_factor(hour),
            day_of_week: day_factor(date.weekday().num_days_from_monday()),
        };
        let delay_minutes = generate_delay_minutes(&factors, cancelled, rng);

        let (estimated_departure, estimated_arrival) = if cancelled {
            (None, None)
        } else {
            let delay = Duration::minutes(delay_minutes as i64);
            (Some(scheduled_departure + delay), Some(scheduled_arrival + delay))
        };

        let status = FlightStatus::from_outcome(delay_minutes, cancelled);
        let flight_number = format!(
            "{}{}",
            airline.code,
            rng.gen_range(MIN_FLIGHT_NUMBER..=MAX_FLIGHT_NUMBER)
        );

        debug!(
            flight = %flight_number,
            origin = origin.code,
            destination = destination.code,
            weather = %weather,
            delay_minutes,
            cancelled,
            "generated flight"
        );

        Ok(FlightRecord {
            flight_number,
            airline_code: airline.code.to_string(),
            airline_name: airline.name.to_string(),
            origin_code: origin.code.to_string(),
            origin_name: origin.name.to_string(),
            destination_code: destination.code.to_string(),
            destination_name: destination.name.to_string(),
            scheduled_departure,
            estimated_departure,
            actual_departure: None,
            scheduled_arrival,
            estimated_arrival,
            actual_arrival: None,
            status,
            delay_minutes,
            cancelled,
            weather_condition: weather,
        })
    }

    /// Generate `num_flights` flights departing on `date`, in generation order
    pub fn generate_flight_data(
        &mut self,
        date: NaiveDate,
        num_flights: usize,
    ) -> Result<Vec<FlightRecord>> {
        (0..num_flights).map(|_| self.generate_flight(date)).collect()
    }
}

fn departure_time(date: NaiveDate, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(|time| date.and_time(time))
        .ok_or_else(|| GeneratorError::InvalidConfig {
            field: "departure_time".to_string(),
            reason: format!("{:02}:{:02} is not a valid time of day", hour, minute),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{find_airline, find_airport};
    use chrono::Timelike;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 19).unwrap()
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = FlightGenerator::seeded(42).generate_flight_data(date(), 1).unwrap();
        let b = FlightGenerator::seeded(42).generate_flight_data(date(), 1).unwrap();
        assert_eq!(a, b);

        let a = FlightGenerator::seeded(7).generate_flight_data(date(), 50).unwrap();
        let b = FlightGenerator::seeded(7).generate_flight_data(date(), 50).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_records_are_consistent() {
        let mut generator = FlightGenerator::seeded(2024);
        let flights = generator.generate_flight_data(date(), 5_000).unwrap();
        assert_eq!(flights.len(), 5_000);

        for flight in &flights {
            assert!(flight.is_consistent(), "inconsistent record: {:?}", flight);
            assert_ne!(flight.origin_code, flight.destination_code);
        }
    }

    #[test]
    fn test_schedule_shape() {
        let mut generator = FlightGenerator::seeded(3);
        for flight in generator.generate_flight_data(date(), 2_000).unwrap() {
            let departure = flight.scheduled_departure;
            assert_eq!(departure.date(), date());
            assert!(DEPARTURE_MINUTES.contains(&departure.minute()));
            assert_eq!(departure.second(), 0);

            let duration = flight.duration_minutes();
            assert!((MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration));
        }
    }

    #[test]
    fn test_flight_number_and_names_match_tables() {
        let mut generator = FlightGenerator::seeded(8);
        for flight in generator.generate_flight_data(date(), 500).unwrap() {
            let airline = find_airline(&flight.airline_code).unwrap();
            assert_eq!(flight.airline_name, airline.name);

            let suffix: u32 = flight.flight_number[airline.code.len()..].parse().unwrap();
            assert!(flight.flight_number.starts_with(airline.code));
            assert!((MIN_FLIGHT_NUMBER..=MAX_FLIGHT_NUMBER).contains(&suffix));

            assert_eq!(
                flight.origin_name,
                find_airport(&flight.origin_code).unwrap().name
            );
            assert_eq!(
                flight.destination_name,
                find_airport(&flight.destination_code).unwrap().name
            );
        }
    }

    #[test]
    fn test_weather_mix_follows_probabilities() {
        let mut generator = FlightGenerator::seeded(13);
        let flights = generator.generate_flight_data(date(), 20_000).unwrap();
        let clear = flights
            .iter()
            .filter(|f| f.weather_condition == WeatherCondition::Clear)
            .count();
        let freq = clear as f64 / flights.len() as f64;
        assert!((freq - 0.6).abs() < 0.02, "clear frequency {}", freq);
    }

    #[test]
    fn test_departure_time_rejects_invalid_slot() {
        assert!(departure_time(date(), 24, 0).is_err());
        assert!(departure_time(date(), 23, 45).is_ok());
    }
}
