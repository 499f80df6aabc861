//! Static reference tables for flight generation
//! Airlines, airports, weather conditions and time-of-day / day-of-week multipliers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sampling::Weighted;

/// Airline with its reliability multiplier (>1.0 means worse than baseline)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airline {
    pub code: &'static str,
    pub name: &'static str,
    pub delay_factor: f64,
}

/// Airport with its typical traffic load multiplier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub congestion_factor: f64,
}

// Airlines and airports carry no selection weight, so they sample uniformly.
impl Weighted for Airline {}
impl Weighted for Airport {}

pub static AIRLINES: &[Airline] = &[
    Airline { code: "BA", name: "British Airways", delay_factor: 0.8 },
    Airline { code: "LH", name: "Lufthansa", delay_factor: 0.7 },
    Airline { code: "AF", name: "Air France", delay_factor: 0.85 },
    Airline { code: "DL", name: "Delta", delay_factor: 0.75 },
    Airline { code: "UA", name: "United Airlines", delay_factor: 0.9 },
    Airline { code: "AA", name: "American Airlines", delay_factor: 0.83 },
    Airline { code: "EK", name: "Emirates", delay_factor: 0.65 },
    Airline { code: "TK", name: "Turkish Airlines", delay_factor: 0.88 },
    Airline { code: "LX", name: "Swiss", delay_factor: 0.6 },
    Airline { code: "FR", name: "Ryanair", delay_factor: 1.1 },
];

pub static AIRPORTS: &[Airport] = &[
    Airport { code: "LHR", name: "London Heathrow", congestion_factor: 1.3 },
    Airport { code: "CDG", name: "Paris Charles de Gaulle", congestion_factor: 1.2 },
    Airport { code: "FRA", name: "Frankfurt", congestion_factor: 1.1 },
    Airport { code: "JFK", name: "New York JFK", congestion_factor: 1.4 },
    Airport { code: "LAX", name: "Los Angeles", congestion_factor: 1.25 },
    Airport { code: "DXB", name: "Dubai", congestion_factor: 0.9 },
    Airport { code: "SIN", name: "Singapore Changi", congestion_factor: 0.8 },
    Airport { code: "IST", name: "Istanbul", congestion_factor: 1.15 },
    Airport { code: "AMS", name: "Amsterdam Schiphol", congestion_factor: 1.05 },
    Airport { code: "MAD", name: "Madrid Barajas", congestion_factor: 1.1 },
];

/// Weather at the origin airport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Fog,
    Thunderstorm,
    #[serde(rename = "High Winds")]
    HighWinds,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 7] = [
        WeatherCondition::Clear,
        WeatherCondition::Cloudy,
        WeatherCondition::Rain,
        WeatherCondition::Snow,
        WeatherCondition::Fog,
        WeatherCondition::Thunderstorm,
        WeatherCondition::HighWinds,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Fog => "Fog",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::HighWinds => "High Winds",
        }
    }

    /// Selection probability; sums to 1.0 across `ALL`
    pub fn probability(&self) -> f64 {
        match self {
            WeatherCondition::Clear => 0.6,
            WeatherCondition::Cloudy => 0.15,
            WeatherCondition::Rain => 0.1,
            WeatherCondition::Snow => 0.05,
            WeatherCondition::Fog => 0.05,
            WeatherCondition::Thunderstorm => 0.03,
            WeatherCondition::HighWinds => 0.02,
        }
    }

    /// Multiplier applied to the mean delay
    pub fn delay_factor(&self) -> f64 {
        match self {
            WeatherCondition::Clear => 0.7,
            WeatherCondition::Cloudy => 0.9,
            WeatherCondition::Rain => 1.5,
            WeatherCondition::Snow => 2.5,
            WeatherCondition::Fog => 2.0,
            WeatherCondition::Thunderstorm => 3.0,
            WeatherCondition::HighWinds => 1.8,
        }
    }

    /// Multiplier applied to the base cancellation probability
    pub fn cancellation_multiplier(&self) -> f64 {
        match self {
            WeatherCondition::Clear => 0.2,
            WeatherCondition::Cloudy => 0.3,
            WeatherCondition::Rain => 1.5,
            WeatherCondition::Snow => 10.0,
            WeatherCondition::Fog => 6.0,
            WeatherCondition::Thunderstorm => 15.0,
            WeatherCondition::HighWinds => 8.0,
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Weighted for WeatherCondition {
    fn weight(&self) -> f64 {
        self.probability()
    }
}

/// Departure hour multipliers, indexed 0..=23
const TIME_FACTORS: [f64; 24] = [
    // 00-04 late night
    0.7, 0.6, 0.6, 0.6, 0.6,
    // 05-07 early morning
    0.7, 0.75, 0.9,
    // 08-10 morning rush
    1.3, 1.4, 1.2,
    // 11-14 midday
    1.0, 1.0, 1.0, 1.0,
    // 15-18 afternoon rush
    1.1, 1.3, 1.5, 1.4,
    // 19-22 evening
    1.2, 1.1, 1.0, 0.9,
    // 23
    0.8,
];

/// Weekday multipliers, 0 = Monday .. 6 = Sunday
const DAY_FACTORS: [f64; 7] = [1.0, 0.9, 0.9, 1.0, 1.3, 1.2, 1.1];

/// Time-of-day multiplier for a departure hour
pub fn time_factor(hour: u32) -> f64 {
    TIME_FACTORS.get(hour as usize).copied().unwrap_or(1.0)
}

/// Day-of-week multiplier (0 = Monday)
pub fn day_factor(weekday: u32) -> f64 {
    DAY_FACTORS.get(weekday as usize).copied().unwrap_or(1.0)
}

/// Look up an airline by code
#[cfg(test)]
pub(crate) fn find_airline(code: &str) -> Option<&'static Airline> {
    AIRLINES.iter().find(|a| a.code == code)
}

/// Look up an airport by code
#[cfg(test)]
pub(crate) fn find_airport(code: &str) -> Option<&'static Airport> {
    AIRPORTS.iter().find(|a| a.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_weather_probabilities_sum_to_one() {
        let total: f64 = WeatherCondition::ALL.iter().map(|w| w.probability()).sum();
        assert!((total - 1.0).abs() < 1e-9, "weather probabilities sum to {}", total);
    }

    #[test]
    fn test_codes_are_unique() {
        let airlines: HashSet<_> = AIRLINES.iter().map(|a| a.code).collect();
        assert_eq!(airlines.len(), AIRLINES.len());

        let airports: HashSet<_> = AIRPORTS.iter().map(|a| a.code).collect();
        assert_eq!(airports.len(), AIRPORTS.len());
    }

    #[test]
    fn test_time_and_day_tables() {
        assert_eq!(time_factor(17), 1.5);
        assert_eq!(time_factor(0), 0.7);
        assert_eq!(time_factor(23), 0.8);
        assert_eq!(time_factor(24), 1.0);

        assert_eq!(day_factor(4), 1.3);
        assert_eq!(day_factor(6), 1.1);
        assert_eq!(day_factor(7), 1.0);
    }

    #[test]
    fn test_weather_label_serialization() {
        let json = serde_json::to_string(&WeatherCondition::HighWinds).unwrap();
        assert_eq!(json, "\"High Winds\"");
        assert_eq!(WeatherCondition::Thunderstorm.to_string(), "Thunderstorm");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(find_airline("LX").map(|a| a.name), Some("Swiss"));
        assert_eq!(find_airport("JFK").map(|a| a.congestion_factor), Some(1.4));
        assert!(find_airport("XXX").is_none());
    }
}
