//! Flight outcome model
//!
//! Cancellation is a Bernoulli trial driven by weather and airline reliability.
//! Delay minutes for flights that do operate come from a two-component mixture
//! of exponentials: mostly short delays, with a heavier long tail.

use rand::prelude::*;
use rand_distr::Exp1;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::reference::WeatherCondition;

pub const BASE_CANCELLATION_PROBABILITY: f64 = 0.01;
pub const MAX_CANCELLATION_PROBABILITY: f64 = 0.5;

/// Mean delay in minutes before any risk amplification
pub const BASE_MEAN_DELAY: f64 = 15.0;

/// Probability of drawing from the short-delay component
pub const SHORT_DELAY_WEIGHT: f64 = 0.7;

/// Status thresholds in minutes
pub const SIGNIFICANT_DELAY_MINUTES: u32 = 180;
pub const DELAY_MINUTES: u32 = 45;
pub const SLIGHT_DELAY_MINUTES: u32 = 15;

/// Cancellation probability for a flight, capped at `MAX_CANCELLATION_PROBABILITY`
pub fn cancellation_probability(weather: WeatherCondition, airline_factor: f64) -> f64 {
    let p = BASE_CANCELLATION_PROBABILITY * weather.cancellation_multiplier() * airline_factor;
    p.min(MAX_CANCELLATION_PROBABILITY)
}

/// Decide whether a flight is cancelled
pub fn determine_cancellation(
    weather: WeatherCondition,
    airline_factor: f64,
    rng: &mut impl Rng,
) -> bool {
    rng.gen::<f64>() < cancellation_probability(weather, airline_factor)
}

/// Independent multiplicative risk factors feeding the delay model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFactors {
    pub airline: f64,
    pub origin: f64,
    pub destination: f64,
    pub weather: f64,
    pub time_of_day: f64,
    pub day_of_week: f64,
}

impl RiskFactors {
    /// Product of all factors.
    ///
    /// The two airport congestion factors enter as a geometric mean so the
    /// airport side of the route counts once, not twice.
    pub fn combined(&self) -> f64 {
        self.airline
            * (self.origin * self.destination).sqrt()
            * self.weather
            * self.time_of_day
            * self.day_of_week
    }

    pub fn mean_delay(&self) -> f64 {
        BASE_MEAN_DELAY * self.combined()
    }
}

/// Delay in whole minutes; always 0 for cancelled flights
pub fn generate_delay_minutes(factors: &RiskFactors, cancelled: bool, rng: &mut impl Rng) -> u32 {
    if cancelled {
        return 0;
    }

    let mean_delay = factors.mean_delay();
    if !mean_delay.is_finite() || mean_delay <= 0.0 {
        return 0;
    }

    let component_mean = if rng.gen::<f64>() < SHORT_DELAY_WEIGHT {
        mean_delay / 2.0
    } else {
        mean_delay * 2.0
    };

    let unit: f64 = rng.sample(Exp1);
    let draw = unit * component_mean;

    draw.round_ties_even().max(0.0) as u32
}

/// Flight status label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    Cancelled,
    SignificantlyDelayed,
    Delayed,
    SlightlyDelayed,
    OnTime,
}

impl FlightStatus {
    pub const ALL: [FlightStatus; 5] = [
        FlightStatus::OnTime,
        FlightStatus::SlightlyDelayed,
        FlightStatus::Delayed,
        FlightStatus::SignificantlyDelayed,
        FlightStatus::Cancelled,
    ];

    /// Derive the status from delay and cancellation, cancellation first
    pub fn from_outcome(delay_minutes: u32, cancelled: bool) -> Self {
        if cancelled {
            FlightStatus::Cancelled
        } else if delay_minutes >= SIGNIFICANT_DELAY_MINUTES {
            FlightStatus::SignificantlyDelayed
        } else if delay_minutes >= DELAY_MINUTES {
            FlightStatus::Delayed
        } else if delay_minutes >= SLIGHT_DELAY_MINUTES {
            FlightStatus::SlightlyDelayed
        } else {
            FlightStatus::OnTime
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Cancelled => "cancelled",
            FlightStatus::SignificantlyDelayed => "significantly_delayed",
            FlightStatus::Delayed => "delayed",
            FlightStatus::SlightlyDelayed => "slightly_delayed",
            FlightStatus::OnTime => "on_time",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
