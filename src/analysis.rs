//! Descriptive statistics over a generated dataset
//! Status mix, delay distribution, weather impact and airline performance

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::FlightRecord;
use crate::outcome::FlightStatus;
use crate::reference::WeatherCondition;

/// Delay buckets as half-open `[lower, upper)` minute ranges; `None` means unbounded
pub const DELAY_BUCKETS: [(&str, u32, Option<u32>); 6] = [
    ("0-15 min", 0, Some(15)),
    ("15-30 min", 15, Some(30)),
    ("30-60 min", 30, Some(60)),
    ("60-120 min", 60, Some(120)),
    ("120-180 min", 120, Some(180)),
    ("180+ min", 180, None),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelaySummary {
    pub average: f64,
    /// Upper median: element `len / 2` of the sorted delays
    pub median: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDelay {
    pub group: String,
    pub avg_delay: f64,
    pub flights: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStats {
    pub total_flights: usize,
    pub status_counts: BTreeMap<FlightStatus, usize>,
    /// Over flights that operated; `None` when every flight was cancelled
    pub delay: Option<DelaySummary>,
    pub delay_buckets: Vec<(String, usize)>,
    pub weather_impact: Vec<GroupDelay>,
    /// Sorted by ascending average delay
    pub airline_performance: Vec<GroupDelay>,
}

impl DatasetStats {
    pub fn compute(flights: &[FlightRecord]) -> Self {
        let mut status_counts = BTreeMap::new();
        for flight in flights {
            *status_counts.entry(flight.status).or_insert(0) += 1;
        }

        let operated: Vec<&FlightRecord> = flights.iter().filter(|f| !f.cancelled).collect();
        let mut delays: Vec<u32> = operated.iter().map(|f| f.delay_minutes).collect();
        delays.sort_unstable();

        let delay = if delays.is_empty() {
            None
        } else {
            let sum: u64 = delays.iter().map(|&d| d as u64).sum();
            Some(DelaySummary {
                average: sum as f64 / delays.len() as f64,
                median: delays[delays.len() / 2],
                max: delays[delays.len() - 1],
            })
        };

        let delay_buckets = DELAY_BUCKETS
            .iter()
            .map(|&(label, lower, upper)| {
                let count = delays
                    .iter()
                    .filter(|&&d| d >= lower && upper.map_or(true, |u| d < u))
                    .count();
                (label.to_string(), count)
            })
            .collect();

        let mut by_weather: BTreeMap<WeatherCondition, Vec<u32>> = BTreeMap::new();
        let mut by_airline: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
        for flight in &operated {
            by_weather
                .entry(flight.weather_condition)
                .or_default()
                .push(flight.delay_minutes);
            by_airline
                .entry(flight.airline_code.as_str())
                .or_default()
                .push(flight.delay_minutes);
        }

        let weather_impact = by_weather
            .into_iter()
            .map(|(weather, delays)| group_delay(weather.label(), &delays))
            .collect();

        let mut airline_performance: Vec<GroupDelay> = by_airline
            .into_iter()
            .map(|(code, delays)| group_delay(code, &delays))
            .collect();
        airline_performance.sort_by(|a, b| a.avg_delay.total_cmp(&b.avg_delay));

        Self {
            total_flights: flights.len(),
            status_counts,
            delay,
            delay_buckets,
            weather_impact,
            airline_performance,
        }
    }

    pub fn status_count(&self, status: FlightStatus) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }

    pub fn cancellation_rate(&self) -> f64 {
        percentage(self.status_count(FlightStatus::Cancelled), self.total_flights)
    }

    pub fn print_report(&self) {
        print_section_header("FLIGHT DATASET STATISTICS");
        println!("  Total flights:        {:>10}", self.total_flights);
        println!("  Cancellation rate:    {:>9.1}%", self.cancellation_rate());

        print_subsection("Status Distribution");
        for status in FlightStatus::ALL {
            let count = self.status_count(status);
            println!(
                "  {:24} {:>8} ({:>5.1}%)",
                status.as_str(),
                count,
                percentage(count, self.total_flights)
            );
        }

        if let Some(delay) = &self.delay {
            let operated: usize = self.delay_buckets.iter().map(|(_, c)| c).sum();

            print_subsection("Delay Statistics");
            println!("  Average delay:        {:>8.1} minutes", delay.average);
            println!("  Median delay:         {:>8} minutes", delay.median);
            println!("  Max delay:            {:>8} minutes", delay.max);

            print_subsection("Delay Distribution");
            for (bucket, count) in &self.delay_buckets {
                println!(
                    "  {:24} {:>8} ({:>5.1}%)",
                    bucket,
                    count,
                    percentage(*count, operated)
                );
            }
        }

        print_subsection("Weather Impact");
        println!("  {:16} {:>12} {:>10}", "Condition", "Avg Delay", "Flights");
        for row in &self.weather_impact {
            println!("  {:16} {:>8.1} min {:>10}", row.group, row.avg_delay, row.flights);
        }

        print_subsection("Airline Performance");
        println!("  {:16} {:>12} {:>10}", "Airline", "Avg Delay", "Flights");
        for row in &self.airline_performance {
            println!("  {:16} {:>8.1} min {:>10}", row.group, row.avg_delay, row.flights);
        }
        println!();
    }
}

fn group_delay(group: &str, delays: &[u32]) -> GroupDelay {
    let sum: u64 = delays.iter().map(|&d| d as u64).sum();
    GroupDelay {
        group: group.to_string(),
        avg_delay: if delays.is_empty() {
            0.0
        } else {
            sum as f64 / delays.len() as f64
        },
        flights: delays.len(),
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn print_section_header(title: &str) {
    println!("\n{}", "═".repeat(60));
    println!("  {}", title);
    println!("{}\n", "═".repeat(60));
}

fn print_subsection(title: &str) {
    println!("\n{}", title);
    println!("{}", "─".repeat(50));
}
