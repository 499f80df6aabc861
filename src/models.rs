use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::outcome::FlightStatus;
use crate::reference::WeatherCondition;

/// One simulated flight, written once and never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_number: String,
    pub airline_code: String,
    pub airline_name: String,
    pub origin_code: String,
    pub origin_name: String,
    pub destination_code: String,
    pub destination_name: String,
    pub scheduled_departure: NaiveDateTime,
    pub estimated_departure: Option<NaiveDateTime>,
    /// Always empty for simulated data
    pub actual_departure: Option<NaiveDateTime>,
    pub scheduled_arrival: NaiveDateTime,
    pub estimated_arrival: Option<NaiveDateTime>,
    /// Always empty for simulated data
    pub actual_arrival: Option<NaiveDateTime>,
    pub status: FlightStatus,
    pub delay_minutes: u32,
    pub cancelled: bool,
    pub weather_condition: WeatherCondition,
}

impl FlightRecord {
    /// Scheduled block time in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.scheduled_arrival - self.scheduled_departure).num_minutes()
    }

    /// Check the structural invariants every generated record must satisfy
    pub fn is_consistent(&self) -> bool {
        let delay = Duration::minutes(self.delay_minutes as i64);

        let estimates_ok = if self.cancelled {
            self.delay_minutes == 0
                && self.estimated_departure.is_none()
                && self.estimated_arrival.is_none()
        } else {
            self.estimated_departure == Some(self.scheduled_departure + delay)
                && self.estimated_arrival == Some(self.scheduled_arrival + delay)
        };

        estimates_ok
            && self.origin_code != self.destination_code
            && self.status == FlightStatus::from_outcome(self.delay_minutes, self.cancelled)
            && self.actual_departure.is_none()
            && self.actual_arrival.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_record() -> FlightRecord {
        let departure = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let arrival = departure + Duration::minutes(95);
        let delay = Duration::minutes(20);

        FlightRecord {
            flight_number: "LH4410".to_string(),
            airline_code: "LH".to_string(),
            airline_name: "Lufthansa".to_string(),
            origin_code: "FRA".to_string(),
            origin_name: "Frankfurt".to_string(),
            destination_code: "LHR".to_string(),
            destination_name: "London Heathrow".to_string(),
            scheduled_departure: departure,
            estimated_departure: Some(departure + delay),
            actual_departure: None,
            scheduled_arrival: arrival,
            estimated_arrival: Some(arrival + delay),
            actual_arrival: None,
            status: FlightStatus::SlightlyDelayed,
            delay_minutes: 20,
            cancelled: false,
            weather_condition: WeatherCondition::Rain,
        }
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(value["scheduled_departure"], "2024-03-15T08:30:00");
        assert_eq!(value["estimated_departure"], "2024-03-15T08:50:00");
        assert!(value["actual_departure"].is_null());
        assert!(value["actual_arrival"].is_null());
        assert_eq!(value["status"], "slightly_delayed");
        assert_eq!(value["weather_condition"], "Rain");
        assert_eq!(value["delay_minutes"], 20);
    }

    #[test]
    fn test_consistency_checks() {
        let record = sample_record();
        assert!(record.is_consistent());
        assert_eq!(record.duration_minutes(), 95);

        let mut wrong_status = record.clone();
        wrong_status.status = FlightStatus::OnTime;
        assert!(!wrong_status.is_consistent());

        let mut cancelled_with_estimate = record.clone();
        cancelled_with_estimate.cancelled = true;
        cancelled_with_estimate.delay_minutes = 0;
        cancelled_with_estimate.status = FlightStatus::Cancelled;
        assert!(!cancelled_with_estimate.is_consistent());

        let mut same_airport = record;
        same_airport.destination_code = same_airport.origin_code.clone();
        assert!(!same_airport.is_consistent());
    }
}
