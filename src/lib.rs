//! Synthetic flight-delay data generation
//!
//! Samples flights from static airline/airport/weather tables, decides
//! cancellation and delay with a compound risk model, and hands the records to
//! JSON/CSV writers and a descriptive statistics report.

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod generator;
pub mod logging;
pub mod models;
pub mod outcome;
pub mod reference;
pub mod sampling;

pub use error::GeneratorError;
pub use generator::FlightGenerator;
pub use models::FlightRecord;
pub use outcome::FlightStatus;
