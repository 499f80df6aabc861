use thiserror::Error;

use crate::sampling::SamplingError;

/// Errors raised before or during dataset generation
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Sampling failed: {0}")]
    Sampling(#[from] SamplingError),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
