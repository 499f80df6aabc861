//! Categorical sampling over reference tables

use rand::distributions::{WeightedError, WeightedIndex};
use rand::prelude::*;
use thiserror::Error;

/// An entry that can be drawn by `sample_weighted`.
///
/// Entries without a natural weight keep the default of 1.0.
pub trait Weighted {
    fn weight(&self) -> f64 {
        1.0
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    #[error("cannot sample from an empty list")]
    Empty,

    #[error("all weights are zero")]
    AllWeightsZero,

    #[error("invalid weight (negative or not finite)")]
    InvalidWeight,
}

impl From<WeightedError> for SamplingError {
    fn from(err: WeightedError) -> Self {
        match err {
            WeightedError::NoItem => SamplingError::Empty,
            WeightedError::AllWeightsZero => SamplingError::AllWeightsZero,
            _ => SamplingError::InvalidWeight,
        }
    }
}

/// Pick one entry with probability proportional to its weight.
/// Weights need not be normalized.
pub fn sample_weighted<'a, T: Weighted>(
    items: &'a [T],
    rng: &mut impl Rng,
) -> Result<&'a T, SamplingError> {
    let dist = WeightedIndex::new(items.iter().map(|item| item.weight()))?;
    Ok(&items[dist.sample(rng)])
}

/// Pick one entry uniformly
pub fn sample_uniform<'a, T>(items: &'a [T], rng: &mut impl Rng) -> Result<&'a T, SamplingError> {
    items.choose(rng).ok_or(SamplingError::Empty)
}

/// Pick one entry uniformly among those not rejected by `exclude`.
///
/// Candidates are filtered first, so a single draw always succeeds when any remain.
pub fn sample_excluding<'a, T>(
    items: &'a [T],
    exclude: impl Fn(&T) -> bool,
    rng: &mut impl Rng,
) -> Result<&'a T, SamplingError> {
    let candidates: Vec<&T> = items.iter().filter(|item| !exclude(item)).collect();
    candidates.choose(rng).copied().ok_or(SamplingError::Empty)
}
