use thiserror::Error;

use crate::split::WeightTotal;

pub type Result<T> = core::result::Result<T, ApportionError>;

/// Argument validation failures reported at the public API boundary.
///
/// Every variant is a caller contract violation; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApportionError {
    #[error("weights must not be empty")]
    NoWeights,

    #[error("weights must be non-negative and finite, but weight #{index} is {weight}")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("portions must be at least 1")]
    NoPortions,

    #[error("range start must not exceed its end, got {start}..{end}")]
    InvertedBounds { start: usize, end: usize },

    #[error("expected {expected} output slots, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Checks that `weights` is non-empty and every weight is finite and non-negative.
///
/// Returns the sum of the weights.
pub(crate) fn validate_weights(weights: &[f64]) -> Result<WeightTotal> {
    if weights.is_empty() {
        return Err(ApportionError::NoWeights);
    }

    let mut total = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        // NaN fails both comparisons, so test the accepted set instead of the rejected one.
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(ApportionError::InvalidWeight { index, weight });
        }
        total += weight;
    }

    Ok(WeightTotal::new(weights, total))
}
