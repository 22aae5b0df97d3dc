//! Proportional splitting of an index domain into contiguous portions.

use crate::{
    error::{validate_weights, ApportionError, Result},
    portion::Portion,
};

/// A way of dividing `[0, domain_len)` into one portion per weight.
///
/// Implementations receive weights that already passed validation, together with their sum.
pub trait SplitStrategy: core::fmt::Debug {
    fn split_validated(&self, domain_len: usize, weights: &[f64], total: WeightTotal)
        -> Vec<Portion>;
}

/// Sum of a validated weight sequence.
///
/// Weights are summed as given. Only when that sum overflows `f64` is every weight divided by
/// the largest one first, which keeps the sum finite and the fractions proportional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTotal {
    scale: f64,
    sum: f64,
}

impl WeightTotal {
    /// `sum` is the plain sum of `weights`, all of which are finite and non-negative.
    pub(crate) fn new(weights: &[f64], sum: f64) -> Self {
        if sum.is_finite() {
            return Self { scale: 1.0, sum };
        }

        let scale = weights.iter().copied().fold(0.0, f64::max);
        let sum = weights.iter().map(|w| w / scale).sum();
        Self { scale, sum }
    }

    /// The sum of the weights. Infinite if it exceeds the range of `f64`.
    pub fn value(&self) -> f64 {
        self.sum * self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.sum == 0.0
    }

    /// Brings a weight, or a partial sum of weights, into the units [`WeightTotal::fraction`]
    /// takes.
    pub fn scaled(&self, weight: f64) -> f64 {
        weight / self.scale
    }

    /// The part of the total that a scaled weight makes up, or 0 if every weight is zero.
    pub fn fraction(&self, scaled_weight: f64) -> f64 {
        if self.sum > 0.0 {
            scaled_weight / self.sum
        } else {
            0.0
        }
    }
}

/// Sequential largest-share rounding.
///
/// Each weight except the last takes `round_half_even(remaining * w / total)` of the stock
/// that is still unallocated, while `total` stays fixed for the whole call. The last weight
/// absorbs whatever is left, which makes the sum exact regardless of earlier rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRangeSplitter;

impl SplitStrategy for WeightedRangeSplitter {
    fn split_validated(
        &self,
        domain_len: usize,
        weights: &[f64],
        total: WeightTotal,
    ) -> Vec<Portion> {
        let mut portions = Vec::with_capacity(weights.len());
        let mut remaining = domain_len;
        let mut offset = 0;

        if let Some((_, leading)) = weights.split_last() {
            for &weight in leading {
                let taken = share_of(remaining, total.fraction(total.scaled(weight)));
                portions.push(Portion(offset, offset + taken));
                offset += taken;
                remaining -= taken;
            }
        }

        portions.push(Portion(offset, domain_len));
        portions
    }
}

/// Boundary rounding against the cumulative weight.
///
/// Portion `i` ends at `round_half_even(domain_len * (w_0 + ... + w_i) / total)`, so every
/// boundary lies within half a unit of its exact position and equal weights never differ by
/// more than one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CumulativeRangeSplitter;

impl SplitStrategy for CumulativeRangeSplitter {
    fn split_validated(
        &self,
        domain_len: usize,
        weights: &[f64],
        total: WeightTotal,
    ) -> Vec<Portion> {
        let mut portions = Vec::with_capacity(weights.len());
        let mut cumulative = 0.0;
        let mut offset = 0;

        if let Some((_, leading)) = weights.split_last() {
            for &weight in leading {
                cumulative += total.scaled(weight);
                let end = share_of(domain_len, total.fraction(cumulative)).max(offset);
                portions.push(Portion(offset, end));
                offset = end;
            }
        }

        portions.push(Portion(offset, domain_len));
        portions
    }
}

/// Rounds `remaining * fraction` half-to-even, never exceeding `remaining`.
fn share_of(remaining: usize, fraction: f64) -> usize {
    let exact = remaining as f64 * fraction;
    // `as` saturates, and the product never exceeds `remaining` for valid weights.
    (exact.round_ties_even() as usize).min(remaining)
}

/// Splits `[0, domain_len)` into `weights.len()` contiguous portions proportional to `weights`.
///
/// Each portion is rounded against what is still unallocated, so equal weights can end up
/// more than one unit apart: `split(10, &[1.0; 4])` has sizes `2, 2, 2, 4`. Use
/// [`crate::evenly::evenly`] for equal weights, or [`split_with`] and
/// [`CumulativeRangeSplitter`] to keep every boundary within half a unit of its exact position.
///
/// ```rust
/// # use apportion::split::split;
/// let portions = split(6, &[1.0, 1.0, 1.0, 1.0]).unwrap();
/// let sizes: Vec<_> = portions.iter().map(|p| p.len()).collect();
/// assert_eq!(sizes, vec![2, 1, 1, 2]);
///
/// let sizes: Vec<_> = split(10, &[1.0; 4]).unwrap().iter().map(|p| p.len()).collect();
/// assert_eq!(sizes, vec![2, 2, 2, 4]);
/// ```
pub fn split(domain_len: usize, weights: &[f64]) -> Result<Vec<Portion>> {
    let total = validate_weights(weights)?;
    Ok(WeightedRangeSplitter.split_validated(domain_len, weights, total))
}

/// Like [`split`], but with an explicit splitting strategy.
pub fn split_with<S: SplitStrategy + ?Sized>(
    strategy: &S,
    domain_len: usize,
    weights: &[f64],
) -> Result<Vec<Portion>> {
    let total = validate_weights(weights)?;
    Ok(strategy.split_validated(domain_len, weights, total))
}

/// Like [`split`], but over the domain `[start, end)`.
pub fn split_range(start: usize, end: usize, weights: &[f64]) -> Result<Vec<Portion>> {
    if start > end {
        return Err(ApportionError::InvertedBounds { start, end });
    }

    let portions = split(end - start, weights)?;
    Ok(portions.into_iter().map(|p| p.shift(start)).collect())
}

/// Returns the length of every portion [`split`] would produce.
pub fn split_sizes(domain_len: usize, weights: &[f64]) -> Result<Vec<usize>> {
    Ok(split(domain_len, weights)?.iter().map(Portion::len).collect())
}

/// Adds the size of every portion [`split`] would produce onto `out`.
///
/// `out` must hold one slot per weight.
pub fn split_sizes_into(domain_len: usize, weights: &[f64], out: &mut [usize]) -> Result<()> {
    if out.len() != weights.len() {
        return Err(ApportionError::LengthMismatch {
            expected: weights.len(),
            actual: out.len(),
        });
    }

    for (slot, portion) in out.iter_mut().zip(split(domain_len, weights)?) {
        *slot += portion.len();
    }

    Ok(())
}
