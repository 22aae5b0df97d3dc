//! Slice conveniences for the common one-shot cases.

use crate::{
    engine::ListPartitioner,
    error::Result,
    evenly::evenly_ranges,
    strategy::DistributionStrategy,
};

pub trait Apportion<T> {
    /// Splits into one contiguous sub-slice per weight.
    fn apportion(&self, weights: &[f64]) -> Result<Vec<&[T]>>;

    /// Splits into `portions` sub-slices whose lengths differ by at most one.
    fn split_evenly(&self, portions: usize, strategy: DistributionStrategy) -> Result<Vec<&[T]>>;
}

impl<T> Apportion<T> for [T] {
    fn apportion(&self, weights: &[f64]) -> Result<Vec<&[T]>> {
        Ok(ListPartitioner::new(self, weights)?.partition())
    }

    fn split_evenly(&self, portions: usize, strategy: DistributionStrategy) -> Result<Vec<&[T]>> {
        Ok(evenly_ranges(self.len(), portions, strategy)?
            .iter()
            .map(|p| p.slice(self))
            .collect())
    }
}
