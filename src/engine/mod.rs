//! Lazily computed, cached apportionments and the views built on top of them.
//!
//! An engine owns its inputs, computes its portions on first access and keeps them for its
//! whole lifetime. The cache is a [`OnceCell`], so engines are not `Sync`: force the
//! computation (e.g. by calling [`ApportionEngine::portions`]) before moving one to another
//! thread, or put it behind a mutex.

pub mod partition;
pub mod sizer;

use std::cell::OnceCell;

use log::debug;

use crate::{
    error::{validate_weights, Result},
    portion::Portion,
    split::{SplitStrategy, WeightTotal, WeightedRangeSplitter},
};

pub use partition::ListPartitioner;
pub use sizer::PortionSizer;

#[derive(Debug, Clone)]
pub struct ApportionEngine<S: SplitStrategy = WeightedRangeSplitter> {
    domain_len: usize,
    weights: Vec<f64>,
    total: WeightTotal,
    strategy: S,
    portions: OnceCell<Vec<Portion>>,
}

impl ApportionEngine {
    /// Creates an engine dividing `[0, domain_len)` by `weights` with sequential rounding.
    pub fn new(domain_len: usize, weights: impl Into<Vec<f64>>) -> Result<Self> {
        Self::with_strategy(WeightedRangeSplitter, domain_len, weights)
    }
}

impl<S: SplitStrategy> ApportionEngine<S> {
    pub fn with_strategy(
        strategy: S,
        domain_len: usize,
        weights: impl Into<Vec<f64>>,
    ) -> Result<Self> {
        let weights = weights.into();
        let total = validate_weights(&weights)?;

        Ok(Self {
            domain_len,
            weights,
            total,
            strategy,
            portions: OnceCell::new(),
        })
    }

    pub fn domain_len(&self) -> usize {
        self.domain_len
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The sum of the weights. Infinite if it exceeds the range of `f64`, which [`share`]
    /// and the split itself handle by rescaling.
    ///
    /// [`share`]: ApportionEngine::share
    pub fn total_weight(&self) -> f64 {
        self.total.value()
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Number of portions, which is the number of weights.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false for a constructed engine, since empty weights are rejected.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The normalised weight of portion `index`, or `None` if out of bounds.
    ///
    /// Returns 0 for every portion when all weights are zero.
    pub fn share(&self, index: usize) -> Option<f64> {
        let weight = *self.weights.get(index)?;
        Some(self.total.fraction(self.total.scaled(weight)))
    }

    /// Returns true once the portions have been computed.
    pub fn is_materialized(&self) -> bool {
        self.portions.get().is_some()
    }

    pub fn portions(&self) -> &[Portion] {
        self.portions.get_or_init(|| {
            debug!(
                "apportioning {} over {} weights (total {})",
                self.domain_len,
                self.weights.len(),
                self.total.value()
            );
            let portions = self
                .strategy
                .split_validated(self.domain_len, &self.weights, self.total);

            assert_eq!(
                portions.len(),
                self.weights.len(),
                "split strategy {:?} returned the wrong number of portions",
                self.strategy
            );
            portions
        })
    }

    pub fn portion(&self, index: usize) -> Option<Portion> {
        self.portions().get(index).copied()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Portion> {
        self.portions().iter()
    }

    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().map(Portion::len)
    }

    /// Hands out the computed portions, computing them first if necessary.
    pub fn into_portions(self) -> Vec<Portion> {
        let Self {
            domain_len,
            weights,
            total,
            strategy,
            portions,
        } = self;

        portions
            .into_inner()
            .unwrap_or_else(|| strategy.split_validated(domain_len, &weights, total))
    }
}

impl<'a, S: SplitStrategy> IntoIterator for &'a ApportionEngine<S> {
    type Item = &'a Portion;
    type IntoIter = core::slice::Iter<'a, Portion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
