use std::cell::OnceCell;

use crate::{
    error::Result,
    split::{SplitStrategy, WeightedRangeSplitter},
};

use super::ApportionEngine;

/// Divides an amount by weights and reports the size of every portion.
#[derive(Debug, Clone)]
pub struct PortionSizer<S: SplitStrategy = WeightedRangeSplitter> {
    engine: ApportionEngine<S>,
    sizes: OnceCell<Vec<usize>>,
}

impl PortionSizer {
    pub fn new(amount: usize, weights: impl Into<Vec<f64>>) -> Result<Self> {
        Ok(Self::from_engine(ApportionEngine::new(amount, weights)?))
    }
}

impl<S: SplitStrategy> PortionSizer<S> {
    pub fn from_engine(engine: ApportionEngine<S>) -> Self {
        Self {
            engine,
            sizes: OnceCell::new(),
        }
    }

    pub fn amount(&self) -> usize {
        self.engine.domain_len()
    }

    pub fn engine(&self) -> &ApportionEngine<S> {
        &self.engine
    }

    pub fn sizes(&self) -> &[usize] {
        self.sizes.get_or_init(|| self.engine.sizes().collect())
    }

    pub fn size(&self, index: usize) -> Option<usize> {
        self.sizes().get(index).copied()
    }
}
