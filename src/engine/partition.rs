use crate::{
    error::Result,
    split::{SplitStrategy, WeightedRangeSplitter},
};

use super::ApportionEngine;

/// Slices an ordered collection into one contiguous run per weight.
///
/// The sub-slices borrow from the original items; nothing is copied unless
/// [`ListPartitioner::to_vecs`] is asked for owned lists.
#[derive(Debug, Clone)]
pub struct ListPartitioner<'a, T, S: SplitStrategy = WeightedRangeSplitter> {
    items: &'a [T],
    engine: ApportionEngine<S>,
}

impl<'a, T> ListPartitioner<'a, T> {
    pub fn new(items: &'a [T], weights: impl Into<Vec<f64>>) -> Result<Self> {
        Self::with_strategy(WeightedRangeSplitter, items, weights)
    }
}

impl<'a, T, S: SplitStrategy> ListPartitioner<'a, T, S> {
    pub fn with_strategy(
        strategy: S,
        items: &'a [T],
        weights: impl Into<Vec<f64>>,
    ) -> Result<Self> {
        let engine = ApportionEngine::with_strategy(strategy, items.len(), weights)?;
        Ok(Self { items, engine })
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn engine(&self) -> &ApportionEngine<S> {
        &self.engine
    }

    pub fn len(&self) -> usize {
        self.engine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a [T]> {
        let items = self.items;
        self.engine.portion(index).map(|p| p.slice(items))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        let items = self.items;
        self.engine.iter().map(move |p| p.slice(items))
    }

    pub fn partition(&self) -> Vec<&'a [T]> {
        self.iter().collect()
    }

    /// Copies every part into its own list.
    pub fn to_vecs(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.iter().map(<[T]>::to_vec).collect()
    }
}
