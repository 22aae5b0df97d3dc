//! Exact, order-stable division of integer amounts and slices into proportional portions.
//!
//! - [`split`](split::split) divides `[0, n)` into contiguous portions proportional to
//!   arbitrary non-negative weights; the sizes always sum to `n`.
//! - [`evenly`](evenly::evenly) is the fast path for equal weights; a
//!   [`DistributionStrategy`] decides which portions receive the leftover units.
//! - [`ApportionEngine`], [`PortionSizer`] and [`ListPartitioner`] compute once and cache.

pub mod distribute;
pub mod easy;
pub mod engine;
pub mod error;
pub mod evenly;
pub mod portion;
pub mod split;
pub mod strategy;

pub use easy::Apportion;
pub use engine::{ApportionEngine, ListPartitioner, PortionSizer};
pub use error::{ApportionError, Result};
pub use portion::Portion;
pub use strategy::DistributionStrategy;
