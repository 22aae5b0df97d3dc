//! Fast path for splitting an amount into equally weighted portions.

use log::trace;
use rand::Rng;

use crate::{
    distribute::{distribute, distribute_with_rng},
    error::{ApportionError, Result},
    portion::{portions_from_sizes, Portion},
    strategy::DistributionStrategy,
};

/// Splits `amount` into `portions` sizes that differ by at most one.
///
/// ```rust
/// # use apportion::{evenly::evenly, DistributionStrategy};
/// let sizes = evenly(5, 3, DistributionStrategy::default()).unwrap();
/// assert_eq!(sizes, vec![2, 1, 2]);
/// ```
pub fn evenly(amount: usize, portions: usize, strategy: DistributionStrategy) -> Result<Vec<usize>> {
    if portions == 0 {
        return Err(ApportionError::NoPortions);
    }

    let mut slots = vec![0; portions];
    evenly_into(amount, &mut slots, strategy)?;
    Ok(slots)
}

/// Adds an equal split of `amount` onto the existing contents of `slots`.
///
/// Repeated calls accumulate, so a buffer can collect several amounts in turn.
pub fn evenly_into(amount: usize, slots: &mut [usize], strategy: DistributionStrategy) -> Result<()> {
    let leftover = add_base(amount, slots)?;
    if leftover != 0 {
        distribute(slots, leftover, strategy);
    }

    Ok(())
}

/// Like [`evenly`], but the leftover units land on slots drawn uniformly from `rng`.
pub fn evenly_with_rng<R: Rng + ?Sized>(
    amount: usize,
    portions: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if portions == 0 {
        return Err(ApportionError::NoPortions);
    }

    let mut slots = vec![0; portions];
    evenly_into_with_rng(amount, &mut slots, rng)?;
    Ok(slots)
}

/// Like [`evenly_into`], but the leftover units land on slots drawn uniformly from `rng`.
pub fn evenly_into_with_rng<R: Rng + ?Sized>(
    amount: usize,
    slots: &mut [usize],
    rng: &mut R,
) -> Result<()> {
    let leftover = add_base(amount, slots)?;
    if leftover != 0 {
        distribute_with_rng(slots, leftover, rng);
    }

    Ok(())
}

/// Equal split expressed as back-to-back portions of `[0, amount)`.
pub fn evenly_ranges(
    amount: usize,
    portions: usize,
    strategy: DistributionStrategy,
) -> Result<Vec<Portion>> {
    let sizes = evenly(amount, portions, strategy)?;
    Ok(portions_from_sizes(0, &sizes))
}

/// Adds the floor share to every slot and returns how many units are left over.
fn add_base(amount: usize, slots: &mut [usize]) -> Result<usize> {
    let count = slots.len();
    if count == 0 {
        return Err(ApportionError::NoPortions);
    }

    let base = amount / count;
    let leftover = amount % count;
    trace!("splitting {amount} evenly over {count} slots: base {base}, leftover {leftover}");

    if base != 0 {
        for slot in slots.iter_mut() {
            *slot += base;
        }
    }

    Ok(leftover)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{
        prelude::{any, prop},
        prop_assert, prop_assert_eq, proptest,
    };
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;
    use strum::IntoEnumIterator;

    #[test]
    fn default_strategy_puts_extras_on_the_outside() {
        assert_eq!(
            evenly(5, 3, DistributionStrategy::default()).unwrap(),
            vec![2, 1, 2]
        );
    }

    #[test]
    fn exact_division_needs_no_strategy() {
        for strategy in DistributionStrategy::iter() {
            assert_eq!(evenly(12, 4, strategy).unwrap(), vec![3; 4]);
        }
    }

    #[test]
    fn amount_smaller_than_portion_count() {
        assert_eq!(
            evenly(2, 5, DistributionStrategy::FromLeft).unwrap(),
            vec![1, 1, 0, 0, 0]
        );
        assert_eq!(
            evenly(0, 3, DistributionStrategy::default()).unwrap(),
            vec![0; 3]
        );
    }

    #[test]
    fn single_portion_takes_everything() {
        assert_eq!(
            evenly(9, 1, DistributionStrategy::FromCenter).unwrap(),
            vec![9]
        );
    }

    #[test]
    fn zero_portions_is_rejected() {
        assert_eq!(
            evenly(5, 0, DistributionStrategy::default()),
            Err(ApportionError::NoPortions)
        );
        assert_eq!(
            evenly_into(5, &mut [], DistributionStrategy::default()),
            Err(ApportionError::NoPortions)
        );
        let mut rng = ChaCha8Rng::from_seed([23u8; 32]);
        assert_eq!(
            evenly_with_rng(5, 0, &mut rng),
            Err(ApportionError::NoPortions)
        );
    }

    #[test]
    fn into_accumulates() {
        let mut slots = vec![10, 20, 30];
        evenly_into(4, &mut slots, DistributionStrategy::FromLeft).unwrap();
        assert_eq!(slots, vec![12, 21, 31]);

        evenly_into(4, &mut slots, DistributionStrategy::FromRight).unwrap();
        assert_eq!(slots, vec![13, 22, 33]);
    }

    #[test]
    fn ranges_follow_the_sizes() {
        let portions = evenly_ranges(7, 3, DistributionStrategy::FromLeft).unwrap();
        assert_eq!(
            portions,
            vec![Portion(0, 3), Portion(3, 5), Portion(5, 7)]
        );
    }

    #[test]
    fn injected_rng_is_reproducible() {
        let mut rng = ChaCha8Rng::from_seed([23u8; 32]);
        let first = evenly_with_rng(103, 10, &mut rng).unwrap();

        let mut rng = ChaCha8Rng::from_seed([23u8; 32]);
        let second = evenly_with_rng(103, 10, &mut rng).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.iter().sum::<usize>(), 103);
        assert_eq!(first.iter().filter(|s| **s == 11).count(), 3);
    }

    #[test]
    fn random_strategy_spreads_over_many_seeds() {
        let mut hits = [0usize; 4];
        for seed in 0..400 {
            let sizes = evenly(1, 4, DistributionStrategy::Random { seed }).unwrap();
            let slot = sizes.iter().position(|s| *s == 1).unwrap();
            hits[slot] += 1;
        }
        assert!(hits.iter().all(|h| *h > 50), "{hits:?}");
    }

    proptest! {
        #[test]
        fn leftover_units_become_ceil_slots(amount in 0..100_000usize, portions in 1..300usize, seed in any::<u64>()) {
            let floor = amount / portions;
            let leftover = amount % portions;

            for strategy in DistributionStrategy::iter().chain([DistributionStrategy::Random { seed }]) {
                let sizes = evenly(amount, portions, strategy).unwrap();

                prop_assert_eq!(sizes.len(), portions);
                prop_assert_eq!(sizes.iter().sum::<usize>(), amount);
                prop_assert!(sizes.iter().all(|s| *s == floor || *s == floor + 1));
                if leftover != 0 {
                    prop_assert_eq!(sizes.iter().filter(|s| **s == floor + 1).count(), leftover);
                }
            }
        }
    }

    proptest! {
        #[test]
        fn repeated_accumulation_conserves(amounts in prop::collection::vec(0..1000usize, 1..10), portions in 1..40usize) {
            let mut slots = vec![0; portions];
            for amount in &amounts {
                evenly_into(*amount, &mut slots, DistributionStrategy::default()).unwrap();
            }
            prop_assert_eq!(slots.iter().sum::<usize>(), amounts.iter().sum::<usize>());
        }
    }
}
