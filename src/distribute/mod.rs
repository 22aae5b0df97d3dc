//! Placement of the leftover units of an equal split.
//!
//! Every function here adds exactly one unit to exactly `remainder` slots and leaves the
//! other slots untouched.

mod lanes;

use log::trace;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::strategy::DistributionStrategy;

use lanes::{add_alternating, add_mask, add_ones};

/// Adds 1 to exactly `remainder` slots of `slots`, chosen by `strategy`.
///
/// # Panics
///
/// Panics unless `slots.len() > 1` and `0 < remainder < slots.len()`. Callers handle the
/// trivial remainders themselves.
pub fn distribute(slots: &mut [usize], remainder: usize, strategy: DistributionStrategy) {
    check_remainder(slots.len(), remainder);
    trace!(
        "distributing {remainder} over {} slots {strategy}",
        slots.len()
    );

    let len = slots.len();
    match strategy {
        DistributionStrategy::FromLeft => add_ones(&mut slots[..remainder]),
        DistributionStrategy::FromRight => add_ones(&mut slots[len - remainder..]),
        DistributionStrategy::FromOutside => {
            let left = remainder / 2;
            let right = remainder - left;
            add_ones(&mut slots[..left]);
            add_ones(&mut slots[len - right..]);
        }
        DistributionStrategy::FromCenter => {
            let (lower, upper) = slots.split_at_mut(len / 2);
            let left = remainder / 2;
            let lower_len = lower.len();
            add_ones(&mut lower[lower_len - left..]);
            add_ones(&mut upper[..remainder - left]);
        }
        DistributionStrategy::FromLeftSpaced => spaced_from_left(slots, remainder),
        DistributionStrategy::FromOutsideSpaced => spaced_from_outside(slots, remainder),
        DistributionStrategy::Random { seed } => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            distribute_with_rng(slots, remainder, &mut rng);
        }
    }
}

/// Adds 1 to exactly `remainder` slots chosen uniformly at random from `rng`.
///
/// # Panics
///
/// Same preconditions as [`distribute`].
pub fn distribute_with_rng<R: Rng + ?Sized>(slots: &mut [usize], remainder: usize, rng: &mut R) {
    check_remainder(slots.len(), remainder);

    let mut mask = vec![0; slots.len()];
    mask[..remainder].fill(1);
    mask.shuffle(rng);

    add_mask(slots, &mask);
}

fn check_remainder(len: usize, remainder: usize) {
    assert!(
        len > 1 && 0 < remainder && remainder < len,
        "remainder must lie strictly between 0 and the slot count, got remainder {remainder} for {len} slots"
    );
}

/// Even offsets from the left first; past that, the skipped odd offsets from the right end.
/// Accepts any `count` in `0..=slots.len()`.
fn spaced_from_left(slots: &mut [usize], count: usize) {
    let len = slots.len();
    debug_assert!(count <= len);

    let evens = len.div_ceil(2);
    if count <= evens {
        add_alternating(&mut slots[..(2 * count).min(len)], true);
        return;
    }

    add_alternating(slots, true);

    let extra = count - evens;
    let last_odd = if len % 2 == 0 { len - 1 } else { len - 2 };
    let first_odd = last_odd + 2 - 2 * extra;
    add_alternating(&mut slots[first_odd..=last_odd], true);
}

/// Mirror image of [`spaced_from_left`]: the last slot is hit first, and the slots it
/// skipped are filled in from the left end.
fn spaced_from_right(slots: &mut [usize], count: usize) {
    let len = slots.len();
    debug_assert!(count <= len);

    let evens = len.div_ceil(2);
    if count <= evens {
        let run = (2 * count).min(len);
        add_alternating(&mut slots[len - run..], run % 2 == 1);
        return;
    }

    add_alternating(slots, len % 2 == 1);

    let extra = count - evens;
    let first_skipped = usize::from(len % 2 == 1);
    add_alternating(
        &mut slots[first_skipped..first_skipped + 2 * extra - 1],
        true,
    );
}

fn spaced_from_outside(slots: &mut [usize], remainder: usize) {
    let len = slots.len();

    match remainder {
        1 => slots[0] += 1,
        2 => {
            slots[0] += 1;
            slots[len - 1] += 1;
        }
        r if r == len - 1 => {
            let middle = len / 2;
            add_ones(&mut slots[..middle]);
            add_ones(&mut slots[middle + 1..]);
        }
        r => {
            let (lower, upper) = slots.split_at_mut(len.div_ceil(2));
            spaced_from_left(lower, r.div_ceil(2));
            spaced_from_right(upper, r / 2);
        }
    }
}
