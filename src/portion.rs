use core::ops;

use crate::error::{ApportionError, Result};

/// A half-open index range `[start, end)` handed out to one weight.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Portion(pub(crate) usize, pub(crate) usize);

impl Portion {
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(ApportionError::InvertedBounds { start, end });
        }

        Ok(Self(start, end))
    }

    pub fn start(&self) -> usize {
        self.0
    }

    pub fn end(&self) -> usize {
        self.1
    }

    pub fn len(&self) -> usize {
        let Portion(start, end) = self;
        end - start
    }

    pub fn is_empty(&self) -> bool {
        self.0 == self.1
    }

    pub fn contains(&self, index: usize) -> bool {
        let Portion(start, end) = *self;
        start <= index && index < end
    }

    /// Returns true if `other` starts exactly where `self` ends.
    pub fn is_followed_by(&self, other: &Self) -> bool {
        self.1 == other.0
    }

    pub fn shift(&self, by: usize) -> Self {
        Self(self.0 + by, self.1 + by)
    }

    pub fn as_range(&self) -> ops::Range<usize> {
        self.0..self.1
    }

    /// Borrows the elements of `items` covered by this portion.
    ///
    /// # Panics
    ///
    /// Panics if the portion reaches past the end of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.as_range()]
    }
}

impl From<Portion> for ops::Range<usize> {
    fn from(portion: Portion) -> Self {
        portion.as_range()
    }
}

impl TryFrom<ops::Range<usize>> for Portion {
    type Error = ApportionError;

    fn try_from(range: ops::Range<usize>) -> Result<Self> {
        Portion::new(range.start, range.end)
    }
}

impl IntoIterator for Portion {
    type Item = usize;
    type IntoIter = ops::Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_range()
    }
}

impl core::fmt::Display for Portion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self(start, end) = self;
        write!(f, "{start}..{end}")
    }
}

/// Turns a sequence of sizes into back-to-back portions starting at `offset`.
pub(crate) fn portions_from_sizes(offset: usize, sizes: &[usize]) -> Vec<Portion> {
    let mut cursor = offset;
    sizes
        .iter()
        .map(|&size| {
            let portion = Portion(cursor, cursor + size);
            cursor += size;
            portion
        })
        .collect()
}
