//! Lazy enumeration of bounded-size taxon combinations.
//!
//! For a record set of `n` taxa and a maximum size `m`, the total number of
//! combinations is `sum over r in 2..=min(m, n) of C(n, r)`, which grows
//! explosively with `n`. [`enumerate_combinations`] therefore yields
//! combinations one at a time from an O(r) index cursor instead of
//! materializing the full set, so they can stream straight into the
//! frequency aggregator.

use crate::types::{Combination, RecordSet};

/// Enumerate all combinations of a record set's taxa with sizes
/// `2..=max_combo_size`, in lexicographic order within each size and in
/// increasing size order overall.
///
/// Yields nothing if the record set has fewer than two taxa or
/// `max_combo_size < 2`.
///
/// # Examples
///
/// ```rust
/// use cooccur_core::enumerate::enumerate_combinations;
/// use cooccur_core::types::RecordSet;
///
/// let site = RecordSet::new(["S1".to_string(), "S2".to_string(), "S3".to_string()]);
/// let combos: Vec<String> = enumerate_combinations(&site, 2)
///     .map(|c| c.to_string())
///     .collect();
/// assert_eq!(combos, ["S1+S2", "S1+S3", "S2+S3"]);
/// ```
pub fn enumerate_combinations(
    record_set: &RecordSet,
    max_combo_size: usize,
) -> CombinationIter<'_> {
    CombinationIter::new(record_set.taxa(), max_combo_size)
}

/// Iterator over combinations of a sorted taxon slice.
///
/// Holds only the current index cursor; each call to [`Iterator::next`]
/// advances the cursor to the lexicographic successor, rolling over to the
/// next combination size when the current size is exhausted.
#[derive(Debug)]
pub struct CombinationIter<'a> {
    taxa: &'a [String],
    /// Current combination size being generated.
    size: usize,
    /// Largest size to generate, min(max_combo_size, taxa.len()).
    max_size: usize,
    indices: Vec<usize>,
    started: bool,
}

impl<'a> CombinationIter<'a> {
    fn new(taxa: &'a [String], max_combo_size: usize) -> Self {
        Self {
            taxa,
            size: 2,
            max_size: max_combo_size.min(taxa.len()),
            indices: Vec::new(),
            started: false,
        }
    }

    fn current(&self) -> Combination {
        Combination::from_sorted(
            self.indices
                .iter()
                .map(|&index| self.taxa[index].clone())
                .collect(),
        )
    }

    /// Advance the cursor to the lexicographic successor at the current
    /// size. Returns `false` when the current size is exhausted.
    fn advance(&mut self) -> bool {
        let n = self.taxa.len();
        let r = self.size;
        let mut i = r;
        while i > 0 {
            i -= 1;
            if self.indices[i] != i + n - r {
                self.indices[i] += 1;
                for j in i + 1..r {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for CombinationIter<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        loop {
            if self.size > self.max_size {
                return None;
            }
            if !self.started {
                self.indices = (0..self.size).collect();
                self.started = true;
                return Some(self.current());
            }
            if self.advance() {
                return Some(self.current());
            }
            self.size += 1;
            self.started = false;
        }
    }
}
