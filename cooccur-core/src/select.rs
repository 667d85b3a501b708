//! Bounded top-N selection over the frequency table.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::aggregate::FrequencyTable;
use crate::types::Combination;

/// A candidate in the selection heap. Orders by count, with ties broken by
/// lexicographic comparison of the sorted member sequence: a greater entry
/// ranks higher in the final output.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RankedEntry {
    count: u64,
    combination: Combination,
}

impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            // Equal counts: the lexicographically smaller combination wins.
            .then_with(|| other.combination.cmp(&self.combination))
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Whether a candidate outranks the current worst retained entry.
fn outranks(count: u64, combination: &Combination, worst: &RankedEntry) -> bool {
    count > worst.count || (count == worst.count && *combination < worst.combination)
}

/// Select the `n` highest-count combinations from a frequency table.
///
/// Returns at most `min(n, table.len())` entries sorted descending by count,
/// with equal counts ordered by lexicographic comparison of their sorted
/// member sequences. The result is fully deterministic even though the
/// table's own iteration order is not.
///
/// Keeps a size-bounded min-heap rather than sorting the whole table:
/// O(M log n) for M distinct combinations, and at most `n` retained entries
/// at any time. `n == 0` yields an empty result.
///
/// # Examples
///
/// ```rust
/// use cooccur_core::aggregate::FrequencyAggregator;
/// use cooccur_core::select::select_top_n;
/// use cooccur_core::types::RecordSet;
///
/// let mut aggregator = FrequencyAggregator::new(2);
/// aggregator.observe_record_set(&RecordSet::new(["A".to_string(), "B".to_string()]));
/// let table = aggregator.into_table();
///
/// let top = select_top_n(&table, 10);
/// assert_eq!(top.len(), 1);
/// assert_eq!(top[0].1, 1);
/// ```
#[must_use]
pub fn select_top_n(table: &FrequencyTable, n: usize) -> Vec<(Combination, u64)> {
    if n == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Reverse<RankedEntry>> = BinaryHeap::with_capacity(n + 1);
    for (combination, count) in table.iter() {
        if heap.len() == n {
            // Heap full: clone only candidates that displace the worst.
            let Reverse(worst) = heap.peek().unwrap();
            if !outranks(count, combination, worst) {
                continue;
            }
            heap.pop();
        }
        heap.push(Reverse(RankedEntry {
            count,
            combination: combination.clone(),
        }));
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(entry)| (entry.combination, entry.count))
        .collect()
}
