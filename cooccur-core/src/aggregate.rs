//! Frequency aggregation of combinations across record sets.

use std::collections::HashMap;

use crate::enumerate::enumerate_combinations;
use crate::types::{Combination, RecordSet};

/// Counts how often each exact combination occurred across record sets.
///
/// One aggregator instance is created per run, populated by streaming record
/// sets through [`FrequencyAggregator::observe_record_set`], and then
/// consumed via [`FrequencyAggregator::into_table`]. After observing `k`
/// record sets, the stored count for a combination `C` equals the number of
/// those record sets whose taxon set is a superset of `C`.
///
/// Memory ceiling: the table holds every distinct combination ever observed,
/// `sum over r in 2..=min(m, n) of C(n, r)` entries in the worst case for a
/// record set of `n` taxa and maximum size `m`. The enumerator streams, so
/// nothing beyond the table itself is materialized.
///
/// With a single record set every count is necessarily 1 and "most frequent"
/// carries no signal; feeding one record set per observational context is
/// what makes the ranking meaningful, and is the caller's responsibility.
///
/// # Examples
///
/// ```rust
/// use cooccur_core::aggregate::FrequencyAggregator;
/// use cooccur_core::types::{Combination, RecordSet};
///
/// let mut aggregator = FrequencyAggregator::new(2);
/// for _ in 0..3 {
///     aggregator.observe_record_set(&RecordSet::new(["A".to_string(), "B".to_string()]));
/// }
/// let table = aggregator.into_table();
/// let ab = Combination::new(["A".to_string(), "B".to_string()]);
/// assert_eq!(table.get(&ab), Some(3));
/// ```
#[derive(Debug)]
pub struct FrequencyAggregator {
    counts: HashMap<Combination, u64>,
    max_combo_size: usize,
    record_sets_observed: usize,
}

impl FrequencyAggregator {
    /// Create an empty aggregator counting combinations up to
    /// `max_combo_size` members.
    #[must_use]
    pub fn new(max_combo_size: usize) -> Self {
        Self {
            counts: HashMap::new(),
            max_combo_size,
            record_sets_observed: 0,
        }
    }

    /// Stream one record set's combinations into the table, incrementing
    /// each by exactly one.
    ///
    /// The enumerator never repeats a combination within one record set, so
    /// a single call contributes at most one to any count.
    pub fn observe_record_set(&mut self, record_set: &RecordSet) {
        for combination in enumerate_combinations(record_set, self.max_combo_size) {
            *self.counts.entry(combination).or_insert(0) += 1;
        }
        self.record_sets_observed += 1;
    }

    /// Number of record sets observed so far.
    #[must_use]
    pub fn record_sets_observed(&self) -> usize {
        self.record_sets_observed
    }

    /// Consume the aggregator, handing the populated table to selection.
    #[must_use]
    pub fn into_table(self) -> FrequencyTable {
        FrequencyTable {
            counts: self.counts,
            record_sets_observed: self.record_sets_observed,
        }
    }
}

/// Immutable mapping from [`Combination`] to its occurrence count.
///
/// Every key present has count ≥ 1; a combination absent from every observed
/// record set never appears. Produced once per run by
/// [`FrequencyAggregator::into_table`] and read by the selector.
#[derive(Debug)]
pub struct FrequencyTable {
    counts: HashMap<Combination, u64>,
    record_sets_observed: usize,
}

impl FrequencyTable {
    /// Count for a combination, or `None` if it never occurred.
    #[must_use]
    pub fn get(&self, combination: &Combination) -> Option<u64> {
        self.counts.get(combination).copied()
    }

    /// Number of distinct combinations observed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of record sets that populated this table.
    #[must_use]
    pub fn record_sets_observed(&self) -> usize {
        self.record_sets_observed
    }

    /// Iterate over (combination, count) entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Combination, u64)> + '_ {
        self.counts.iter().map(|(combination, &count)| (combination, count))
    }
}
