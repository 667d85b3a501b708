use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// An unordered subset of taxon identifiers, the unit of frequency counting.
///
/// Two combinations are equal iff their member sets are equal, regardless of
/// the order in which the members were produced and independent of the record
/// set that produced them. Members are stored sorted, so the derived
/// [`Eq`]/[`Hash`] impls give set equality and the derived [`Ord`] impl gives
/// lexicographic comparison of the sorted member sequence, which is the
/// tie-break order used when ranking combinations of equal count.
///
/// # Examples
///
/// ```rust
/// use cooccur_core::types::Combination;
///
/// let a = Combination::new(["S2".to_string(), "S1".to_string()]);
/// let b = Combination::new(["S1".to_string(), "S2".to_string()]);
/// assert_eq!(a, b);
/// assert_eq!(a.members(), ["S1", "S2"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination(Vec<String>);

impl Combination {
    /// Create a combination from taxon identifiers in any order.
    ///
    /// Members are sorted and deduplicated.
    #[must_use]
    pub fn new(members: impl IntoIterator<Item = String>) -> Self {
        let mut members: Vec<String> = members.into_iter().collect();
        members.sort();
        members.dedup();
        Self(members)
    }

    /// Create a combination from members already sorted ascending and unique.
    pub(crate) fn from_sorted(members: Vec<String>) -> Self {
        debug_assert!(members.windows(2).all(|w| w[0] < w[1]));
        Self(members)
    }

    /// Member identifiers, sorted ascending.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.0
    }

    /// Number of members in the combination.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("+"))
    }
}

/// The set of taxa jointly observed in one context (site, sample, etc.).
///
/// Taxa are stored sorted and deduplicated so that combination enumeration
/// is deterministic for a given membership.
///
/// # Examples
///
/// ```rust
/// use cooccur_core::types::RecordSet;
///
/// let site = RecordSet::new(["B".to_string(), "A".to_string(), "A".to_string()]);
/// assert_eq!(site.taxa(), ["A", "B"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet(Vec<String>);

impl RecordSet {
    /// Create a record set from taxon identifiers in any order.
    #[must_use]
    pub fn new(taxa: impl IntoIterator<Item = String>) -> Self {
        let mut taxa: Vec<String> = taxa.into_iter().collect();
        taxa.sort();
        taxa.dedup();
        Self(taxa)
    }

    /// Taxon identifiers, sorted ascending and unique.
    #[must_use]
    pub fn taxa(&self) -> &[String] {
        &self.0
    }

    /// Number of distinct taxa in the record set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Error types that can occur during co-occurrence analysis
#[derive(Error, Debug)]
pub enum CooccurError {
    /// Taxon source path missing or unreadable; fails the run before any
    /// combinatorial work begins.
    #[error("Invalid taxon source: {} is not a readable directory", .path.display())]
    InvalidSource {
        /// The offending source path.
        path: PathBuf,
    },
    /// Fewer than two taxon identifiers available; no combination can be
    /// formed, surfaced explicitly instead of producing an empty report.
    #[error("Not enough taxa to form combinations: found {found}, need at least 2")]
    EmptyInput {
        /// Number of distinct taxa that were available.
        found: usize,
    },
    /// Report destination unwritable. The computed ranking is retained by
    /// the caller, so a retry to another destination needs no recomputation.
    #[error("Failed to write report to {}: {source}", .path.display())]
    Export {
        /// The report destination that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
