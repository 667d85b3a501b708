use std::collections::HashSet;
use std::path::Path;

use crate::aggregate::FrequencyAggregator;
use crate::config::CooccurConfig;
use crate::results::{CooccurResults, RunInfo};
use crate::select::select_top_n;
use crate::source::read_taxa_from_dir;
use crate::types::{CooccurError, RecordSet};

/// Main co-occurrence analysis engine.
///
/// Owns the run configuration and drives the pipeline: record sets are
/// streamed through the combination enumerator into a per-run frequency
/// aggregator, and the populated table is handed read-only to top-N
/// selection. Each call creates its own aggregator; no counting state
/// survives between runs.
///
/// # Examples
///
/// ```rust,no_run
/// use cooccur_core::{CooccurAnalyzer, config::CooccurConfig};
/// use std::path::Path;
///
/// let analyzer = CooccurAnalyzer::new(CooccurConfig::default());
/// let results = analyzer.analyze_dir(Path::new("DL_all"))?;
/// println!("Top combinations: {}", results.ranked.len());
/// # Ok::<(), cooccur_core::types::CooccurError>(())
/// ```
#[derive(Debug)]
pub struct CooccurAnalyzer {
    /// Run configuration.
    pub config: CooccurConfig,
}

impl CooccurAnalyzer {
    /// Create an analyzer with the given configuration.
    #[must_use]
    pub fn new(config: CooccurConfig) -> Self {
        Self { config }
    }

    /// Analyze a single directory of per-species files.
    ///
    /// The directory's taxon vocabulary becomes one record set, so every
    /// combination in the result has count exactly 1 and the ranking
    /// degenerates to the lexicographic tie-break order. Use
    /// [`analyze_record_sets`](Self::analyze_record_sets) with one record
    /// set per observational context to get meaningful frequencies.
    ///
    /// # Errors
    ///
    /// - [`CooccurError::InvalidSource`] if the directory is missing or
    ///   unreadable.
    /// - [`CooccurError::EmptyInput`] if it yields fewer than two taxa.
    pub fn analyze_dir(&self, dir: &Path) -> Result<CooccurResults, CooccurError> {
        let taxa = read_taxa_from_dir(dir)?;
        if !self.config.quiet {
            eprintln!("Found {} taxa in {}", taxa.len(), dir.display());
        }

        let record_set = RecordSet::new(taxa);
        let mut results = self.analyze_record_sets(std::iter::once(record_set))?;
        results.run_info.source = Some(dir.display().to_string());
        Ok(results)
    }

    /// Analyze any number of record sets, one per observational context.
    ///
    /// This is the multi-context form: after processing, a combination's
    /// count equals the number of supplied record sets whose taxon set
    /// contains it, so the ranking reflects genuine co-occurrence across
    /// contexts.
    ///
    /// # Errors
    ///
    /// Returns [`CooccurError::EmptyInput`] if fewer than two distinct taxa
    /// were seen across all record sets.
    pub fn analyze_record_sets<I>(&self, record_sets: I) -> Result<CooccurResults, CooccurError>
    where
        I: IntoIterator<Item = RecordSet>,
    {
        let mut aggregator = FrequencyAggregator::new(self.config.max_combo_size);
        let mut distinct_taxa: HashSet<String> = HashSet::new();

        for record_set in record_sets {
            distinct_taxa.extend(record_set.taxa().iter().cloned());
            aggregator.observe_record_set(&record_set);
        }

        if distinct_taxa.len() < 2 {
            return Err(CooccurError::EmptyInput {
                found: distinct_taxa.len(),
            });
        }

        let num_record_sets = aggregator.record_sets_observed();
        let table = aggregator.into_table();
        if !self.config.quiet {
            eprintln!(
                "Observed {} distinct combinations across {} record sets",
                table.len(),
                num_record_sets
            );
        }

        let ranked = select_top_n(&table, self.config.top_n);
        Ok(CooccurResults {
            ranked,
            run_info: RunInfo {
                source: None,
                num_taxa: distinct_taxa.len(),
                num_record_sets,
                num_combinations: table.len(),
            },
        })
    }
}
