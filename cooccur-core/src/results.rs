use crate::report::{build_report, ReportRow};
use crate::types::Combination;

/// Results of a co-occurrence analysis run.
///
/// Holds the ranked top-N combinations and run metadata. The ranking stays
/// alive after an export failure, so a retried export to another destination
/// needs no recomputation.
///
/// # Examples
///
/// ```rust,no_run
/// use cooccur_core::{CooccurAnalyzer, config::CooccurConfig};
/// use std::path::Path;
///
/// let analyzer = CooccurAnalyzer::new(CooccurConfig::default());
/// let results = analyzer.analyze_dir(Path::new("DL_all"))?;
///
/// println!("Taxa: {}", results.run_info.num_taxa);
/// println!("Distinct combinations: {}", results.run_info.num_combinations);
/// for (combination, count) in &results.ranked {
///     println!("{combination}: {count}");
/// }
/// # Ok::<(), cooccur_core::types::CooccurError>(())
/// ```
#[derive(Debug)]
pub struct CooccurResults {
    /// Ranked (combination, count) pairs, descending by count with
    /// lexicographic tie-break, at most `top_n` entries.
    pub ranked: Vec<(Combination, u64)>,

    /// Metadata about the analyzed input.
    pub run_info: RunInfo,
}

impl CooccurResults {
    /// Render the ranking as community-labeled report rows.
    #[must_use]
    pub fn report_rows(&self) -> Vec<ReportRow> {
        build_report(&self.ranked)
    }
}

/// Information about one analysis run.
#[derive(Debug, Clone)]
pub struct RunInfo {
    /// Label of the taxon source (directory path), if the run came from one.
    pub source: Option<String>,

    /// Number of distinct taxa seen across all record sets.
    pub num_taxa: usize,

    /// Number of record sets fed to the aggregator.
    ///
    /// When this is 1 every count in the ranking is necessarily 1 and the
    /// frequency ordering degenerates to the lexicographic tie-break.
    pub num_record_sets: usize,

    /// Number of distinct combinations observed before selection.
    pub num_combinations: usize,
}
