/// Output format options for the co-occurrence report.
///
/// Both formats share the same two-column row layout: a fixed
/// `Community` / `Species` header followed by one data row per
/// (community, member) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Tab-separated values.
    ///
    /// One header row, then `community<TAB>species` data rows.
    /// Lightweight and easy to paste into spreadsheet tools.
    Tsv,

    /// Comma-separated values (RFC 4180 quoting).
    ///
    /// Same row layout as TSV with standard CSV escaping, for taxon
    /// identifiers that may contain commas or quotes.
    Csv,
}

/// Configuration settings for a co-occurrence analysis run.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use cooccur_core::config::CooccurConfig;
///
/// let config = CooccurConfig::default();
/// assert_eq!(config.max_combo_size, 5);
/// assert_eq!(config.top_n, 1000);
/// ```
///
/// ## Pairs only, small report
///
/// ```rust
/// use cooccur_core::config::{CooccurConfig, ReportFormat};
///
/// let config = CooccurConfig {
///     max_combo_size: 2,
///     top_n: 50,
///     output_format: ReportFormat::Csv,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CooccurConfig {
    /// Maximum combination size to enumerate.
    ///
    /// Combinations of sizes 2 through this value are counted. The number
    /// of combinations grows combinatorially with taxon count, so raising
    /// this sharply increases run time and frequency-table memory.
    ///
    /// **Default**: `5`
    pub max_combo_size: usize,

    /// Number of top-ranked combinations to retain for the report.
    ///
    /// Selection keeps only this many candidates in memory at once.
    /// `0` produces an empty (header-only) report.
    ///
    /// **Default**: `1000`
    pub top_n: usize,

    /// Suppress informational output during processing.
    ///
    /// When `true`, prevents progress messages and statistics from being
    /// printed to stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Output format for the report. See [`ReportFormat`].
    ///
    /// **Default**: [`ReportFormat::Tsv`]
    pub output_format: ReportFormat,
}

impl Default for CooccurConfig {
    fn default() -> Self {
        Self {
            max_combo_size: 5,
            top_n: 1000,
            quiet: false,
            output_format: ReportFormat::Tsv,
        }
    }
}
