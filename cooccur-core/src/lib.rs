//! # Cooccur - Taxon Co-occurrence Community Finder
//!
//! A library for finding which sets of biological taxa are frequently
//! observed together across a collection of observational record sets, and
//! for reporting the most frequent such sets as community-labeled tabular
//! rows.
//!
//! ## Overview
//!
//! The engine enumerates all bounded-size subsets of each record set's taxa,
//! aggregates their occurrence frequency across record sets, and selects the
//! N most frequent subsets deterministically. Enumeration is lazy and
//! selection is size-bounded, so peak memory is governed by the frequency
//! table alone even though the number of combinations grows combinatorially
//! with taxon count.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cooccur_core::{CooccurAnalyzer, config::CooccurConfig};
//! use cooccur_core::config::ReportFormat;
//! use cooccur_core::output::export_report;
//! use std::path::Path;
//!
//! // Analyze one directory of per-species .xml files
//! let analyzer = CooccurAnalyzer::new(CooccurConfig::default());
//! let results = analyzer.analyze_dir(Path::new("DL_all"))?;
//!
//! println!("Found {} top combinations", results.ranked.len());
//!
//! // Write the community report
//! export_report(
//!     Path::new("communities.tsv"),
//!     &results.report_rows(),
//!     ReportFormat::Tsv,
//! )?;
//! # Ok::<(), cooccur_core::types::CooccurError>(())
//! ```
//!
//! ## Multiple record sets
//!
//! Frequency counts are meaningful only across multiple observational
//! contexts: after processing `k` record sets, a combination's count is the
//! number of those record sets containing all of its members. Feed one
//! [`types::RecordSet`] per context via
//! [`CooccurAnalyzer::analyze_record_sets`]:
//!
//! ```rust
//! use cooccur_core::{CooccurAnalyzer, config::CooccurConfig};
//! use cooccur_core::types::RecordSet;
//!
//! let analyzer = CooccurAnalyzer::new(CooccurConfig { quiet: true, ..Default::default() });
//! let sites = vec![
//!     RecordSet::new(["A".to_string(), "B".to_string(), "C".to_string()]),
//!     RecordSet::new(["A".to_string(), "B".to_string()]),
//! ];
//! let results = analyzer.analyze_record_sets(sites)?;
//! assert_eq!(results.ranked[0].1, 2); // {A,B} seen at both sites
//! # Ok::<(), cooccur_core::types::CooccurError>(())
//! ```
//!
//! Analyzing a single directory ([`CooccurAnalyzer::analyze_dir`]) produces
//! exactly one record set, so every count is 1 and the ranking degenerates
//! to lexicographic order; that mode exists for the simple one-directory
//! workflow and its output should be read accordingly.
//!
//! ## Module Organization
//!
//! - [`config`]: Run configuration and report format options
//! - [`engine`]: The analyzer driving the pipeline
//! - [`types`]: Core data types and the error enum
//! - [`enumerate`]: Lazy combination enumeration
//! - [`aggregate`]: Frequency aggregation across record sets
//! - [`select`]: Bounded top-N selection with deterministic tie-breaking
//! - [`report`]: Typed community report rows
//! - [`output`]: Report writers (TSV, CSV)
//! - [`source`]: Taxon vocabulary discovery from a species directory
//! - [`results`]: Run results and metadata
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, CooccurError>`](types::CooccurError).
//! Source errors fail the run before any combinatorial work; export errors
//! leave the computed ranking intact for a retry to another destination.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod enumerate;
pub mod output;
pub mod report;
pub mod results;
pub mod select;
pub mod source;
pub mod types;

pub use engine::CooccurAnalyzer;
