//! Writers for rendering the community report.
//!
//! Both formats emit the same two-column layout: a fixed
//! `Community` / `Species` header row followed by one data row per
//! (community, member) pair, grouped by community.
//!
//! ## Examples
//!
//! ### Write a report to a file
//!
//! ```rust,no_run
//! use cooccur_core::config::{CooccurConfig, ReportFormat};
//! use cooccur_core::output::export_report;
//! use cooccur_core::CooccurAnalyzer;
//! use std::path::Path;
//!
//! let analyzer = CooccurAnalyzer::new(CooccurConfig::default());
//! let results = analyzer.analyze_dir(Path::new("DL_all"))?;
//!
//! export_report(Path::new("communities.tsv"), &results.report_rows(), ReportFormat::Tsv)?;
//! # Ok::<(), cooccur_core::types::CooccurError>(())
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::ReportFormat;
use crate::report::ReportRow;
use crate::types::CooccurError;

mod formats {
    pub mod csv;
    pub mod tsv;
}

use formats::{csv::write_csv_format, tsv::write_tsv_format};

/// Write report rows in the specified format.
///
/// # Errors
///
/// Returns [`CooccurError`] if writing fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    rows: &[ReportRow],
    format: ReportFormat,
) -> Result<(), CooccurError> {
    match format {
        ReportFormat::Tsv => write_tsv_format(writer, rows),
        ReportFormat::Csv => write_csv_format(writer, rows),
    }
}

/// Write report rows to a file path, surfacing failures as
/// [`CooccurError::Export`] carrying the destination.
///
/// An export failure never invalidates the rows themselves; the caller can
/// retry with a different destination without recomputation.
///
/// # Errors
///
/// Returns [`CooccurError::Export`] if the destination cannot be created or
/// written.
pub fn export_report(
    path: &Path,
    rows: &[ReportRow],
    format: ReportFormat,
) -> Result<(), CooccurError> {
    let to_export = |source: std::io::Error| CooccurError::Export {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_export)?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, rows, format).map_err(|error| match error {
        CooccurError::Io(source) => to_export(source),
        other => other,
    })?;
    writer.flush().map_err(to_export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn sample_rows() -> Vec<ReportRow> {
        vec![
            ReportRow {
                community: "community1".to_string(),
                species: "A".to_string(),
            },
            ReportRow {
                community: "community1".to_string(),
                species: "B".to_string(),
            },
            ReportRow {
                community: "community2".to_string(),
                species: "C".to_string(),
            },
        ]
    }

    #[test]
    fn test_write_report_tsv() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        write_report(&mut cursor, &sample_rows(), ReportFormat::Tsv).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(
            output,
            "Community\tSpecies\ncommunity1\tA\ncommunity1\tB\ncommunity2\tC\n"
        );
    }

    #[test]
    fn test_write_report_csv() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        write_report(&mut cursor, &sample_rows(), ReportFormat::Csv).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(
            output,
            "Community,Species\ncommunity1,A\ncommunity1,B\ncommunity2,C\n"
        );
    }

    #[test]
    fn test_write_report_empty_rows_header_only() {
        for format in [ReportFormat::Tsv, ReportFormat::Csv] {
            let mut buffer = Vec::new();
            let mut cursor = Cursor::new(&mut buffer);

            write_report(&mut cursor, &[], format).unwrap();
            let output = String::from_utf8(buffer).unwrap();

            assert_eq!(output.lines().count(), 1, "format: {format:?}");
            assert!(output.starts_with("Community"));
        }
    }

    #[test]
    fn test_export_report_unwritable_destination() {
        let missing_dir = Path::new("/definitely/not/a/dir/report.tsv");
        let result = export_report(missing_dir, &sample_rows(), ReportFormat::Tsv);

        match result {
            Err(CooccurError::Export { path, .. }) => {
                assert_eq!(path, missing_dir);
            }
            other => panic!("Expected Export error, got {other:?}"),
        }
    }

    #[test]
    fn test_export_report_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.tsv");

        export_report(&path, &sample_rows(), ReportFormat::Tsv).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();

        assert!(written.starts_with("Community\tSpecies\n"));
        assert_eq!(written.lines().count(), 4);
    }
}
