//! # Cooccur CLI - Taxon Co-occurrence Community Finder
//!
//! A command-line interface for ranking frequently co-occurring taxon
//! combinations and exporting them as a community report.
//!
//! ## Usage
//!
//! ```bash
//! # Rank combinations from a directory of per-species .xml files
//! cooccur -i DL_all -o communities.tsv
//!
//! # Pairs only, CSV output, top 50
//! cooccur -i DL_all -m 2 -n 50 -f csv -o communities.csv
//!
//! # Write to stdout
//! cooccur -i DL_all
//! ```
//!
//! ## Options
//!
//! - `-i, --input <DIR>`: Directory of per-species `.xml` files (required)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-f, --format <FORMAT>`: Output format: tsv, csv (default: tsv)
//! - `-m, --max-combo-size <SIZE>`: Maximum combination size (default: 5)
//! - `-n, --top-n <COUNT>`: Number of top combinations to report (default: 1000)
//! - `-q, --quiet`: Suppress progress messages

use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::{Arg, ArgAction, Command};
use cooccur_core::config::{CooccurConfig, ReportFormat};
use cooccur_core::output::{export_report, write_report};
use cooccur_core::CooccurAnalyzer;

/// Main entry point for the cooccur CLI application.
///
/// Parses command-line arguments, runs the co-occurrence analysis, and
/// writes the community report in the requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("cooccur")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find frequently co-occurring taxon communities")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("DIR")
                .required(true)
                .help("Directory of per-species .xml files"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: tsv, csv")
                .default_value("tsv"),
        )
        .arg(
            Arg::new("max-combo-size")
                .short('m')
                .long("max-combo-size")
                .value_name("SIZE")
                .help("Maximum combination size (at least 2)")
                .default_value("5"),
        )
        .arg(
            Arg::new("top-n")
                .short('n')
                .long("top-n")
                .value_name("COUNT")
                .help("Number of top combinations to report")
                .default_value("1000"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress progress messages"),
        )
        .get_matches();

    let max_combo_size: usize = matches
        .get_one::<String>("max-combo-size")
        .unwrap()
        .parse()
        .map_err(|_| "Invalid maximum combination size")?;
    if max_combo_size < 2 {
        return Err("Maximum combination size must be at least 2".into());
    }

    let top_n: usize = matches
        .get_one::<String>("top-n")
        .unwrap()
        .parse()
        .map_err(|_| "Invalid top-n count")?;

    let output_format = match matches.get_one::<String>("format").unwrap().as_str() {
        "tsv" => ReportFormat::Tsv,
        "csv" => ReportFormat::Csv,
        _ => return Err("Invalid output format".into()),
    };

    let quiet = matches.get_flag("quiet");
    let config = CooccurConfig {
        max_combo_size,
        top_n,
        quiet,
        output_format,
    };

    let analyzer = CooccurAnalyzer::new(config);
    let input_dir = matches.get_one::<String>("input").unwrap();
    let results = analyzer.analyze_dir(Path::new(input_dir))?;
    let rows = results.report_rows();

    if let Some(output_file) = matches.get_one::<String>("output") {
        export_report(Path::new(output_file), &rows, output_format)?;
    } else {
        let mut writer = BufWriter::new(io::stdout());
        write_report(&mut writer, &rows, output_format)?;
        writer.flush()?;
    }

    if !quiet {
        eprintln!(
            "Analysis complete! Reported {} communities from {} distinct combinations.",
            results.ranked.len(),
            results.run_info.num_combinations
        );
        if results.run_info.num_record_sets == 1 {
            eprintln!(
                "Note: single record set; all counts are 1 and ranking is lexicographic."
            );
        }
    }

    Ok(())
}
