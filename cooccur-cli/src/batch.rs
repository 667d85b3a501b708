//! # Cooccur Batch Driver
//!
//! Walks every leaf directory of per-species `.xml` files under a root and
//! runs an external metabolic-modeling tool once per directory to produce a
//! communities file. The driver shares no data structures with the analysis
//! core: it is process-invocation glue with a "log and continue" contract.
//!
//! ## Usage
//!
//! ```bash
//! # Run smetana over every species directory under a root
//! cooccur-batch -i /data/ysw_xml
//!
//! # Use a different tool binary
//! cooccur-batch -i /data/ysw_xml -c /opt/envs/smetana/bin/smetana
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Arg, Command};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("cooccur-batch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run an external modeling tool over each directory of species files")
        .arg(
            Arg::new("root")
                .short('i')
                .long("root")
                .value_name("DIR")
                .required(true)
                .help("Root directory to walk for species directories"),
        )
        .arg(
            Arg::new("command")
                .short('c')
                .long("command")
                .value_name("PROGRAM")
                .default_value("smetana")
                .help("External tool to invoke once per qualifying directory"),
        )
        .arg(
            Arg::new("output-name")
                .long("output-name")
                .value_name("FILE")
                .default_value("communities.tsv")
                .help("Name of the communities file the tool writes in each directory"),
        )
        .get_matches();

    let root = PathBuf::from(matches.get_one::<String>("root").unwrap());
    let program = matches.get_one::<String>("command").unwrap();
    let output_name = matches.get_one::<String>("output-name").unwrap();

    let mut species_dirs = Vec::new();
    collect_species_dirs(&root, &mut species_dirs)?;

    let mut failures = 0usize;
    for dir in &species_dirs {
        eprintln!("Processing directory: {}", dir.display());
        // One invocation per directory; on failure log and move on.
        if let Err(message) = run_tool(program, dir, output_name) {
            eprintln!("  {message}");
            failures += 1;
        }
    }

    eprintln!(
        "Batch complete: {} directories processed, {} failed.",
        species_dirs.len(),
        failures
    );
    if failures > 0 {
        process::exit(1);
    }
    Ok(())
}

/// Recursively collect directories that contain at least one `.xml` file.
fn collect_species_dirs(dir: &Path, found: &mut Vec<PathBuf>) -> std::io::Result<()> {
    let mut has_xml = false;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_species_dirs(&path, found)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("xml") {
            has_xml = true;
        }
    }
    if has_xml {
        found.push(dir.to_path_buf());
    }
    Ok(())
}

/// Run the external tool once in `dir`, passing every `.xml` file name and
/// the communities output flag.
fn run_tool(program: &str, dir: &Path, output_name: &str) -> Result<(), String> {
    let mut xml_files: Vec<String> = fs::read_dir(dir)
        .map_err(|e| format!("Failed to list {}: {e}", dir.display()))?
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("xml") {
                path.file_name().map(|n| n.to_string_lossy().into_owned())
            } else {
                None
            }
        })
        .collect();
    xml_files.sort();

    let output = process::Command::new(program)
        .args(&xml_files)
        .arg("-c")
        .arg(output_name)
        .current_dir(dir)
        .output()
        .map_err(|e| format!("Failed to run {program} in {}: {e}", dir.display()))?;

    if !output.status.success() {
        return Err(format!(
            "{program} failed in {}: {}",
            dir.display(),
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(())
}
