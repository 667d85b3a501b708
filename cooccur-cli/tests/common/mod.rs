#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;

/// Create per-species `.xml` files for the given taxa inside `dir`.
pub fn make_species_dir(dir: &Path, taxa: &[&str]) {
    for taxon in taxa {
        fs::write(dir.join(format!("{taxon}.xml")), "<model/>").unwrap();
    }
}

/// Runs the cooccur CLI with the given arguments.
pub fn run_cooccur(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("cooccur").unwrap();
    cmd.args(args);
    cmd
}
