#![cfg(unix)]

mod common;

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

use crate::common::make_species_dir;

fn run_batch(root: &Path, tool: &str) -> Command {
    let mut cmd = Command::cargo_bin("cooccur-batch").unwrap();
    cmd.args(["-i", root.to_str().unwrap(), "-c", tool]);
    cmd
}

/// Two nested species directories plus one directory with no .xml files.
fn make_tree(root: &Path) {
    let site1 = root.join("CK_XML").join("site1");
    let site2 = root.join("CK_XML").join("site2");
    let empty = root.join("notes");
    fs::create_dir_all(&site1).unwrap();
    fs::create_dir_all(&site2).unwrap();
    fs::create_dir_all(&empty).unwrap();
    make_species_dir(&site1, &["A", "B"]);
    make_species_dir(&site2, &["C", "D"]);
    fs::write(empty.join("readme.txt"), "not a species dir").unwrap();
}

#[test]
fn visits_every_leaf_species_directory_once() {
    let root = tempdir().unwrap();
    make_tree(root.path());

    // `true` ignores its arguments and exits 0, standing in for the tool.
    run_batch(root.path(), "true")
        .assert()
        .success()
        .stderr(predicate::str::contains("2 directories processed, 0 failed"));
}

#[test]
fn continues_past_failing_directories() {
    let root = tempdir().unwrap();
    make_tree(root.path());

    run_batch(root.path(), "false")
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 directories processed, 2 failed"));
}

#[test]
fn missing_tool_binary_is_logged_and_counted() {
    let root = tempdir().unwrap();
    make_tree(root.path());

    run_batch(root.path(), "no-such-modeling-tool")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to run no-such-modeling-tool"));
}
