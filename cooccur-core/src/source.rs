use std::fs;
use std::path::Path;

use crate::types::CooccurError;

/// Read the taxon vocabulary from a directory of per-species `.xml` files.
///
/// Each `.xml` file name (minus the extension) is one taxon identifier; file
/// contents are never parsed. Identifiers are returned sorted ascending and
/// deduplicated for determinism.
///
/// # Errors
///
/// Returns [`CooccurError::InvalidSource`] if the path does not exist or is
/// not a readable directory.
pub fn read_taxa_from_dir(path: &Path) -> Result<Vec<String>, CooccurError> {
    let entries = fs::read_dir(path).map_err(|_| CooccurError::InvalidSource {
        path: path.to_path_buf(),
    })?;

    let mut taxa = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let entry_path = entry.path();
        if entry_path.extension().and_then(|e| e.to_str()) != Some("xml") {
            continue;
        }
        if let Some(stem) = entry_path.file_stem().and_then(|s| s.to_str()) {
            taxa.push(stem.to_string());
        }
    }

    taxa.sort();
    taxa.dedup();
    Ok(taxa)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_read_taxa_from_dir_basic() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zeta.xml", "alpha.xml", "mid.xml"] {
            fs::write(dir.path().join(name), "<model/>").unwrap();
        }

        let taxa = read_taxa_from_dir(dir.path()).unwrap();
        assert_eq!(taxa, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_read_taxa_from_dir_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("species.xml"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("communities.tsv"), "").unwrap();
        fs::create_dir(dir.path().join("nested.xml")).unwrap();

        let taxa = read_taxa_from_dir(dir.path()).unwrap();
        assert_eq!(taxa, ["species"]);
    }

    #[test]
    fn test_read_taxa_from_dir_empty() {
        let dir = tempfile::tempdir().unwrap();
        let taxa = read_taxa_from_dir(dir.path()).unwrap();
        assert!(taxa.is_empty());
    }

    #[test]
    fn test_read_taxa_from_dir_missing_path() {
        let result = read_taxa_from_dir(Path::new("/no/such/directory"));
        match result {
            Err(CooccurError::InvalidSource { path }) => {
                assert_eq!(path, Path::new("/no/such/directory"));
            }
            other => panic!("Expected InvalidSource for missing dir, got {other:?}"),
        }
    }
}
