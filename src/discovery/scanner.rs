//! File system scanner for discovering style documents.
//!
//! Recursively scans directories to find all `.style.yaml` and
//! `.style.yml` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File name suffixes that mark a style document.
pub const STYLE_EXTENSIONS: [&str; 2] = [".style.yaml", ".style.yml"];

/// Result of scanning paths for style documents.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered style files, sorted within each scanned directory.
    pub styles: Vec<PathBuf>,
    /// Explicitly named paths that do not exist.
    pub missing: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.styles.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.styles.extend(other.styles);
        self.missing.extend(other.missing);
    }
}

/// Scan a directory for style files.
pub fn scan_directory(root: &Path) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if is_style_file(path) {
            result.styles.push(path.to_path_buf());
        }
    }

    result
}

/// Scan a mix of files and directories.
///
/// Files given explicitly are kept whatever their extension; directories
/// only contribute files with a style extension.
pub fn scan_paths(paths: &[PathBuf]) -> ScanResult {
    let mut result = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            result.merge(scan_directory(path));
        } else if path.is_file() {
            result.styles.push(path.clone());
        } else {
            result.missing.push(path.clone());
        }
    }

    result
}

/// Check whether a path names a style document.
pub fn is_style_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| STYLE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_style_file() {
        assert!(is_style_file(Path::new("cities.style.yaml")));
        assert!(is_style_file(Path::new("roads.style.yml")));
        assert!(is_style_file(Path::new("/abs/path/water.style.yaml")));
        assert!(!is_style_file(Path::new("cities.yaml")));
        assert!(!is_style_file(Path::new("readme.md")));
        assert!(!is_style_file(Path::new("style.yaml")));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let result = scan_directory(dir.path());

        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_scan_recursive_and_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("points")).unwrap();

        fs::write(dir.path().join("roads.style.yml"), "name: roads").unwrap();
        fs::write(dir.path().join("points/cities.style.yaml"), "name: cities").unwrap();
        fs::write(dir.path().join("notes.yaml"), "x: 1").unwrap();

        let result = scan_directory(dir.path());
        assert_eq!(result.total(), 2);
        assert!(result.styles[0].ends_with("points/cities.style.yaml"));
        assert!(result.styles[1].ends_with("roads.style.yml"));
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let result = scan_directory(Path::new("/nonexistent/path"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_paths_mixed() {
        let dir = tempdir().unwrap();
        let explicit = dir.path().join("custom.yaml");
        fs::write(&explicit, "name: custom").unwrap();
        fs::create_dir_all(dir.path().join("styles")).unwrap();
        fs::write(dir.path().join("styles/a.style.yaml"), "name: a").unwrap();

        let missing = dir.path().join("missing.style.yaml");
        let result = scan_paths(&[explicit.clone(), dir.path().join("styles"), missing.clone()]);

        assert_eq!(result.styles.len(), 2);
        assert_eq!(result.styles[0], explicit);
        assert_eq!(result.missing, vec![missing]);
    }
}
