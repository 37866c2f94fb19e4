//! Style document loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StyleError};
use crate::parser::{parse_style, ParsedStyle};

use super::scanner::ScanResult;

/// Outcome of loading one discovered file.
#[derive(Debug)]
pub struct LoadedStyle {
    pub path: PathBuf,
    pub result: Result<ParsedStyle>,
}

/// Read and parse a single style file.
pub fn load_style_file(path: &Path) -> Result<ParsedStyle> {
    let content = fs::read_to_string(path).map_err(|e| StyleError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_style(&content)
}

/// Load every discovered style file.
///
/// Failures are kept per file so one broken document does not hide the
/// diagnostics of the others.
pub fn load_styles(scan: &ScanResult) -> Vec<LoadedStyle> {
    scan.styles
        .iter()
        .map(|path| LoadedStyle {
            path: path.clone(),
            result: load_style_file(path),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::scan_directory;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_style_file(Path::new("/nonexistent/a.style.yaml")).unwrap_err();
        assert!(matches!(err, StyleError::Io { .. }));
    }

    #[test]
    fn test_load_styles_keeps_failures_per_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("a.style.yaml"),
            "name: a\nsymbolizers:\n  - fill: red\n",
        )
        .unwrap();
        fs::write(dir.path().join("b.style.yaml"), "name: b\n").unwrap();

        let loaded = load_styles(&scan_directory(dir.path()));
        assert_eq!(loaded.len(), 2);
        assert!(loaded[0].result.is_ok());
        assert!(matches!(loaded[1].result, Err(StyleError::Parse { .. })));
    }
}
