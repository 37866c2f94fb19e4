//! File discovery and loading for style documents.
//!
//! # Example
//!
//! ```ignore
//! use geostyle::discovery::{discover_paths, load_styles};
//!
//! let scan = discover_paths(&["./styles".into()]);
//! for loaded in load_styles(&scan) {
//!     println!("{}: {}", loaded.path.display(), loaded.result.is_ok());
//! }
//! ```

mod loader;
mod scanner;

use std::path::PathBuf;

pub use loader::{load_style_file, load_styles, LoadedStyle};
pub use scanner::{is_style_file, scan_directory, scan_paths, ScanResult, STYLE_EXTENSIONS};

/// Discover style files from command-line paths, defaulting to the current
/// directory when none are given.
pub fn discover_paths(paths: &[PathBuf]) -> ScanResult {
    if paths.is_empty() {
        scan_directory(&PathBuf::from("."))
    } else {
        scan_paths(paths)
    }
}
