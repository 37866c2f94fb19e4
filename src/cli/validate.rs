//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover_paths, load_styles};
use crate::error::{Result, StyleError};
use crate::output::{display_path, plural, Printer};
use crate::validation::{
    print_diagnostics, print_summary, validate_document, Diagnostic, ValidationResult,
};

/// Check style documents for errors and suspicious values
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Style files or directories to validate (defaults to the current directory)
    pub paths: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let scan = discover_paths(&args.paths);
    let mut total = ValidationResult::new();

    for path in &scan.missing {
        total.push(Diagnostic::error(
            "geostyle::io",
            format!("{} does not exist", display_path(path)),
        ));
    }

    if scan.is_empty() && scan.missing.is_empty() {
        printer.warning("Skipped", "no style files found");
        return Ok(());
    }

    printer.status(
        "Checking",
        &plural(scan.total(), "style file", "style files"),
    );

    for loaded in load_styles(&scan) {
        let display = display_path(&loaded.path);
        let mut result = match loaded.result {
            Ok(mut parsed) => {
                parsed.diagnostics.merge(validate_document(&parsed.document));
                parsed.diagnostics
            }
            Err(e) => ValidationResult::from(Diagnostic::from_error(&e)),
        };

        if args.strict {
            result = result.into_strict();
        }

        if result.has_errors() {
            printer.error("Invalid", &display);
        } else if result.has_warnings() {
            printer.warning("Checked", &display);
        } else {
            printer.success("Checked", &display);
        }
        print_diagnostics(&result, printer);
        total.merge(result);
    }

    print_summary(&total, printer);

    match total.error_count() {
        0 => Ok(()),
        errors => Err(StyleError::ValidationFailed { errors }),
    }
}
