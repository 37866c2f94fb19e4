//! Validation for style documents.
//!
//! Runs a suite of checks against a parsed document and reports errors
//! and warnings. Used by `geostyle validate` and, for warnings only, by
//! `geostyle rule`.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::parser::StyleDocument;

/// Run all validation checks against a style document.
pub fn validate_document(document: &StyleDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty_rules(document));
    result.merge(checks::check_duplicate_rule_names(document));
    result.merge(checks::check_shape_types(document));
    result.merge(checks::check_sizes(document));
    result.merge(checks::check_opacity(document));
    result.merge(checks::check_rotation(document));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.is_error());
        eprintln!("  {}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    {} {}", printer.dim("help:"), help);
        }
    }
}

/// Print the one-line verdict that ends a validation run.
pub fn print_summary(result: &ValidationResult, printer: &Printer) {
    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!("{} error(s), {} warning(s)", errors, warnings),
        );
    } else if warnings > 0 {
        printer.warning("Passed", &format!("{} warning(s)", warnings));
    } else {
        printer.success("Passed", "no issues");
    }
}
