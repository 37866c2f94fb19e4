//! Rule command implementation.
//!
//! Loads one style document and prints the rules it produces as JSON.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::load_style_file;
use crate::error::{Result, StyleError};
use crate::output::{display_path, plural, print_json, Printer};
use crate::validation::{print_diagnostics, validate_document};

/// Build the rules of a style document and print them as JSON
#[derive(Args, Debug)]
pub struct RuleArgs {
    /// Style document to load
    #[arg(required = true)]
    pub file: PathBuf,

    /// Only print the rule with this name
    #[arg(long)]
    pub rule: Option<String>,

    /// Skip the validation checks and only report load warnings
    #[arg(long)]
    pub no_check: bool,
}

pub fn run(args: RuleArgs, printer: &Printer) -> Result<()> {
    let display = display_path(&args.file);
    printer.status("Loading", &display);

    let mut parsed = load_style_file(&args.file)?;
    if !args.no_check {
        parsed
            .diagnostics
            .merge(validate_document(&parsed.document));
    }
    print_diagnostics(&parsed.diagnostics, printer);

    let document = &parsed.document;
    let rules = match &args.rule {
        Some(name) => {
            let rule = document.rule(name).ok_or_else(|| {
                let names: Vec<_> = document
                    .rules
                    .iter()
                    .filter_map(|r| r.name.as_deref())
                    .collect();
                StyleError::Parse {
                    message: format!("No rule named '{}' in {}", name, display),
                    help: Some(if names.is_empty() {
                        "This document has no named rules".to_string()
                    } else {
                        format!("Available rules: {}", names.join(", "))
                    }),
                }
            })?;
            vec![rule.to_rule()]
        }
        None => document.to_rules(),
    };

    print_json(&rules)?;
    printer.success(
        "Built",
        &format!("{} from '{}'", plural(rules.len(), "rule", "rules"), document.name),
    );

    Ok(())
}
