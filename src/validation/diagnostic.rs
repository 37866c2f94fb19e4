//! Diagnostics raised while loading and checking style documents.

use std::fmt;

use crate::error::StyleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One finding about a style document.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable code, e.g. `geostyle::style::unknown-key`.
    pub code: String,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code.into(), message.into())
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code.into(), message.into())
    }

    fn new(severity: Severity, code: String, message: String) -> Self {
        Self {
            severity,
            code,
            message,
            help: None,
        }
    }

    /// Report a document that failed to load at all.
    ///
    /// The code matches the one miette shows for the same error.
    pub fn from_error(error: &StyleError) -> Self {
        let (code, help) = match error {
            StyleError::IoError(_) | StyleError::Io { .. } => ("geostyle::io", None),
            StyleError::InvalidColorFormat { help, .. } => ("geostyle::colour", help.clone()),
            StyleError::Decode { .. } => ("geostyle::decode", None),
            StyleError::Parse { help, .. } => ("geostyle::parse", help.clone()),
            StyleError::ValidationFailed { .. } => ("geostyle::validate", None),
        };
        Self {
            help,
            ..Self::error(code, error.to_string())
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

/// Diagnostics in the order they were raised.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn error(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.push(Diagnostic::error(code, message));
    }

    pub fn warning(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.push(Diagnostic::warning(code, message));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// True when nothing at all was reported.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Turn every warning into an error, for `--strict` runs.
    pub fn into_strict(self) -> Self {
        let diagnostics = self
            .diagnostics
            .into_iter()
            .map(|d| Diagnostic {
                severity: Severity::Error,
                ..d
            })
            .collect();
        Self { diagnostics }
    }

    /// Highest severity present.
    pub fn worst(&self) -> Option<Severity> {
        self.diagnostics.iter().map(|d| d.severity).max()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

impl From<Diagnostic> for ValidationResult {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl Extend<Diagnostic> for ValidationResult {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    #[test]
    fn test_nothing_reported() {
        let result = ValidationResult::new();
        assert!(result.is_ok());
        assert_eq!(result.worst(), None);
        assert_eq!((result.error_count(), result.warning_count()), (0, 0));
    }

    #[test]
    fn test_counts_by_severity() {
        let mut result = ValidationResult::new();
        result.warning("geostyle::style::unknown-key", "glow ignored");
        result.warning("geostyle::validate::opacity", "opacity 2");
        result.error("geostyle::colour", "bad colour");

        assert_eq!(result.warning_count(), 2);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.worst(), Some(Severity::Error));
        assert!(!result.is_ok());
    }

    #[test]
    fn test_strict_promotes_warnings_in_order() {
        let mut result = ValidationResult::from(Diagnostic::warning("geostyle::a", "first"));
        result.extend([Diagnostic::warning("geostyle::b", "second")]);

        let strict = result.into_strict();
        assert_eq!(strict.error_count(), 2);
        let codes: Vec<_> = strict.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec!["geostyle::a", "geostyle::b"]);
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::warning("geostyle::style::unknown-key", "ignored key 'colr'")
            .with_help("Known options: color");
        assert_eq!(
            d.to_string(),
            "warning[geostyle::style::unknown-key]: ignored key 'colr'"
        );
    }

    #[test]
    fn test_from_error_keeps_help() {
        let err = Colour::parse("#12").unwrap_err();
        let d = Diagnostic::from_error(&err);

        assert!(d.is_error());
        assert_eq!(d.code, "geostyle::colour");
        assert!(d.message.contains("#12"));
        assert!(d.help.is_some());
    }
}
