//! Validation checks for style documents.
//!
//! Each check takes a `&StyleDocument` and returns a `ValidationResult`.
//! Nothing here rejects a document; the checks flag values that load fine
//! but will not draw what the author probably meant.

use std::collections::HashSet;

use crate::parser::{StyleDocument, StyleRule};
use crate::style::{ShapeType, Stroke, Style};
use crate::types::Rotation;

use super::diagnostic::{Diagnostic, ValidationResult};

fn rule_label(document: &StyleDocument, index: usize, rule: &StyleRule) -> String {
    match &rule.name {
        Some(name) => format!("{}/{}", document.name, name),
        None => format!("{}/#{}", document.name, index),
    }
}

/// The stroke a style carries, including a shape's outline.
fn stroke_of(style: &Style) -> Option<&Stroke> {
    match style {
        Style::Stroke(stroke) => Some(stroke),
        Style::Shape(shape) => shape.stroke(),
        Style::Fill(_) => None,
    }
}

/// Check for rules that draw nothing.
pub fn check_empty_rules(document: &StyleDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (i, rule) in document.rules.iter().enumerate() {
        if rule.styles.is_empty() {
            result.push(
                Diagnostic::warning(
                    "geostyle::validate::empty-rule",
                    format!("Rule '{}' has no symbolizers", rule_label(document, i, rule)),
                )
                .with_help("Add a shape, stroke or fill entry under symbolizers"),
            );
        }
    }

    result
}

/// Check for rules sharing a name.
pub fn check_duplicate_rule_names(document: &StyleDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = HashSet::new();

    for rule in &document.rules {
        let Some(name) = rule.name.as_deref() else {
            continue;
        };
        if !seen.insert(name) {
            result.push(
                Diagnostic::warning(
                    "geostyle::validate::duplicate-rule",
                    format!("Rule name '{}' is used more than once in '{}'", name, document.name),
                )
                .with_help("Only the first rule with a given name can be selected with --rule"),
            );
        }
    }

    result
}

/// Check for marker names renderers are unlikely to know.
pub fn check_shape_types(document: &StyleDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (i, rule) in document.rules.iter().enumerate() {
        for style in &rule.styles {
            let Style::Shape(shape) = style else {
                continue;
            };
            if ShapeType::from_name(shape.shape_type()).is_none() {
                let known: Vec<_> = ShapeType::ALL.iter().map(|t| t.as_str()).collect();
                result.push(
                    Diagnostic::warning(
                        "geostyle::validate::unknown-shape-type",
                        format!(
                            "Rule '{}' uses unknown shape type '{}'",
                            rule_label(document, i, rule),
                            shape.shape_type()
                        ),
                    )
                    .with_help(format!("Well-known shape types: {}", known.join(", "))),
                );
            }
        }
    }

    result
}

/// Check for marker sizes and stroke widths that draw nothing.
pub fn check_sizes(document: &StyleDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (i, rule) in document.rules.iter().enumerate() {
        let label = rule_label(document, i, rule);
        for style in &rule.styles {
            if let Style::Shape(shape) = style {
                if shape.size().is_nan() || shape.size() <= 0.0 {
                    result.warning(
                        "geostyle::validate::size",
                        format!("Rule '{}' has shape size {}", label, shape.size()),
                    );
                }
            }
            if let Some(stroke) = stroke_of(style) {
                if stroke.width().is_nan() || stroke.width() <= 0.0 {
                    result.warning(
                        "geostyle::validate::size",
                        format!("Rule '{}' has stroke width {}", label, stroke.width()),
                    );
                }
            }
        }
    }

    result
}

/// Check for opacities outside `0.0..=1.0`.
pub fn check_opacity(document: &StyleDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (i, rule) in document.rules.iter().enumerate() {
        let label = rule_label(document, i, rule);
        for style in &rule.styles {
            let mut values = Vec::with_capacity(2);
            match style {
                Style::Shape(shape) => values.push(("shape", shape.opacity())),
                Style::Fill(fill) => values.push(("fill", fill.opacity())),
                Style::Stroke(_) => {}
            }
            if let Some(stroke) = stroke_of(style) {
                values.push(("stroke", stroke.opacity()));
            }

            for (kind, opacity) in values {
                if !(0.0..=1.0).contains(&opacity) {
                    result.push(
                        Diagnostic::warning(
                            "geostyle::validate::opacity",
                            format!("Rule '{}' has {} opacity {}", label, kind, opacity),
                        )
                        .with_help("Opacity runs from 0.0 (transparent) to 1.0 (opaque)"),
                    );
                }
            }
        }
    }

    result
}

/// Check for constant rotations that will not be written.
pub fn check_rotation(document: &StyleDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (i, rule) in document.rules.iter().enumerate() {
        for style in &rule.styles {
            let Style::Shape(shape) = style else {
                continue;
            };
            if let Some(Rotation::Constant(degrees)) = shape.rotation() {
                if degrees.is_nan() || *degrees <= 0.0 {
                    result.push(
                        Diagnostic::warning(
                            "geostyle::validate::rotation",
                            format!(
                                "Rule '{}' has rotation {} which is ignored",
                                rule_label(document, i, rule),
                                degrees
                            ),
                        )
                        .with_help("Only positive rotations are applied; use e.g. 330 instead of -30"),
                    );
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Fill, Shape};

    fn document(rules: Vec<StyleRule>) -> StyleDocument {
        StyleDocument {
            name: "test".to_string(),
            rules,
        }
    }

    fn rule(name: Option<&str>, styles: Vec<Style>) -> StyleRule {
        StyleRule {
            name: name.map(str::to_string),
            styles,
        }
    }

    #[test]
    fn test_empty_rule_label_uses_index_without_name() {
        let doc = document(vec![rule(None, vec![])]);
        let result = check_empty_rules(&doc);
        assert_eq!(result.warning_count(), 1);
        assert!(result.iter().next().unwrap().message.contains("test/#0"));
    }

    #[test]
    fn test_duplicate_names_ignore_unnamed() {
        let fill = Style::from(Fill::default());
        let doc = document(vec![
            rule(None, vec![fill.clone()]),
            rule(None, vec![fill.clone()]),
            rule(Some("a"), vec![fill.clone()]),
        ]);
        assert!(check_duplicate_rule_names(&doc).is_ok());

        let doc = document(vec![
            rule(Some("a"), vec![fill.clone()]),
            rule(Some("a"), vec![fill]),
        ]);
        assert_eq!(check_duplicate_rule_names(&doc).warning_count(), 1);
    }

    #[test]
    fn test_known_shape_types_pass() {
        let styles = ShapeType::ALL
            .iter()
            .map(|t| Style::from(Shape::new(None, 4.0, *t).unwrap()))
            .collect();
        let doc = document(vec![rule(Some("all"), styles)]);
        assert!(check_shape_types(&doc).is_ok());
    }

    #[test]
    fn test_zero_stroke_width_inside_shape() {
        let shape = Shape::default().with_stroke(Stroke::new("black", 0.0).unwrap());
        let doc = document(vec![rule(Some("a"), vec![Style::from(shape)])]);
        let result = check_sizes(&doc);
        assert_eq!(result.warning_count(), 1);
        assert!(result.iter().next().unwrap().message.contains("stroke width"));
    }

    #[test]
    fn test_default_shape_opacity_is_in_range() {
        let doc = document(vec![rule(Some("a"), vec![Style::from(Shape::default())])]);
        assert!(check_opacity(&doc).is_ok());
    }

    #[test]
    fn test_rotation_expression_not_flagged() {
        let shape = Shape::default().with_rotation(Rotation::parse("$heading").unwrap());
        let doc = document(vec![rule(Some("a"), vec![Style::from(shape)])]);
        assert!(check_rotation(&doc).is_ok());

        let shape = Shape::default().with_rotation(0.0);
        let doc = document(vec![rule(Some("a"), vec![Style::from(shape)])]);
        assert_eq!(check_rotation(&doc).warning_count(), 1);
    }
}
