//! Style document parser.
//!
//! Parses `.style.yaml` files into a [`StyleDocument`]. Option names are
//! matched against a fixed set per style kind; anything else is skipped with
//! a warning so that documents written for richer renderers still load.
//!
//! ```yaml
//! name: cities
//! rules:
//!   - name: capitals
//!     symbolizers:
//!       - shape: { color: red, size: 8, type: star, rotation: $heading }
//!       - stroke: { color: "#333", width: 2, dash: [4, 2] }
//!       - fill: { color: [200, 200, 255], opacity: 0.5 }
//! ```

use serde_yaml::{Mapping, Value};

use crate::error::{Result, StyleError};
use crate::rule::Rule;
use crate::style::{build_rule, Fill, Shape, ShapeOptions, Stroke, Style};
use crate::types::{ColourInput, Rotation};
use crate::validation::{Diagnostic, ValidationResult};

const UNKNOWN_KEY: &str = "geostyle::style::unknown-key";
const UNKNOWN_KIND: &str = "geostyle::style::unknown-kind";

const DOCUMENT_KEYS: [&str; 3] = ["name", "rules", "symbolizers"];
const RULE_KEYS: [&str; 2] = ["name", "symbolizers"];
const STROKE_KEYS: [&str; 8] = [
    "color", "colour", "width", "opacity", "dash", "cap", "join", "linecap",
];
const FILL_KEYS: [&str; 3] = ["color", "colour", "opacity"];

/// A named collection of rules.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDocument {
    pub name: String,
    pub rules: Vec<StyleRule>,
}

/// The styles making up one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub name: Option<String>,
    pub styles: Vec<Style>,
}

impl StyleRule {
    /// Build the renderer rule for these styles.
    pub fn to_rule(&self) -> Rule {
        build_rule(self.name.as_deref(), &self.styles)
    }
}

impl StyleDocument {
    /// Build every rule in document order.
    pub fn to_rules(&self) -> Vec<Rule> {
        self.rules.iter().map(StyleRule::to_rule).collect()
    }

    /// Find a rule by name.
    pub fn rule(&self, name: &str) -> Option<&StyleRule> {
        self.rules.iter().find(|r| r.name.as_deref() == Some(name))
    }
}

/// A parsed document together with the warnings raised while reading it.
#[derive(Debug)]
pub struct ParsedStyle {
    pub document: StyleDocument,
    pub diagnostics: ValidationResult,
}

/// Parse a YAML style document.
pub fn parse_style(source: &str) -> Result<ParsedStyle> {
    let value: Value = serde_yaml::from_str(source).map_err(|e| StyleError::Parse {
        message: format!("Invalid YAML in style document: {}", e),
        help: None,
    })?;

    let Value::Mapping(map) = value else {
        return Err(StyleError::Parse {
            message: "Style document must be a YAML mapping".to_string(),
            help: Some("Start the document with name: my-style".to_string()),
        });
    };

    let mut loader = Loader::default();
    let document = loader.document(&map)?;

    Ok(ParsedStyle {
        document,
        diagnostics: loader.diagnostics,
    })
}

#[derive(Default)]
struct Loader {
    diagnostics: ValidationResult,
}

impl Loader {
    fn document(&mut self, map: &Mapping) -> Result<StyleDocument> {
        let name = get(map, "name")
            .and_then(Value::as_str)
            .ok_or_else(|| StyleError::Parse {
                message: "Style document is missing a name".to_string(),
                help: Some("Add name: my-style at the top of the document".to_string()),
            })?
            .to_string();

        self.check_keys(map, &DOCUMENT_KEYS, &name);

        let rules = match (get(map, "rules"), get(map, "symbolizers")) {
            (Some(rules), _) => {
                let seq = expect_sequence(rules, "rules")?;
                let mut parsed = Vec::with_capacity(seq.len());
                for (i, rule) in seq.iter().enumerate() {
                    let context = format!("{}.rules[{}]", name, i);
                    parsed.push(self.rule(rule, &context)?);
                }
                parsed
            }
            (None, Some(symbolizers)) => vec![StyleRule {
                name: None,
                styles: self.symbolizers(symbolizers, &name)?,
            }],
            (None, None) => {
                return Err(StyleError::Parse {
                    message: format!("Style '{}' has no rules", name),
                    help: Some("Add a rules: list or a symbolizers: list".to_string()),
                });
            }
        };

        Ok(StyleDocument { name, rules })
    }

    fn rule(&mut self, value: &Value, context: &str) -> Result<StyleRule> {
        let map = expect_mapping(value, context)?;
        self.check_keys(map, &RULE_KEYS, context);

        let name = get(map, "name").and_then(Value::as_str).map(str::to_string);
        let styles = match get(map, "symbolizers") {
            Some(symbolizers) => self.symbolizers(symbolizers, context)?,
            None => Vec::new(),
        };

        Ok(StyleRule { name, styles })
    }

    fn symbolizers(&mut self, value: &Value, context: &str) -> Result<Vec<Style>> {
        let seq = expect_sequence(value, &format!("{}.symbolizers", context))?;
        let mut styles = Vec::with_capacity(seq.len());

        for (i, entry) in seq.iter().enumerate() {
            let context = format!("{}.symbolizers[{}]", context, i);
            let map = expect_mapping(entry, &context)?;

            for (kind, body) in map {
                let Some(kind) = kind.as_str() else {
                    continue;
                };
                let context = format!("{}.{}", context, kind);
                match kind {
                    "shape" => styles.push(Style::Shape(self.shape(body, &context)?)),
                    "stroke" => styles.push(Style::Stroke(self.stroke(body, &context)?)),
                    "fill" => styles.push(Style::Fill(self.fill(body, &context)?)),
                    other => self.diagnostics.push(
                        Diagnostic::warning(
                            UNKNOWN_KIND,
                            format!("{}: unknown symbolizer '{}' skipped", context, other),
                        )
                        .with_help("Supported symbolizers: shape, stroke, fill"),
                    ),
                }
            }
        }

        Ok(styles)
    }

    fn shape(&mut self, value: &Value, context: &str) -> Result<Shape> {
        let map = expect_mapping(value, context)?;
        let mut options = ShapeOptions::default();

        for (key, value) in map {
            let Some(key) = key.as_str() else {
                continue;
            };
            match key {
                "color" | "colour" => options.colour = Some(colour_input(value)?),
                "size" => options.size = Some(expect_number(value, context, key)?),
                "type" => options.shape_type = Some(expect_str(value, context, key)?.to_string()),
                "opacity" => options.opacity = Some(expect_number(value, context, key)?),
                "rotation" => options.rotation = Some(rotation(value, context)?),
                "stroke" => {
                    options.stroke = Some(self.stroke(value, &format!("{}.stroke", context))?)
                }
                other => self.ignored(context, other, &ShapeOptions::KEYS),
            }
        }

        Shape::from_options(options)
    }

    fn stroke(&mut self, value: &Value, context: &str) -> Result<Stroke> {
        // Shorthand: `stroke: black`
        if value.is_string() || value.is_sequence() {
            return Stroke::new(colour_input(value)?, 1.0);
        }

        let map = expect_mapping(value, context)?;
        let mut stroke = match get_any(map, &["color", "colour"]) {
            Some(colour) => Stroke::new(colour_input(colour)?, 1.0)?,
            None => Stroke::default(),
        };

        for (key, value) in map {
            let Some(key) = key.as_str() else {
                continue;
            };
            match key {
                "color" | "colour" => {}
                "width" => stroke = stroke.with_width(expect_number(value, context, key)?),
                "opacity" => stroke = stroke.with_opacity(expect_number(value, context, key)?),
                "dash" => stroke = stroke.with_dash(dash_pattern(value, context)?),
                "cap" | "linecap" => stroke = stroke.with_cap(expect_str(value, context, key)?),
                "join" => stroke = stroke.with_join(expect_str(value, context, key)?),
                other => self.ignored(context, other, &STROKE_KEYS),
            }
        }

        Ok(stroke)
    }

    fn fill(&mut self, value: &Value, context: &str) -> Result<Fill> {
        // Shorthand: `fill: "#eee"`
        if value.is_string() || value.is_sequence() {
            return Fill::new(colour_input(value)?);
        }

        let map = expect_mapping(value, context)?;
        let mut fill = match get_any(map, &["color", "colour"]) {
            Some(colour) => Fill::new(colour_input(colour)?)?,
            None => Fill::default(),
        };

        for (key, value) in map {
            let Some(key) = key.as_str() else {
                continue;
            };
            match key {
                "color" | "colour" => {}
                "opacity" => fill = fill.with_opacity(expect_number(value, context, key)?),
                other => self.ignored(context, other, &FILL_KEYS),
            }
        }

        Ok(fill)
    }

    fn check_keys(&mut self, map: &Mapping, known: &[&str], context: &str) {
        for key in map.keys().filter_map(Value::as_str) {
            if !known.contains(&key) {
                self.ignored(context, key, known);
            }
        }
    }

    fn ignored(&mut self, context: &str, key: &str, known: &[&str]) {
        self.diagnostics.push(
            Diagnostic::warning(
                UNKNOWN_KEY,
                format!("{}: unknown option '{}' ignored", context, key),
            )
            .with_help(format!("Known options: {}", known.join(", "))),
        );
    }
}

fn get<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key)
}

fn get_any<'a>(map: &'a Mapping, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| map.get(*key))
}

fn expect_mapping<'a>(value: &'a Value, context: &str) -> Result<&'a Mapping> {
    value.as_mapping().ok_or_else(|| StyleError::Parse {
        message: format!("{}: expected a mapping", context),
        help: None,
    })
}

fn expect_sequence<'a>(value: &'a Value, context: &str) -> Result<&'a Vec<Value>> {
    value.as_sequence().ok_or_else(|| StyleError::Parse {
        message: format!("{}: expected a list", context),
        help: None,
    })
}

fn expect_number(value: &Value, context: &str, key: &str) -> Result<f64> {
    value.as_f64().ok_or_else(|| StyleError::Parse {
        message: format!("{}: '{}' must be a number", context, key),
        help: None,
    })
}

fn expect_str<'a>(value: &'a Value, context: &str, key: &str) -> Result<&'a str> {
    value.as_str().ok_or_else(|| StyleError::Parse {
        message: format!("{}: '{}' must be a string", context, key),
        help: None,
    })
}

/// Read a colour given as a string or an `[r, g, b]` list.
fn colour_input(value: &Value) -> Result<ColourInput> {
    match value {
        Value::String(s) => Ok(ColourInput::from(s.as_str())),
        Value::Sequence(seq) if seq.len() == 3 => {
            let mut channels = [0u8; 3];
            for (slot, item) in channels.iter_mut().zip(seq) {
                *slot = item
                    .as_u64()
                    .and_then(|n| u8::try_from(n).ok())
                    .ok_or_else(|| StyleError::invalid_colour(format!("{:?}", seq)))?;
            }
            Ok(ColourInput::from(channels))
        }
        other => Err(StyleError::invalid_colour(format!("{:?}", other))),
    }
}

/// Numbers become constant rotations; strings are parsed as expressions.
fn rotation(value: &Value, context: &str) -> Result<Rotation> {
    match value {
        Value::Number(_) => Ok(Rotation::Constant(expect_number(value, context, "rotation")?)),
        Value::String(s) => Rotation::parse(s),
        _ => Err(StyleError::Parse {
            message: format!("{}: 'rotation' must be a number or an expression", context),
            help: Some("Use rotation: 45 or rotation: $heading".to_string()),
        }),
    }
}

fn dash_pattern(value: &Value, context: &str) -> Result<Vec<f64>> {
    match value {
        Value::Sequence(seq) => seq
            .iter()
            .map(|v| expect_number(v, context, "dash"))
            .collect(),
        // `dash: "4 2"`
        Value::String(s) => s
            .split_whitespace()
            .map(|part| {
                part.parse::<f64>().map_err(|_| StyleError::Parse {
                    message: format!("{}: invalid dash value '{}'", context, part),
                    help: None,
                })
            })
            .collect(),
        _ => Err(StyleError::Parse {
            message: format!("{}: 'dash' must be a list of numbers", context),
            help: Some("Use dash: [4, 2]".to_string()),
        }),
    }
}
