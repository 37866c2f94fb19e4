//! Style expression parsing.
//!
//! Expressions are the values written into a rule: literals for fixed
//! properties and computed values that a renderer evaluates per feature.
//! - `45`, `-0.5` - numeric literal
//! - `'circle'` - text literal
//! - `$angle` or `angle` - feature property reference
//! - `mul($angle, 2)` - function call (arguments may nest)

use std::fmt;

use serde::Serialize;

use crate::error::{Result, StyleError};

/// A parsed style expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Expression {
    /// A numeric literal: `45`
    Number(f64),
    /// A text literal: `'circle'`
    Text(String),
    /// A feature property reference: `$angle`
    Property(String),
    /// A function call: `mul($angle, 2)`
    Function { name: String, args: Vec<Expression> },
}

impl Expression {
    /// Numeric literal.
    pub fn number(value: f64) -> Self {
        Expression::Number(value)
    }

    /// Text literal.
    pub fn text(value: impl Into<String>) -> Self {
        Expression::Text(value.into())
    }

    /// Property reference.
    pub fn property(name: impl Into<String>) -> Self {
        Expression::Property(name.into())
    }

    /// Parse an expression from a string.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(StyleError::Parse {
                message: "Empty expression".to_string(),
                help: None,
            });
        }

        // Text literal
        if let Some(inner) = strip_quotes(input) {
            return Ok(Expression::Text(inner.to_string()));
        }

        // Numeric literal
        if input.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.')) {
            return input
                .parse::<f64>()
                .map(Expression::Number)
                .map_err(|_| StyleError::Parse {
                    message: format!("Invalid number: {}", input),
                    help: None,
                });
        }

        // Function call: name(args)
        if let Some(paren_pos) = input.find('(') {
            if !input.ends_with(')') {
                return Err(StyleError::Parse {
                    message: format!("Unclosed function call: {}", input),
                    help: Some("Add closing parenthesis".to_string()),
                });
            }

            let name = input[..paren_pos].trim();
            if !is_identifier(name) {
                return Err(StyleError::Parse {
                    message: format!("Invalid function name in: {}", input),
                    help: None,
                });
            }
            let args = parse_args(&input[paren_pos + 1..input.len() - 1])?;

            return Ok(Expression::Function {
                name: name.to_string(),
                args,
            });
        }

        let name = input.strip_prefix('$').unwrap_or(input);
        if is_identifier(name) {
            Ok(Expression::Property(name.to_string()))
        } else {
            Err(StyleError::Parse {
                message: format!("Invalid expression: {}", input),
                help: Some("Expected a number, 'text', $property, or function(args)".to_string()),
            })
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Text(s) => write!(f, "'{}'", s),
            Expression::Property(name) => write!(f, "${}", name),
            Expression::Function { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

fn strip_quotes(input: &str) -> Option<&str> {
    ['\'', '"'].into_iter().find_map(|q| {
        input
            .strip_prefix(q)
            .and_then(|rest| rest.strip_suffix(q))
    })
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | ':' | '-'))
}

/// Parse comma-separated arguments, handling nested parentheses and quotes.
fn parse_args(input: &str) -> Result<Vec<Expression>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(vec![]);
    }

    let mut args = Vec::new();
    let mut current = String::new();
    let mut paren_depth = 0i32;
    let mut quote: Option<char> = None;

    for c in input.chars() {
        match (c, quote) {
            (q, Some(open)) if q == open => {
                quote = None;
                current.push(c);
            }
            (_, Some(_)) => current.push(c),
            ('\'' | '"', None) => {
                quote = Some(c);
                current.push(c);
            }
            ('(', None) => {
                paren_depth += 1;
                current.push(c);
            }
            (')', None) => {
                paren_depth -= 1;
                current.push(c);
            }
            (',', None) if paren_depth == 0 => {
                args.push(Expression::parse(&current)?);
                current.clear();
            }
            _ => current.push(c),
        }
    }

    if paren_depth != 0 || quote.is_some() {
        return Err(StyleError::Parse {
            message: format!("Unbalanced arguments: {}", input),
            help: None,
        });
    }

    args.push(Expression::parse(&current)?);

    Ok(args)
}
