//! Parsers for geostyle definition files.
//!
//! Style documents are YAML files holding a name and a list of rules, each
//! rule listing the styles (shape, stroke, fill) it draws with.
//!
//! # Usage
//!
//! ```ignore
//! use geostyle::parser::parse_style;
//!
//! let source = std::fs::read_to_string("styles/cities.style.yaml")?;
//! let parsed = parse_style(&source)?;
//!
//! for rule in parsed.document.to_rules() {
//!     println!("{}", serde_json::to_string_pretty(&rule)?);
//! }
//! ```

mod style;

pub use style::{parse_style, ParsedStyle, StyleDocument, StyleRule};
