//! Declarative styles and their application to rules.
//!
//! A style is a small value object (a [`Shape`] marker, a [`Stroke`], or a
//! [`Fill`]) that knows which symbolizer variants it targets and how to
//! write itself into them.

mod fill;
mod shape;
mod stroke;

pub use fill::Fill;
pub use shape::{Shape, ShapeOptions, ShapeType};
pub use stroke::Stroke;

use crate::rule::{Rule, Symbolizer};

/// Shared behaviour of every style.
pub trait Symbolize {
    /// Whether `apply_to` should visit this symbolizer.
    fn accepts(&self, target: &Symbolizer) -> bool;

    /// Write this style into a single symbolizer.
    fn apply(&self, target: &mut Symbolizer);

    /// A fresh, empty symbolizer of the variant this style draws with.
    fn new_target(&self) -> Symbolizer;

    /// Apply to every accepted symbolizer in the rule.
    fn apply_to(&self, rule: &mut Rule) {
        for target in rule.symbolizers.iter_mut() {
            if self.accepts(target) {
                self.apply(target);
            }
        }
    }

    /// Build a new rule drawing only this style.
    fn rule(&self) -> Rule {
        let mut rule = Rule::new();
        rule.push(self.new_target());
        self.apply_to(&mut rule);
        rule
    }
}

/// Any style a style document can declare.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    Shape(Shape),
    Stroke(Stroke),
    Fill(Fill),
}

impl Symbolize for Style {
    fn accepts(&self, target: &Symbolizer) -> bool {
        match self {
            Style::Shape(s) => s.accepts(target),
            Style::Stroke(s) => s.accepts(target),
            Style::Fill(s) => s.accepts(target),
        }
    }

    fn apply(&self, target: &mut Symbolizer) {
        match self {
            Style::Shape(s) => s.apply(target),
            Style::Stroke(s) => s.apply(target),
            Style::Fill(s) => s.apply(target),
        }
    }

    fn new_target(&self) -> Symbolizer {
        match self {
            Style::Shape(s) => s.new_target(),
            Style::Stroke(s) => s.new_target(),
            Style::Fill(s) => s.new_target(),
        }
    }
}

impl From<Shape> for Style {
    fn from(s: Shape) -> Self {
        Style::Shape(s)
    }
}

impl From<Stroke> for Style {
    fn from(s: Stroke) -> Self {
        Style::Stroke(s)
    }
}

impl From<Fill> for Style {
    fn from(s: Fill) -> Self {
        Style::Fill(s)
    }
}

/// Build a rule combining several styles.
///
/// One target symbolizer is added per style (in order), then every style is
/// applied across the whole rule, so a stroke also outlines a polygon added
/// by a fill.
pub fn build_rule(name: Option<&str>, styles: &[Style]) -> Rule {
    let mut rule = match name {
        Some(name) => Rule::named(name),
        None => Rule::new(),
    };

    for style in styles {
        rule.push(style.new_target());
    }
    for style in styles {
        style.apply_to(&mut rule);
    }

    rule
}
