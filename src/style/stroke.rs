//! Stroke style: line colour, width and dash settings.
//!
//! A `Stroke` is used both on its own (drawing lines and polygon outlines)
//! and as the outline descriptor owned by a [`Shape`](super::Shape).
//! Cap and join are passed through unvalidated; renderers conventionally
//! understand `butt`/`round`/`square` and `miter`/`round`/`bevel`.

use crate::error::Result;
use crate::rule::{LineSymbolizer, StrokeStyle, Symbolizer};
use crate::types::{Colour, ColourInput, Expression};

use super::Symbolize;

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    colour: Colour,
    width: f64,
    opacity: f64,
    dash: Option<Vec<f64>>,
    cap: Option<String>,
    join: Option<String>,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            colour: Colour::BLACK,
            width: 1.0,
            opacity: 1.0,
            dash: None,
            cap: None,
            join: None,
        }
    }
}

impl Stroke {
    /// Create a solid stroke.
    pub fn new(colour: impl Into<ColourInput>, width: f64) -> Result<Self> {
        Ok(Self {
            colour: Colour::normalize(&colour.into())?,
            width,
            ..Self::default()
        })
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_dash(mut self, pattern: impl Into<Vec<f64>>) -> Self {
        self.dash = Some(pattern.into());
        self
    }

    pub fn with_cap(mut self, cap: impl Into<String>) -> Self {
        self.cap = Some(cap.into());
        self
    }

    pub fn with_join(mut self, join: impl Into<String>) -> Self {
        self.join = Some(join.into());
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn dash(&self) -> Option<&[f64]> {
        self.dash.as_deref()
    }

    pub fn cap(&self) -> Option<&str> {
        self.cap.as_deref()
    }

    pub fn join(&self) -> Option<&str> {
        self.join.as_deref()
    }

    /// Build a standalone stroke structure for the renderer.
    pub fn to_style(&self) -> StrokeStyle {
        let mut style = StrokeStyle::default();
        self.write_into(&mut style);
        style
    }

    /// Overwrite the drawing properties of `style`, keeping its graphic stroke.
    fn write_into(&self, style: &mut StrokeStyle) {
        style.color = Some(Expression::text(self.colour.to_hex()));
        style.width = Some(Expression::number(self.width));
        style.opacity = Some(Expression::number(self.opacity));
        style.dash_array = self.dash.clone();
        style.line_cap = self.cap.as_deref().map(Expression::text);
        style.line_join = self.join.as_deref().map(Expression::text);
    }
}

impl Symbolize for Stroke {
    fn accepts(&self, target: &Symbolizer) -> bool {
        matches!(target, Symbolizer::Line(_) | Symbolizer::Polygon(_))
    }

    fn apply(&self, target: &mut Symbolizer) {
        let style = match target {
            Symbolizer::Line(line) => line.stroke.get_or_insert_with(StrokeStyle::default),
            Symbolizer::Polygon(poly) => poly.stroke.get_or_insert_with(StrokeStyle::default),
            _ => return,
        };
        self.write_into(style);
    }

    fn new_target(&self) -> Symbolizer {
        Symbolizer::Line(LineSymbolizer::default())
    }
}
