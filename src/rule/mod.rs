//! Rule model consumed by the renderer.
//!
//! A [`Rule`] groups symbolizers; each symbolizer variant carries the nested
//! fill, stroke and graphic structures that styles write into. Every field
//! the renderer reads is an [`Expression`] so that literals and computed
//! values share one representation.

mod slot;

pub use slot::{GraphicSlot, HasGraphic};

use serde::Serialize;

use crate::types::Expression;

/// A group of symbolizers drawn together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub symbolizers: Vec<Symbolizer>,
}

impl Rule {
    /// Create an empty rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty named rule.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            symbolizers: Vec::new(),
        }
    }

    /// Append a symbolizer.
    pub fn push(&mut self, symbolizer: impl Into<Symbolizer>) {
        self.symbolizers.push(symbolizer.into());
    }
}

/// A rendering instruction inside a rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Symbolizer {
    Point(PointSymbolizer),
    Line(LineSymbolizer),
    Polygon(PolygonSymbolizer),
    Text(TextSymbolizer),
    Raster(RasterSymbolizer),
}

impl Symbolizer {
    /// Short variant name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Symbolizer::Point(_) => "point",
            Symbolizer::Line(_) => "line",
            Symbolizer::Polygon(_) => "polygon",
            Symbolizer::Text(_) => "text",
            Symbolizer::Raster(_) => "raster",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PointSymbolizer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic: Option<Graphic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineSymbolizer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PolygonSymbolizer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextSymbolizer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic: Option<Graphic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RasterSymbolizer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Expression>,
}

/// Point-style properties: size, rotation and the marks to draw.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graphic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Expression>,
    pub marks: Vec<Mark>,
}

/// A single shape descriptor inside a graphic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mark {
    pub well_known_name: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FillStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic_fill: Option<Graphic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StrokeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_cap: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_join: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic_stroke: Option<Graphic>,
}

impl From<PointSymbolizer> for Symbolizer {
    fn from(s: PointSymbolizer) -> Self {
        Symbolizer::Point(s)
    }
}

impl From<LineSymbolizer> for Symbolizer {
    fn from(s: LineSymbolizer) -> Self {
        Symbolizer::Line(s)
    }
}

impl From<PolygonSymbolizer> for Symbolizer {
    fn from(s: PolygonSymbolizer) -> Self {
        Symbolizer::Polygon(s)
    }
}

impl From<TextSymbolizer> for Symbolizer {
    fn from(s: TextSymbolizer) -> Self {
        Symbolizer::Text(s)
    }
}

impl From<RasterSymbolizer> for Symbolizer {
    fn from(s: RasterSymbolizer) -> Self {
        Symbolizer::Raster(s)
    }
}
