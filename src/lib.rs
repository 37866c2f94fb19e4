//! geostyle - Declarative map symbology to renderable style rules
//!
//! A library for turning small declarative styles (point markers, strokes,
//! fills) into the symbolizer rules a map renderer draws with, plus the
//! raster value objects (tiles and bands) those renderers hand around.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod raster;
pub mod rule;
pub mod style;
pub mod types;
pub mod validation;

pub use discovery::{discover_paths, load_style_file, load_styles, LoadedStyle, ScanResult};
pub use error::{Result, StyleError};
pub use parser::{parse_style, ParsedStyle, StyleDocument, StyleRule};
pub use raster::{Band, Raster, SampleType, Tile, TileBounds};
pub use rule::{
    FillStyle, Graphic, GraphicSlot, HasGraphic, LineSymbolizer, Mark, PointSymbolizer,
    PolygonSymbolizer, RasterSymbolizer, Rule, StrokeStyle, Symbolizer, TextSymbolizer,
};
pub use style::{build_rule, Fill, Shape, ShapeOptions, ShapeType, Stroke, Style, Symbolize};
pub use types::{resolve_rotation, Colour, ColourInput, Expression, Rotation};
pub use validation::{validate_document, Diagnostic, Severity, ValidationResult};
