//! Graphic slot lookup.
//!
//! Point-style properties live in a different place for each symbolizer
//! variant:
//!
//! | variant | slot |
//! |---------|------|
//! | point   | own graphic |
//! | text    | own graphic |
//! | polygon | fill's graphic fill |
//! | line    | stroke's graphic stroke |
//! | raster  | none |
//!
//! Missing containers along the path are created empty.

use super::{
    FillStyle, Graphic, LineSymbolizer, PointSymbolizer, PolygonSymbolizer, StrokeStyle,
    Symbolizer, TextSymbolizer,
};

/// Symbolizer variants that own a graphic slot.
pub trait HasGraphic {
    /// The graphic slot, created empty if absent.
    fn graphic_mut(&mut self) -> &mut Graphic;
}

impl HasGraphic for PointSymbolizer {
    fn graphic_mut(&mut self) -> &mut Graphic {
        self.graphic.get_or_insert_with(Graphic::default)
    }
}

impl HasGraphic for TextSymbolizer {
    fn graphic_mut(&mut self) -> &mut Graphic {
        self.graphic.get_or_insert_with(Graphic::default)
    }
}

impl HasGraphic for PolygonSymbolizer {
    fn graphic_mut(&mut self) -> &mut Graphic {
        self.fill
            .get_or_insert_with(FillStyle::default)
            .graphic_fill
            .get_or_insert_with(Graphic::default)
    }
}

impl HasGraphic for LineSymbolizer {
    fn graphic_mut(&mut self) -> &mut Graphic {
        self.stroke
            .get_or_insert_with(StrokeStyle::default)
            .graphic_stroke
            .get_or_insert_with(Graphic::default)
    }
}

/// Outcome of looking up the graphic slot of a symbolizer.
#[derive(Debug)]
pub enum GraphicSlot<'a> {
    Found(&'a mut Graphic),
    /// The variant has no graphic slot; callers skip it silently.
    Unsupported,
}

impl<'a> GraphicSlot<'a> {
    pub fn is_supported(&self) -> bool {
        matches!(self, GraphicSlot::Found(_))
    }

    pub fn into_graphic(self) -> Option<&'a mut Graphic> {
        match self {
            GraphicSlot::Found(graphic) => Some(graphic),
            GraphicSlot::Unsupported => None,
        }
    }
}

impl Symbolizer {
    /// Locate (or create) the graphic slot point-style properties go into.
    pub fn graphic_slot(&mut self) -> GraphicSlot<'_> {
        match self {
            Symbolizer::Point(s) => GraphicSlot::Found(s.graphic_mut()),
            Symbolizer::Text(s) => GraphicSlot::Found(s.graphic_mut()),
            Symbolizer::Polygon(s) => GraphicSlot::Found(s.graphic_mut()),
            Symbolizer::Line(s) => GraphicSlot::Found(s.graphic_mut()),
            Symbolizer::Raster(_) => GraphicSlot::Unsupported,
        }
    }
}
