//! Polygon fill style.

use crate::error::Result;
use crate::rule::{FillStyle, PolygonSymbolizer, Symbolizer};
use crate::types::{Colour, ColourInput, Expression};

use super::Symbolize;

#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    colour: Colour,
    opacity: f64,
}

impl Default for Fill {
    fn default() -> Self {
        Self {
            colour: Colour::WHITE,
            opacity: 1.0,
        }
    }
}

impl Fill {
    /// Create an opaque fill.
    pub fn new(colour: impl Into<ColourInput>) -> Result<Self> {
        Ok(Self {
            colour: Colour::normalize(&colour.into())?,
            opacity: 1.0,
        })
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }
}

impl Symbolize for Fill {
    fn accepts(&self, target: &Symbolizer) -> bool {
        matches!(target, Symbolizer::Polygon(_))
    }

    fn apply(&self, target: &mut Symbolizer) {
        if let Symbolizer::Polygon(poly) = target {
            let fill = poly.fill.get_or_insert_with(FillStyle::default);
            fill.color = Some(Expression::text(self.colour.to_hex()));
            fill.opacity = Some(Expression::number(self.opacity));
        }
    }

    fn new_target(&self) -> Symbolizer {
        Symbolizer::Polygon(PolygonSymbolizer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Graphic;

    #[test]
    fn test_rule() {
        let rule = Fill::new((10u8, 20, 30)).unwrap().with_opacity(0.25).rule();

        match &rule.symbolizers[0] {
            Symbolizer::Polygon(poly) => {
                let fill = poly.fill.as_ref().unwrap();
                assert_eq!(fill.color, Some(Expression::text("#0A141E")));
                assert_eq!(fill.opacity, Some(Expression::number(0.25)));
                assert_eq!(poly.stroke, None);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_apply_keeps_graphic_fill() {
        let mut target = Symbolizer::Polygon(PolygonSymbolizer {
            fill: Some(FillStyle {
                graphic_fill: Some(Graphic::default()),
                ..FillStyle::default()
            }),
            stroke: None,
        });

        Fill::default().apply(&mut target);

        match target {
            Symbolizer::Polygon(poly) => {
                let fill = poly.fill.unwrap();
                assert_eq!(fill.graphic_fill, Some(Graphic::default()));
                assert_eq!(fill.color, Some(Expression::text("#FFFFFF")));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_invalid_colour() {
        assert!(Fill::new("#XYZXYZ").is_err());
    }
}
