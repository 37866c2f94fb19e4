//! Point marker style.
//!
//! A `Shape` draws a well-known marker (circle, star, ...) at each point.
//! Applying it writes the marker size and rotation into the target's graphic
//! slot and replaces the slot's marks with a single mark built from the
//! shape's colour, opacity and stroke.
//!
//! Three ways to construct one:
//! - [`Shape::new`] - positional, opacity defaults to 1.0
//! - [`Shape::from_options`] - named options, opacity defaults to 0.0
//! - [`Shape::default`] - no arguments, opacity defaults to 0.0

use crate::error::Result;
use crate::rule::{FillStyle, GraphicSlot, Mark, PointSymbolizer, Symbolizer};
use crate::types::{resolve_rotation, Colour, ColourInput, Expression, Rotation};

use super::{Stroke, Symbolize};

/// Marker size used when none is given.
pub const DEFAULT_SIZE: f64 = 6.0;

/// Well-known marker names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Circle,
    Square,
    Triangle,
    Star,
    Cross,
    X,
}

impl ShapeType {
    pub const ALL: [ShapeType; 6] = [
        ShapeType::Circle,
        ShapeType::Square,
        ShapeType::Triangle,
        ShapeType::Star,
        ShapeType::Cross,
        ShapeType::X,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeType::Circle => "circle",
            ShapeType::Square => "square",
            ShapeType::Triangle => "triangle",
            ShapeType::Star => "star",
            ShapeType::Cross => "cross",
            ShapeType::X => "x",
        }
    }

    /// Look up a well-known name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl From<ShapeType> for String {
    fn from(t: ShapeType) -> Self {
        t.as_str().to_string()
    }
}

/// Named options for [`Shape::from_options`].
///
/// Only the fields listed in [`ShapeOptions::KEYS`] exist; loaders ignore
/// any other key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeOptions {
    pub colour: Option<ColourInput>,
    pub size: Option<f64>,
    pub shape_type: Option<String>,
    pub opacity: Option<f64>,
    pub rotation: Option<Rotation>,
    pub stroke: Option<Stroke>,
}

impl ShapeOptions {
    /// Recognised option names.
    pub const KEYS: [&'static str; 7] =
        ["color", "colour", "size", "type", "opacity", "rotation", "stroke"];

    pub fn is_known(key: &str) -> bool {
        Self::KEYS.contains(&key)
    }
}

/// A point marker style.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    colour: Option<Colour>,
    size: f64,
    shape_type: String,
    stroke: Option<Stroke>,
    rotation: Option<Rotation>,
    opacity: f64,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            colour: None,
            size: DEFAULT_SIZE,
            shape_type: ShapeType::Circle.into(),
            stroke: None,
            rotation: None,
            opacity: 0.0,
        }
    }
}

impl Shape {
    /// Create a shape from positional values. Opacity starts at 1.0.
    ///
    /// `shape_type` is not checked against [`ShapeType`]; unknown names are
    /// passed to the renderer as-is.
    pub fn new(
        colour: Option<ColourInput>,
        size: f64,
        shape_type: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            colour: colour.as_ref().map(Colour::normalize).transpose()?,
            size,
            shape_type: shape_type.into(),
            stroke: None,
            rotation: None,
            opacity: 1.0,
        })
    }

    /// Create a shape from named options. Unset options keep the
    /// [`Default`] values, including an opacity of 0.0.
    pub fn from_options(options: ShapeOptions) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            colour: options.colour.as_ref().map(Colour::normalize).transpose()?,
            size: options.size.unwrap_or(defaults.size),
            shape_type: options.shape_type.unwrap_or(defaults.shape_type),
            stroke: options.stroke,
            rotation: options.rotation,
            opacity: options.opacity.unwrap_or(defaults.opacity),
        })
    }

    /// Replace the outline stroke.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.set_stroke(stroke);
        self
    }

    /// Replace the outline stroke in place.
    pub fn set_stroke(&mut self, stroke: Stroke) -> &mut Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_rotation(mut self, rotation: impl Into<Rotation>) -> Self {
        self.rotation = Some(rotation.into());
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_colour(mut self, colour: impl Into<ColourInput>) -> Result<Self> {
        self.colour = Some(Colour::normalize(&colour.into())?);
        Ok(self)
    }

    pub fn colour(&self) -> Option<Colour> {
        self.colour
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn shape_type(&self) -> &str {
        &self.shape_type
    }

    pub fn stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }

    pub fn rotation(&self) -> Option<&Rotation> {
        self.rotation.as_ref()
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Build the mark this shape draws.
    ///
    /// Without a colour the mark has no fill at all (not a transparent one),
    /// and without a stroke it has no outline.
    pub fn build_mark(&self) -> Mark {
        Mark {
            well_known_name: Expression::text(self.shape_type.as_str()),
            fill: self.colour.map(|colour| FillStyle {
                color: Some(Expression::text(colour.to_hex())),
                opacity: Some(Expression::number(self.opacity)),
                graphic_fill: None,
            }),
            stroke: self.stroke.as_ref().map(Stroke::to_style),
        }
    }
}

impl Symbolize for Shape {
    fn accepts(&self, target: &Symbolizer) -> bool {
        matches!(target, Symbolizer::Point(_))
    }

    /// Write this marker into the target's graphic slot.
    ///
    /// Works on any variant with a graphic slot (point, text, polygon
    /// graphic fill, line graphic stroke); other variants are left alone.
    fn apply(&self, target: &mut Symbolizer) {
        let GraphicSlot::Found(graphic) = target.graphic_slot() else {
            return;
        };

        graphic.size = Some(Expression::number(self.size));
        if let Some(rotation) = resolve_rotation(self.rotation.as_ref()) {
            graphic.rotation = Some(rotation);
        }
        graphic.marks.clear();
        graphic.marks.push(self.build_mark());
    }

    fn new_target(&self) -> Symbolizer {
        Symbolizer::Point(PointSymbolizer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{
        Graphic, LineSymbolizer, PolygonSymbolizer, RasterSymbolizer, Rule, TextSymbolizer,
    };
    use pretty_assertions::assert_eq;

    fn graphic_of(rule: &Rule, index: usize) -> &Graphic {
        match &rule.symbolizers[index] {
            Symbolizer::Point(p) => p.graphic.as_ref().expect("graphic"),
            other => panic!("Expected point, got {}", other.kind()),
        }
    }

    fn red_star() -> Shape {
        Shape::new(Some("red".into()), 10.0, ShapeType::Star).unwrap()
    }

    #[test]
    fn test_default_values() {
        let shape = Shape::default();
        assert_eq!(shape.colour(), None);
        assert_eq!(shape.size(), 6.0);
        assert_eq!(shape.shape_type(), "circle");
        assert_eq!(shape.opacity(), 0.0);
        assert!(shape.stroke().is_none());
        assert!(shape.rotation().is_none());
    }

    #[test]
    fn test_opacity_default_depends_on_constructor() {
        // Positional construction is opaque, the other two paths are not.
        let positional = Shape::new(None, DEFAULT_SIZE, "circle").unwrap();
        let named = Shape::from_options(ShapeOptions::default()).unwrap();

        assert_eq!(positional.opacity(), 1.0);
        assert_eq!(named.opacity(), 0.0);
        assert_eq!(Shape::default().opacity(), 0.0);
    }

    #[test]
    fn test_colour_is_normalized() {
        let by_name = red_star();
        let by_rgb = Shape::new(Some((255u8, 0, 0).into()), 10.0, "star").unwrap();
        let by_hex = Shape::new(Some("#f00".into()), 10.0, "star").unwrap();

        assert_eq!(by_name.colour().unwrap().to_hex(), "#FF0000");
        assert_eq!(by_rgb.colour(), by_name.colour());
        assert_eq!(by_hex.colour(), by_name.colour());
    }

    #[test]
    fn test_invalid_colour_fails_fast() {
        assert!(Shape::new(Some("#nothex".into()), 6.0, "circle").is_err());

        let options = ShapeOptions {
            colour: Some("blurple".into()),
            ..ShapeOptions::default()
        };
        assert!(Shape::from_options(options).is_err());
    }

    #[test]
    fn test_from_options() {
        let options = ShapeOptions {
            colour: Some("blue".into()),
            size: Some(12.0),
            shape_type: Some("triangle".to_string()),
            rotation: Some(Rotation::Constant(90.0)),
            ..ShapeOptions::default()
        };

        let shape = Shape::from_options(options).unwrap();
        assert_eq!(shape.colour().unwrap().to_hex(), "#0000FF");
        assert_eq!(shape.size(), 12.0);
        assert_eq!(shape.shape_type(), "triangle");
        assert_eq!(shape.opacity(), 0.0);
        assert_eq!(shape.rotation(), Some(&Rotation::Constant(90.0)));
    }

    #[test]
    fn test_unknown_shape_type_passes_through() {
        let shape = Shape::new(None, 6.0, "hexagon").unwrap();
        assert_eq!(shape.build_mark().well_known_name, Expression::text("hexagon"));
    }

    #[test]
    fn test_build_mark_without_colour_or_stroke() {
        let mark = Shape::default().build_mark();
        assert_eq!(
            mark,
            Mark {
                well_known_name: Expression::text("circle"),
                fill: None,
                stroke: None,
            }
        );
    }

    #[test]
    fn test_build_mark_with_colour_and_stroke() {
        let shape = red_star()
            .with_opacity(0.5)
            .with_stroke(Stroke::new("black", 2.0).unwrap());

        let mark = shape.build_mark();
        assert_eq!(mark.well_known_name, Expression::text("star"));
        assert_eq!(
            mark.fill,
            Some(FillStyle {
                color: Some(Expression::text("#FF0000")),
                opacity: Some(Expression::number(0.5)),
                graphic_fill: None,
            })
        );
        assert_eq!(mark.stroke, Some(Stroke::new("black", 2.0).unwrap().to_style()));
    }

    #[test]
    fn test_second_stroke_replaces_first() {
        let first = Stroke::new("blue", 4.0)
            .unwrap()
            .with_dash(vec![2.0, 2.0])
            .with_cap("round");
        let second = Stroke::new("green", 1.0).unwrap();

        let shape = red_star().with_stroke(first).with_stroke(second.clone());

        assert_eq!(shape.stroke(), Some(&second));
        let style = shape.build_mark().stroke.unwrap();
        assert_eq!(style.dash_array, None);
        assert_eq!(style.line_cap, None);
        assert_eq!(style.width, Some(Expression::number(1.0)));
    }

    #[test]
    fn test_replacing_stroke_leaves_applied_rule_alone() {
        let mut shape = red_star().with_stroke(Stroke::new("blue", 4.0).unwrap());
        let rule = shape.rule();

        shape.set_stroke(Stroke::new("green", 1.0).unwrap());

        let stroke = graphic_of(&rule, 0).marks[0].stroke.as_ref().unwrap();
        assert_eq!(stroke.color, Some(Expression::text("#0000FF")));
    }

    #[test]
    fn test_apply_to_creates_graphic_with_one_mark() {
        let mut rule = Rule::new();
        rule.push(PointSymbolizer::default());

        red_star().apply_to(&mut rule);

        let graphic = graphic_of(&rule, 0);
        assert_eq!(graphic.size, Some(Expression::number(10.0)));
        assert_eq!(graphic.marks.len(), 1);
        assert_eq!(graphic.marks[0].well_known_name, Expression::text("star"));
    }

    #[test]
    fn test_apply_replaces_existing_marks() {
        let old_mark = Mark {
            well_known_name: Expression::text("square"),
            fill: None,
            stroke: None,
        };
        let mut rule = Rule::new();
        rule.push(PointSymbolizer {
            graphic: Some(Graphic {
                marks: vec![old_mark.clone(), old_mark],
                ..Graphic::default()
            }),
        });

        red_star().apply_to(&mut rule);

        let graphic = graphic_of(&rule, 0);
        assert_eq!(graphic.marks.len(), 1);
        assert_eq!(graphic.marks[0].well_known_name, Expression::text("star"));
    }

    #[test]
    fn test_rotation_positive_is_written() {
        let rule = red_star().with_rotation(45.0).rule();
        assert_eq!(graphic_of(&rule, 0).rotation, Some(Expression::number(45.0)));
    }

    #[test]
    fn test_rotation_zero_and_negative_are_not_written() {
        for degrees in [0.0, -5.0] {
            let rule = red_star().with_rotation(degrees).rule();
            assert_eq!(graphic_of(&rule, 0).rotation, None);
        }
    }

    #[test]
    fn test_rotation_expression_passes_through() {
        let expr = Expression::parse("mul($heading, 2)").unwrap();
        let rule = red_star()
            .with_rotation(Rotation::Expression(expr.clone()))
            .rule();
        assert_eq!(graphic_of(&rule, 0).rotation, Some(expr));
    }

    #[test]
    fn test_zero_rotation_keeps_previous_value() {
        let mut rule = Rule::new();
        rule.push(PointSymbolizer {
            graphic: Some(Graphic {
                rotation: Some(Expression::number(30.0)),
                ..Graphic::default()
            }),
        });

        red_star().with_rotation(0.0).apply_to(&mut rule);

        assert_eq!(graphic_of(&rule, 0).rotation, Some(Expression::number(30.0)));
    }

    #[test]
    fn test_apply_to_leaves_unsupported_variant_unmodified() {
        let mut rule = Rule::new();
        rule.push(RasterSymbolizer {
            opacity: Some(Expression::number(0.8)),
        });
        let before = rule.clone();

        red_star().apply_to(&mut rule);

        assert_eq!(rule, before);
    }

    #[test]
    fn test_apply_to_only_visits_points() {
        let mut rule = Rule::new();
        rule.push(LineSymbolizer::default());
        rule.push(PolygonSymbolizer::default());
        rule.push(TextSymbolizer::default());
        let before = rule.clone();

        red_star().apply_to(&mut rule);

        assert_eq!(rule, before);
    }

    #[test]
    fn test_apply_directly_to_line_uses_graphic_stroke() {
        let mut target = Symbolizer::Line(LineSymbolizer::default());

        red_star().apply(&mut target);

        match target {
            Symbolizer::Line(line) => {
                let graphic = line.stroke.unwrap().graphic_stroke.unwrap();
                assert_eq!(graphic.marks.len(), 1);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_apply_directly_to_polygon_uses_graphic_fill() {
        let mut target = Symbolizer::Polygon(PolygonSymbolizer::default());

        red_star().apply(&mut target);

        match target {
            Symbolizer::Polygon(poly) => {
                let graphic = poly.fill.unwrap().graphic_fill.unwrap();
                assert_eq!(graphic.size, Some(Expression::number(10.0)));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_apply_directly_to_text_uses_own_graphic() {
        let mut target = Symbolizer::Text(TextSymbolizer::default());

        red_star().apply(&mut target);

        match target {
            Symbolizer::Text(text) => assert_eq!(text.graphic.unwrap().marks.len(), 1),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_apply_directly_to_raster_is_noop() {
        let mut target = Symbolizer::Raster(RasterSymbolizer::default());
        red_star().apply(&mut target);
        assert_eq!(target, Symbolizer::Raster(RasterSymbolizer::default()));
    }

    #[test]
    fn test_shape_type_names() {
        assert_eq!(ShapeType::from_name("x"), Some(ShapeType::X));
        assert_eq!(ShapeType::from_name("hexagon"), None);
        assert!(ShapeOptions::is_known("type"));
        assert!(!ShapeOptions::is_known("shape"));
    }
}
