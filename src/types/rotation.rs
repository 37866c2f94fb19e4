//! Marker rotation and its resolution into a rule value.

use crate::error::Result;

use super::Expression;

/// A marker rotation in degrees, either fixed or computed per feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Rotation {
    Constant(f64),
    Expression(Expression),
}

impl Rotation {
    /// Parse a rotation from text. Numeric literals become constants.
    pub fn parse(input: &str) -> Result<Self> {
        Expression::parse(input).map(Self::from)
    }
}

impl From<f64> for Rotation {
    fn from(degrees: f64) -> Self {
        Rotation::Constant(degrees)
    }
}

impl From<Expression> for Rotation {
    fn from(expr: Expression) -> Self {
        match expr {
            Expression::Number(degrees) => Rotation::Constant(degrees),
            other => Rotation::Expression(other),
        }
    }
}

/// Resolve a rotation into the value written to a graphic, if any.
///
/// Expressions pass through untouched. Constants are only written when
/// strictly positive: zero, negative and NaN angles mean "no rotation" and
/// leave the graphic's rotation unset.
pub fn resolve_rotation(rotation: Option<&Rotation>) -> Option<Expression> {
    match rotation? {
        Rotation::Expression(expr) => Some(expr.clone()),
        Rotation::Constant(degrees) if *degrees > 0.0 => Some(Expression::Number(*degrees)),
        Rotation::Constant(_) => None,
    }
}
