//! Core value types for geostyle.
//!
//! - `Colour` / `ColourInput` - colour normalization
//! - `Expression` - literal and computed rule values
//! - `Rotation` - constant or computed marker rotation

mod colour;
mod expr;
mod rotation;

pub use colour::{Colour, ColourInput};
pub use expr::Expression;
pub use rotation::{resolve_rotation, Rotation};
