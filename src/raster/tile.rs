//! Map tiles addressed by zoom/column/row.

use std::fmt;
use std::hash::{Hash, Hasher};

use base64::Engine;
use image::DynamicImage;
use serde::Serialize;

use crate::error::{Result, StyleError};

/// A tile in the XYZ scheme with an optional image payload.
///
/// Identity is the `(z, x, y)` triple; two tiles with the same coordinates
/// compare equal whatever their payloads hold.
#[derive(Debug, Clone)]
pub struct Tile {
    pub z: u32,
    pub x: u32,
    pub y: u32,
    data: Option<Vec<u8>>,
}

/// Geographic extent of a tile in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileBounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Tile {
    /// Create a tile without a payload.
    pub fn new(z: u32, x: u32, y: u32) -> Self {
        Self { z, x, y, data: None }
    }

    /// Create a tile carrying encoded image bytes.
    pub fn with_data(z: u32, x: u32, y: u32, data: Vec<u8>) -> Self {
        Self {
            z,
            x,
            y,
            data: Some(data),
        }
    }

    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = Some(data);
    }

    pub fn clear_data(&mut self) {
        self.data = None;
    }

    /// The `(z, x, y)` triple.
    pub fn coordinates(&self) -> (u32, u32, u32) {
        (self.z, self.x, self.y)
    }

    /// Decode the payload as an image.
    ///
    /// Decoded fresh on every call so payload changes show up immediately.
    pub fn image(&self) -> Result<Option<DynamicImage>> {
        let Some(data) = &self.data else {
            return Ok(None);
        };

        image::load_from_memory(data)
            .map(Some)
            .map_err(|e| StyleError::Decode {
                message: format!("{} payload is not a readable image: {}", self, e),
            })
    }

    /// The payload as standard base64, if present.
    pub fn base64(&self) -> Option<String> {
        self.data
            .as_ref()
            .map(|data| base64::engine::general_purpose::STANDARD.encode(data))
    }

    /// Longitude/latitude extent in the spherical mercator XYZ scheme.
    pub fn bounds(&self) -> TileBounds {
        let n = 2f64.powi(self.z as i32);
        let lon = |x: f64| x / n * 360.0 - 180.0;
        let lat = |y: f64| {
            let t = std::f64::consts::PI * (1.0 - 2.0 * y / n);
            t.sinh().atan().to_degrees()
        };

        TileBounds {
            west: lon(self.x as f64),
            east: lon(self.x as f64 + 1.0),
            north: lat(self.y as f64),
            south: lat(self.y as f64 + 1.0),
        }
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates() == other.coordinates()
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinates().hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile(x:{}, y:{}, z:{})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};

    fn png_bytes(colour: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(2, 2, Rgba(colour));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_display_orders_x_y_z() {
        assert_eq!(Tile::new(1, 0, 2).to_string(), "Tile(x:0, y:2, z:1)");
    }

    #[test]
    fn test_no_payload_has_no_views() {
        let tile = Tile::new(1, 0, 2);
        assert!(tile.image().unwrap().is_none());
        assert!(tile.base64().is_none());
    }

    #[test]
    fn test_payload_views() {
        let tile = Tile::with_data(1, 0, 2, png_bytes([255, 0, 0, 255]));

        let img = tile.image().unwrap().unwrap();
        assert_eq!((img.width(), img.height()), (2, 2));

        let encoded = tile.base64().unwrap();
        assert!(!encoded.is_empty());
        assert!(encoded.starts_with("iVBORw0KGgo"));
    }

    #[test]
    fn test_invalid_payload_is_decode_error() {
        let tile = Tile::with_data(0, 0, 0, b"not an image".to_vec());

        assert!(matches!(tile.image(), Err(StyleError::Decode { .. })));
        // The base64 view does not care what the bytes are
        assert!(tile.base64().is_some());
    }

    #[test]
    fn test_views_follow_payload_changes() {
        let mut tile = Tile::with_data(3, 1, 1, png_bytes([255, 0, 0, 255]));
        let first = tile.base64().unwrap();

        tile.set_data(png_bytes([0, 0, 255, 255]));
        let img = tile.image().unwrap().unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_ne!(tile.base64().unwrap(), first);

        tile.clear_data();
        assert!(tile.base64().is_none());
        assert!(tile.image().unwrap().is_none());
    }

    #[test]
    fn test_identity_is_coordinates() {
        let a = Tile::new(4, 5, 6);
        let b = Tile::with_data(4, 5, 6, vec![1, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a, Tile::new(4, 6, 5));

        let set: HashSet<Tile> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_bounds() {
        let world = Tile::new(0, 0, 0).bounds();
        assert_eq!(world.west, -180.0);
        assert_eq!(world.east, 180.0);
        assert!((world.north - 85.0511).abs() < 1e-4);
        assert!((world.south + 85.0511).abs() < 1e-4);

        let ne = Tile::new(1, 1, 0).bounds();
        assert_eq!(ne.west, 0.0);
        assert!(ne.south.abs() < 1e-9);
    }
}
