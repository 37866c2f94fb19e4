//! Raster value objects.
//!
//! - `Tile` - an XYZ-addressed chunk of imagery with on-demand views
//! - `Band` - metadata for one channel of a raster
//! - `Raster` - a decoded image plus its band list

mod band;
mod tile;

pub use band::{Band, SampleType};
pub use tile::{Tile, TileBounds};

use std::path::Path;

use image::DynamicImage;

use crate::error::{Result, StyleError};

/// A decoded raster and its bands, in channel order.
#[derive(Debug, Clone)]
pub struct Raster {
    image: DynamicImage,
    bands: Vec<Band>,
}

impl Raster {
    /// Read a raster from an image file.
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|e| StyleError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read raster: {}", e),
        })?;
        Ok(Self::from_image(image))
    }

    /// Read a raster from encoded image bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes).map_err(|e| StyleError::Decode {
            message: format!("Failed to decode raster: {}", e),
        })?;
        Ok(Self::from_image(image))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        let bands = read_bands(&image);
        Self { image, bands }
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Channel role labels for a given channel count.
fn channel_labels(channels: usize) -> &'static [&'static str] {
    match channels {
        1 => &["GRAY_INDEX"],
        2 => &["GRAY_INDEX", "ALPHA_BAND"],
        3 => &["RED_BAND", "GREEN_BAND", "BLUE_BAND"],
        _ => &["RED_BAND", "GREEN_BAND", "BLUE_BAND", "ALPHA_BAND"],
    }
}

fn read_bands(image: &DynamicImage) -> Vec<Band> {
    let (stats, channels, sample_type) = match image {
        DynamicImage::ImageLuma8(b) => (channel_stats(b.as_raw(), 1), 1, SampleType::U8),
        DynamicImage::ImageLumaA8(b) => (channel_stats(b.as_raw(), 2), 2, SampleType::U8),
        DynamicImage::ImageRgb8(b) => (channel_stats(b.as_raw(), 3), 3, SampleType::U8),
        DynamicImage::ImageRgba8(b) => (channel_stats(b.as_raw(), 4), 4, SampleType::U8),
        DynamicImage::ImageLuma16(b) => (channel_stats(b.as_raw(), 1), 1, SampleType::U16),
        DynamicImage::ImageLumaA16(b) => (channel_stats(b.as_raw(), 2), 2, SampleType::U16),
        DynamicImage::ImageRgb16(b) => (channel_stats(b.as_raw(), 3), 3, SampleType::U16),
        DynamicImage::ImageRgba16(b) => (channel_stats(b.as_raw(), 4), 4, SampleType::U16),
        DynamicImage::ImageRgb32F(b) => (channel_stats(b.as_raw(), 3), 3, SampleType::F32),
        DynamicImage::ImageRgba32F(b) => (channel_stats(b.as_raw(), 4), 4, SampleType::F32),
        other => (channel_stats(other.to_rgba8().as_raw(), 4), 4, SampleType::U8),
    };

    channel_labels(channels)
        .iter()
        .zip(stats)
        .map(|(label, (min, max))| Band::new(*label, sample_type, min, max))
        .collect()
}

/// Min/max of each interleaved channel. Empty rasters report `(0, 0)`.
fn channel_stats<T: Copy + Into<f64>>(raw: &[T], channels: usize) -> Vec<(f64, f64)> {
    let mut stats = vec![(f64::INFINITY, f64::NEG_INFINITY); channels];

    for pixel in raw.chunks_exact(channels) {
        for (slot, &sample) in stats.iter_mut().zip(pixel) {
            let value: f64 = sample.into();
            slot.0 = slot.0.min(value);
            slot.1 = slot.1.max(value);
        }
    }

    stats
        .into_iter()
        .map(|(min, max)| if min > max { (0.0, 0.0) } else { (min, max) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage, RgbaImage};

    #[test]
    fn test_rgb_bands_in_channel_order() {
        let mut img = RgbImage::from_pixel(2, 1, Rgb([10, 20, 30]));
        img.put_pixel(1, 0, Rgb([200, 5, 30]));

        let raster = Raster::from_image(DynamicImage::ImageRgb8(img));
        let bands = raster.bands();

        assert_eq!(bands.len(), 3);
        let labels: Vec<_> = bands.iter().map(|b| b.to_string()).collect();
        assert_eq!(labels, vec!["RED_BAND", "GREEN_BAND", "BLUE_BAND"]);

        assert_eq!((bands[0].min(), bands[0].max()), (10.0, 200.0));
        assert_eq!((bands[1].min(), bands[1].max()), (5.0, 20.0));
        assert_eq!((bands[2].min(), bands[2].max()), (30.0, 30.0));
        assert!(bands.iter().all(|b| b.sample_type() == SampleType::U8));
    }

    #[test]
    fn test_from_bytes_png() {
        let img = RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 4]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let raster = Raster::from_bytes(&bytes).unwrap();
        assert_eq!((raster.width(), raster.height()), (3, 2));
        assert_eq!(raster.bands().len(), 4);
        assert_eq!(raster.bands()[3].label(), "ALPHA_BAND");
    }

    #[test]
    fn test_grey_u16() {
        let img = image::ImageBuffer::<Luma<u16>, Vec<u16>>::from_pixel(1, 1, Luma([5000]));
        let raster = Raster::from_image(DynamicImage::ImageLuma16(img));

        assert_eq!(raster.bands().len(), 1);
        assert_eq!(raster.bands()[0].label(), "GRAY_INDEX");
        assert_eq!(raster.bands()[0].sample_type(), SampleType::U16);
        assert_eq!(raster.bands()[0].max(), 5000.0);
    }

    #[test]
    fn test_empty_raster_stats() {
        let raster = Raster::from_image(DynamicImage::ImageLuma8(GrayImage::new(0, 0)));
        assert_eq!((raster.bands()[0].min(), raster.bands()[0].max()), (0.0, 0.0));
    }

    #[test]
    fn test_undecodable_bytes() {
        assert!(matches!(
            Raster::from_bytes(&[0, 1, 2, 3]),
            Err(StyleError::Decode { .. })
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let err = Raster::open(Path::new("/nonexistent/raster.png")).unwrap_err();
        assert!(matches!(err, StyleError::Io { .. }));
    }
}
