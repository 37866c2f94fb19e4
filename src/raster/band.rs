//! Per-channel raster metadata.

use std::fmt;

use serde::Serialize;

/// Storage type of a channel's samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleType {
    U8,
    U16,
    F32,
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleType::U8 => write!(f, "u8"),
            SampleType::U16 => write!(f, "u16"),
            SampleType::F32 => write!(f, "f32"),
        }
    }
}

/// Metadata snapshot for one channel of a raster.
///
/// Bands have no id of their own; their position in the raster's band list
/// is the channel index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    label: String,
    min: f64,
    max: f64,
    nodata: Option<f64>,
    unit: Option<String>,
    scale: f64,
    offset: f64,
    sample_type: SampleType,
}

impl Band {
    /// Create a band with unit scale, zero offset, no nodata value and no unit.
    pub fn new(label: impl Into<String>, sample_type: SampleType, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            nodata: None,
            unit: None,
            scale: 1.0,
            offset: 0.0,
            sample_type,
        }
    }

    pub fn with_nodata(mut self, nodata: f64) -> Self {
        self.nodata = Some(nodata);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_transform(mut self, scale: f64, offset: f64) -> Self {
        self.scale = scale;
        self.offset = offset;
        self
    }

    /// Channel role label, e.g. `RED_BAND`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn sample_type(&self) -> SampleType {
        self.sample_type
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
