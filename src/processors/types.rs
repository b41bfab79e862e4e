//! Types used in image processing operations.
//!
//! These enums describe which channel order the model input uses and how
//! images are resampled before normalization.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Specifies which source color channel lands in each output channel slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorOrder {
    /// Output channels are red, green, blue.
    Rgb,
    /// Output channels are blue, green, red.
    #[default]
    Bgr,
}

impl ColorOrder {
    /// Output slot that receives the given source RGB channel.
    pub fn output_slot(self, source_channel: usize) -> usize {
        match self {
            ColorOrder::Rgb => source_channel,
            ColorOrder::Bgr => 2 - source_channel,
        }
    }
}

/// Resampling filter used when resizing to the model input size.
///
/// Mirrors [`FilterType`] with serde support so it can live in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResizeFilter {
    /// Nearest neighbour.
    Nearest,
    /// Linear (bilinear in 2D) filter.
    #[default]
    Bilinear,
    /// Cubic filter.
    CatmullRom,
    /// Gaussian filter.
    Gaussian,
    /// Lanczos with window 3.
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Bilinear => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl FromStr for ResizeFilter {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "nearest" => Ok(ResizeFilter::Nearest),
            "bilinear" | "triangle" => Ok(ResizeFilter::Bilinear),
            "catmullrom" | "cubic" => Ok(ResizeFilter::CatmullRom),
            "gaussian" => Ok(ResizeFilter::Gaussian),
            "lanczos3" | "lanczos" => Ok(ResizeFilter::Lanczos3),
            other => Err(format!("unknown resize filter: {other}")),
        }
    }
}
