//! Seams between the pipeline stages.
//!
//! ```text
//! ┌─────────────┐    ┌──────────────────┐    ┌─────────────┐
//! │ImageSource  │───▶│TensorPreprocessor│───▶│ClassScorer  │───▶ argmax
//! │• acquire    │    │• apply           │    │• score      │
//! └─────────────┘    └──────────────────┘    └─────────────┘
//! ```
//!
//! The pipeline depends only on these traits, so where an image comes from
//! and what produces the scores can be swapped independently.

use crate::core::{DetectError, Tensor4D};
use image::RgbImage;
use std::fmt::Debug;

/// Produces a decoded RGB image from some origin (file, memory, URL).
pub trait ImageSource: Debug {
    /// Fetches and decodes the image.
    ///
    /// Any fetch or decode failure must be reported as
    /// [`DetectError::ImageAcquisition`].
    fn acquire(&self) -> Result<RgbImage, DetectError>;

    /// Human readable description of where the image comes from.
    fn describe(&self) -> String;
}

/// Maps a normalized input tensor to per-class scores for its single batch
/// element.
pub trait ClassScorer: Send + Sync + Debug {
    /// Runs the model and returns one score per class.
    fn score(&self, input: &Tensor4D) -> Result<Vec<f32>, DetectError>;

    /// Short description of the scoring backend.
    fn engine_info(&self) -> String;
}
