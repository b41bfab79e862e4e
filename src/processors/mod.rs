//! Image and score processing for the classifier.
//!
//! # Modules
//!
//! * `argmax` - Class selection over model scores
//! * `normalization` - Per-channel normalization into model input tensors
//! * `resize` - Resampling to the model input size
//! * `types` - Layout, color order and filter types shared by the processors

mod argmax;
mod normalization;
mod resize;
pub mod types;

pub use argmax::*;
pub use normalization::*;
pub use resize::*;
pub use types::*;
