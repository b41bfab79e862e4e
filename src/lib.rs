//! # deepfake-detect
//!
//! Classifies face images as genuine or manipulated with a pre-trained ONNX
//! model.
//!
//! ## Features
//!
//! - Image acquisition from files, memory buffers and HTTP(S) URLs
//! - Fixed 128x128 preprocessing with ImageNet normalization in BGR planar layout
//! - ONNX Runtime integration with a model loaded once and reused
//! - Arg-max class selection with optional labels
//! - Status strings suitable for direct display
//!
//! ## Modules
//!
//! * [`acquisition`] - Image providers behind the [`core::ImageSource`] trait
//! * [`core`] - Configuration, errors, ONNX Runtime integration and traits
//! * [`domain`] - Prediction results
//! * [`models`] - The deepfake classifier
//! * [`pipeline`] - End-to-end analysis and status reporting
//! * [`processors`] - Resize, normalization and arg-max
//! * [`utils`] - Image decoding helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use deepfake_detect::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = DeepfakeClassifier::builder()
//!     .model_path("models/deepfake_binary_s128_e5_early.onnx")
//!     .labels(["real", "fake"])
//!     .build()?;
//!
//! let image = load_image(std::path::Path::new("face.jpg"))?;
//! let prediction = classifier.forward(&image)?;
//! println!("class {} scores {:?}", prediction.class_id(), prediction.scores);
//! # Ok(())
//! # }
//! ```

pub mod acquisition;
pub mod core;
pub mod domain;
pub mod models;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// ```rust
/// use deepfake_detect::prelude::*;
/// ```
///
/// For lower-level pieces (session options, processors, traits), import
/// directly from the respective modules.
pub mod prelude {
    pub use crate::acquisition::{BytesImageSource, FileImageSource, ImageLocation, UrlImageSource};
    pub use crate::core::{DetectError, DetectResult, DetectorConfig, ImageSource};
    pub use crate::domain::Prediction;
    pub use crate::models::{DeepfakeClassifier, DeepfakeClassifierBuilder};
    pub use crate::pipeline::{AnalysisStatus, DeepfakePipeline};
    pub use crate::utils::load_image;
}
