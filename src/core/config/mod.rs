//! Configuration types for the detector.

pub mod detector;
pub mod errors;
pub mod onnx;

pub use detector::DetectorConfig;
pub use errors::{ConfigError, ConfigValidator};
pub use onnx::{OrtGraphOptimizationLevel, OrtSessionConfig};
