//! The core module of the detector.
//!
//! This module contains the fundamental building blocks:
//! - Configuration management
//! - Constants used throughout the crate
//! - Error handling
//! - ONNX Runtime integration
//! - Tensor aliases
//! - Traits separating image acquisition from scoring
//!
//! It also provides re-exports of commonly used types for convenience.

pub mod config;
pub mod constants;
pub mod errors;
pub mod inference;
pub mod tensor;
pub mod traits;

pub use config::{ConfigError, ConfigValidator, DetectorConfig, OrtSessionConfig};
pub use constants::*;
pub use errors::{DetectError, DetectResult, ProcessingStage, SimpleError};
pub use inference::{OrtInfer, load_session};
pub use tensor::{Tensor2D, Tensor4D};
pub use traits::{ClassScorer, ImageSource};

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter and formatting layer.
/// It's typically called at the start of an application to enable logging.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
