//! Error types for the detection pipeline.
//!
//! Every failure that can happen between "an image was requested" and "a class
//! index was produced" is represented by [`DetectError`]. The pipeline never
//! panics on bad input; it converts these errors into a status line instead.
//!
//! # Usage
//!
//! ```rust
//! use deepfake_detect::core::errors::{DetectError, ProcessingStage, SimpleError};
//!
//! let error = DetectError::processing_error(
//!     ProcessingStage::Resize,
//!     "empty 0x0 image",
//!     SimpleError::new("nothing to resample"),
//! );
//! assert_eq!(error.to_string(), "resize failed: empty 0x0 image");
//!
//! let config_error = DetectError::config_error("Missing model path");
//! assert!(!config_error.is_acquisition_failure());
//! ```

use std::path::Path;
use thiserror::Error;

/// Stage of the preprocessing path in which an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// Error occurred during tensor construction or reshaping.
    TensorOperation,
    /// Error occurred during image resizing.
    Resize,
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStage::TensorOperation => write!(f, "tensor operation"),
            ProcessingStage::Resize => write!(f, "resize"),
        }
    }
}

/// A plain message error used as the `source` of wrapped errors when there is
/// no underlying library error to chain.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SimpleError {
    message: String,
}

impl SimpleError {
    /// Creates a new simple error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors produced while acquiring, preprocessing or classifying an image.
#[derive(Error, Debug)]
pub enum DetectError {
    /// The source image could not be fetched or decoded.
    #[error("image acquisition from {origin} failed")]
    ImageAcquisition {
        /// Human readable description of the image origin (path, URL, ...).
        origin: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error occurred during preprocessing or post-processing.
    #[error("{kind} failed: {context}")]
    Processing {
        /// The stage of processing where the error occurred.
        kind: ProcessingStage,
        /// Additional context about the error.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The model artifact could not be loaded.
    #[error("failed to load model '{model_path}': {reason}{suggestion}")]
    ModelLoad {
        /// Path to the model file.
        model_path: String,
        /// Short reason description.
        reason: String,
        /// Suggested fix, already prefixed with `; suggested fix: ` when present.
        suggestion: String,
        /// The underlying error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Tensor binding, execution or output extraction failed.
    #[error("inference with model '{model_name}' failed: {context}")]
    Inference {
        /// Name of the model that failed.
        model_name: String,
        /// Additional context about the error.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// Error from the ONNX Runtime session.
    #[error(transparent)]
    Session(#[from] ort::Error),

    /// Error from tensor shape operations.
    #[error("tensor operation")]
    Tensor(#[from] ndarray::ShapeError),
}

/// Convenient result alias for detection operations.
pub type DetectResult<T> = Result<T, DetectError>;

impl DetectError {
    /// Creates an error for a failed image fetch or decode.
    pub fn image_acquisition(
        origin: impl Into<String>,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ImageAcquisition {
            origin: origin.into(),
            source: Box::new(error),
        }
    }

    /// Creates an error for tensor operations with expected and actual shapes
    /// folded into the context.
    pub fn tensor_operation_error(
        operation: &str,
        expected_shape: &[usize],
        actual_shape: &[usize],
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            kind: ProcessingStage::TensorOperation,
            context: format!(
                "{operation}: expected shape {expected_shape:?}, got {actual_shape:?} ({context})"
            ),
            source: Box::new(error),
        }
    }

    /// Creates an error for a given processing stage.
    pub fn processing_error(
        kind: ProcessingStage,
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            kind,
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates an error for model load failures with an optional suggestion.
    ///
    /// # Arguments
    /// * `model_path` - Path to the model file
    /// * `reason` - Short reason description
    /// * `suggestion` - Optional suggestion message (without punctuation)
    /// * `source` - Optional underlying error
    pub fn model_load_error(
        model_path: impl AsRef<Path>,
        reason: impl Into<String>,
        suggestion: Option<&str>,
        source: Option<impl std::error::Error + Send + Sync + 'static>,
    ) -> Self {
        let suggestion = suggestion
            .map(|s| format!("; suggested fix: {s}"))
            .unwrap_or_default();
        Self::ModelLoad {
            model_path: model_path.as_ref().display().to_string(),
            reason: reason.into(),
            suggestion,
            source: source.map(|e| Box::new(e) as _),
        }
    }

    /// Creates an error for inference operations with model context.
    pub fn inference_error(
        model_name: &str,
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Inference {
            model_name: model_name.to_string(),
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates an error for invalid input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an error for configuration problems.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Returns true when the image itself could not be obtained or decoded.
    pub fn is_acquisition_failure(&self) -> bool {
        matches!(self, Self::ImageAcquisition { .. })
    }

    /// Renders this error together with its chain of sources on one line.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

impl From<image::ImageError> for DetectError {
    fn from(error: image::ImageError) -> Self {
        Self::image_acquisition("image data", error)
    }
}

impl From<crate::core::config::ConfigError> for DetectError {
    fn from(error: crate::core::config::ConfigError) -> Self {
        Self::ConfigError {
            message: error.to_string(),
        }
    }
}
