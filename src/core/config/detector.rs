//! Detector configuration.
//!
//! [`DetectorConfig`] gathers everything needed to build a classifier and to
//! acquire images: model location and tensor names, preprocessing parameters,
//! optional class labels, ONNX Runtime session options and the remote fetch
//! timeout. It can be built in code or loaded from JSON:
//!
//! ```rust
//! use deepfake_detect::core::config::DetectorConfig;
//!
//! let config = DetectorConfig::from_json_str(r#"
//! {
//!   "model_path": "models/deepfake_binary_s128_e5_early.onnx",
//!   "labels": ["real", "fake"]
//! }
//! "#).unwrap();
//! assert_eq!(config.input_name, "input");
//! assert_eq!(config.input_shape, (128, 128));
//! ```

use super::errors::{ConfigError, ConfigValidator};
use super::onnx::OrtSessionConfig;
use crate::core::constants::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_INPUT_NAME, DEFAULT_INPUT_SIZE, DEFAULT_MODEL_FILE,
    IMAGENET_MEAN, IMAGENET_STD,
};
use crate::processors::{ColorOrder, ResizeFilter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for the deepfake classifier and its image sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Path to the ONNX model file
    pub model_path: PathBuf,
    /// Model name used in logs and errors (defaults to the file stem)
    pub model_name: Option<String>,
    /// Name of the model's input tensor
    pub input_name: String,
    /// Name of the output tensor holding class scores (defaults to the first output)
    pub output_name: Option<String>,
    /// Model input shape (height, width)
    pub input_shape: (u32, u32),
    /// Resampling filter used to reach `input_shape`
    pub resize_filter: ResizeFilter,
    /// Per-channel mean in RGB order
    pub normalize_mean: Vec<f32>,
    /// Per-channel standard deviation in RGB order
    pub normalize_std: Vec<f32>,
    /// Channel order of the model input
    pub color_order: ColorOrder,
    /// Optional class labels indexed by class id
    pub labels: Vec<String>,
    /// ONNX Runtime session options
    pub ort_session: Option<OrtSessionConfig>,
    /// Timeout for remote image downloads, in seconds
    pub fetch_timeout_secs: u64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_FILE),
            model_name: None,
            input_name: DEFAULT_INPUT_NAME.to_string(),
            output_name: None,
            input_shape: (DEFAULT_INPUT_SIZE, DEFAULT_INPUT_SIZE),
            resize_filter: ResizeFilter::default(),
            normalize_mean: IMAGENET_MEAN.to_vec(),
            normalize_std: IMAGENET_STD.to_vec(),
            color_order: ColorOrder::default(),
            labels: Vec::new(),
            ort_session: None,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl DetectorConfig {
    /// Creates a configuration with defaults and the given model path.
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            ..Self::default()
        }
    }

    /// Parses and validates a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Sets the model name.
    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = Some(name.into());
        self
    }

    /// Sets the input tensor name.
    pub fn with_input_name(mut self, name: impl Into<String>) -> Self {
        self.input_name = name.into();
        self
    }

    /// Sets the output tensor name.
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    /// Sets the model input shape (height, width).
    pub fn with_input_shape(mut self, shape: (u32, u32)) -> Self {
        self.input_shape = shape;
        self
    }

    /// Sets the resampling filter.
    pub fn with_resize_filter(mut self, filter: ResizeFilter) -> Self {
        self.resize_filter = filter;
        self
    }

    /// Sets the class labels.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the ONNX Runtime session options.
    pub fn with_ort_session(mut self, config: OrtSessionConfig) -> Self {
        self.ort_session = Some(config);
        self
    }

    /// Sets the remote fetch timeout in seconds.
    pub fn with_fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    /// Remote fetch timeout as a [`Duration`].
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl ConfigValidator for DetectorConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.validate_image_dimensions(self.input_shape.1, self.input_shape.0)?;
        self.validate_channel_stats("normalize_mean", &self.normalize_mean, false)?;
        self.validate_channel_stats("normalize_std", &self.normalize_std, true)?;

        if self.input_name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig {
                message: "input_name must not be empty".to_string(),
            });
        }
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig {
                message: "fetch_timeout_secs must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
