//! Configuration error types and validation traits.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error indicating that a model path does not exist.
    #[error("model path does not exist: {path}")]
    ModelPathNotFound { path: std::path::PathBuf },

    /// Error indicating that a configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Error indicating that a configuration file could not be parsed.
    #[error("failed to parse configuration")]
    Parse(#[from] serde_json::Error),

    /// Error indicating that a configuration file could not be read.
    #[error("failed to read configuration file {path}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A trait for validating configuration parameters.
pub trait ConfigValidator {
    /// Validates the configuration.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Validates that a model path exists and is a file.
    fn validate_model_path(&self, path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            Err(ConfigError::ModelPathNotFound {
                path: path.to_path_buf(),
            })
        } else if !path.is_file() {
            Err(ConfigError::InvalidConfig {
                message: format!("Model path is not a file: {}", path.display()),
            })
        } else {
            Ok(())
        }
    }

    /// Validates that image dimensions are positive.
    fn validate_image_dimensions(&self, width: u32, height: u32) -> Result<(), ConfigError> {
        if width == 0 || height == 0 {
            Err(ConfigError::InvalidConfig {
                message: "Image dimensions must be positive".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validates a three-element normalization vector.
    fn validate_channel_stats(
        &self,
        name: &str,
        values: &[f32],
        strictly_positive: bool,
    ) -> Result<(), ConfigError> {
        if values.len() != 3 {
            return Err(ConfigError::InvalidConfig {
                message: format!("{name} must have exactly 3 elements, got {}", values.len()),
            });
        }
        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() || (strictly_positive && v <= 0.0) {
                return Err(ConfigError::InvalidConfig {
                    message: format!("{name}[{i}] is out of range: {v}"),
                });
            }
        }
        Ok(())
    }
}
