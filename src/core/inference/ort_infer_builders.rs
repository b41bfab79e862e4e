use super::*;
use crate::core::config::DetectorConfig;
use crate::core::constants::DEFAULT_INPUT_NAME;
use crate::core::inference::session::apply_ort_config;
use ort::logging::LogLevel;
use std::path::Path;
use tracing::{debug, info};

impl OrtInfer {
    /// Creates a new OrtInfer instance with default ONNX Runtime settings.
    pub fn new(model_path: impl AsRef<Path>, input_name: Option<&str>) -> Result<Self, DetectError> {
        let path = model_path.as_ref();
        let session = Session::builder()?
            .with_log_level(LogLevel::Error)?
            .commit_from_file(path)
            .map_err(|e| {
                DetectError::model_load_error(
                    path,
                    "failed to create ONNX session",
                    Some("verify model path and compatibility with selected execution providers"),
                    Some(e),
                )
            })?;

        let infer = OrtInfer {
            session: Mutex::new(session),
            input_name: input_name.unwrap_or(DEFAULT_INPUT_NAME).to_string(),
            output_name: None,
            model_path: path.to_path_buf(),
            model_name: model_name_from_path(path),
        };
        infer.check_bindings()?;
        info!(model = %infer.model_name, path = %path.display(), "loaded ONNX model");
        Ok(infer)
    }

    /// Creates a new OrtInfer instance from a [`DetectorConfig`], applying the
    /// configured session options and tensor names.
    pub fn from_config(config: &DetectorConfig) -> Result<Self, DetectError> {
        let path = config.model_path.as_path();
        let builder = Session::builder()?;
        let builder = if let Some(cfg) = &config.ort_session {
            debug!(?cfg, "applying ONNX Runtime session options");
            apply_ort_config(builder, cfg)?
        } else {
            builder.with_log_level(LogLevel::Error)?
        };
        let session = builder.commit_from_file(path).map_err(|e| {
            DetectError::model_load_error(
                path,
                "failed to create ONNX session",
                Some("check the model file and session options"),
                Some(e),
            )
        })?;

        let model_name = config
            .model_name
            .clone()
            .unwrap_or_else(|| model_name_from_path(path));

        let infer = OrtInfer {
            session: Mutex::new(session),
            input_name: config.input_name.clone(),
            output_name: config.output_name.clone(),
            model_path: path.to_path_buf(),
            model_name,
        };
        infer.check_bindings()?;
        info!(model = %infer.model_name, path = %path.display(), "loaded ONNX model");
        Ok(infer)
    }
}

fn model_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown_model")
        .to_string()
}
