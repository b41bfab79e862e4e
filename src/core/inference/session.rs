//! Helpers for working directly with ONNX Runtime sessions.

use crate::core::config::{OrtGraphOptimizationLevel, OrtSessionConfig};
use crate::core::errors::DetectError;
use ort::logging::LogLevel;
use ort::session::Session;
use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use std::path::Path;

/// Loads a session from `model_path` with ONNX Runtime logging limited to errors.
pub fn load_session(model_path: impl AsRef<Path>) -> Result<Session, DetectError> {
    let path = model_path.as_ref();
    let session = Session::builder()
        .and_then(|b| b.with_log_level(LogLevel::Error))
        .and_then(|b| b.commit_from_file(path))
        .map_err(|e| {
            DetectError::model_load_error(
                path,
                "failed to create ONNX session",
                Some("verify model file exists and is readable"),
                Some(e),
            )
        })?;
    Ok(session)
}

/// Applies the user-facing session options to an ONNX Runtime builder.
pub fn apply_ort_config(
    mut builder: SessionBuilder,
    cfg: &OrtSessionConfig,
) -> Result<SessionBuilder, ort::Error> {
    if let Some(intra) = cfg.intra_threads {
        builder = builder.with_intra_threads(intra)?;
    }
    if let Some(inter) = cfg.inter_threads {
        builder = builder.with_inter_threads(inter)?;
    }
    if let Some(level) = cfg.optimization_level {
        let mapped = match level {
            OrtGraphOptimizationLevel::DisableAll => GraphOptimizationLevel::Disable,
            OrtGraphOptimizationLevel::Level1 => GraphOptimizationLevel::Level1,
            OrtGraphOptimizationLevel::Level2 => GraphOptimizationLevel::Level2,
            OrtGraphOptimizationLevel::Level3 => GraphOptimizationLevel::Level3,
        };
        builder = builder.with_optimization_level(mapped)?;
    }
    let log_level = match cfg.log_severity_level {
        Some(i32::MIN..=0) => LogLevel::Verbose,
        Some(1) => LogLevel::Info,
        Some(2) => LogLevel::Warning,
        Some(4..=i32::MAX) => LogLevel::Fatal,
        Some(3) | None => LogLevel::Error,
    };
    builder = builder.with_log_level(log_level)?;
    Ok(builder)
}
