//! Core ONNX Runtime inference engine.

use crate::core::errors::DetectError;
use ort::{session::Session, value::ValueType};
use std::sync::Mutex;

#[path = "ort_infer_builders.rs"]
mod ort_infer_builders;
#[path = "ort_infer_execution.rs"]
mod ort_infer_execution;
#[cfg(test)]
#[path = "ort_infer_tests.rs"]
mod ort_infer_tests;

/// A loaded ONNX model with a single named input.
///
/// The session is created once when the value is built and released when it
/// is dropped. Runs are serialized through a mutex, so a shared reference is
/// enough to call it from several threads.
pub struct OrtInfer {
    pub(super) session: Mutex<Session>,
    pub(super) input_name: String,
    pub(super) output_name: Option<String>,
    pub(super) model_path: std::path::PathBuf,
    pub(super) model_name: String,
}

impl std::fmt::Debug for OrtInfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrtInfer")
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("model_path", &self.model_path)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl OrtInfer {
    /// Attempts to retrieve the primary input tensor shape.
    ///
    /// Returns a vector of dimensions if available. Dynamic dimensions (e.g., -1) are returned as-is.
    pub fn primary_input_shape(&self) -> Option<Vec<i64>> {
        let session_guard = self.session.lock().ok()?;
        let input = session_guard
            .inputs
            .iter()
            .find(|i| i.name == self.input_name)
            .or_else(|| session_guard.inputs.first())?;
        match &input.input_type {
            ValueType::Tensor { shape, .. } => Some(shape.iter().copied().collect()),
            _ => None,
        }
    }

    /// Checks that the configured input name, and output name if one was
    /// given, exist in the model.
    pub(super) fn check_bindings(&self) -> Result<(), DetectError> {
        let session = self.session.lock().map_err(|_| {
            DetectError::invalid_input("Failed to acquire session lock".to_string())
        })?;
        if !session.inputs.iter().any(|i| i.name == self.input_name) {
            let available: Vec<&str> = session.inputs.iter().map(|i| i.name.as_str()).collect();
            return Err(DetectError::model_load_error(
                &self.model_path,
                format!(
                    "model has no input named '{}' (available: {:?})",
                    self.input_name, available
                ),
                Some("set input_name to one of the model's inputs"),
                None::<DetectError>,
            ));
        }
        if let Some(output_name) = &self.output_name {
            if !session.outputs.iter().any(|o| &o.name == output_name) {
                let available: Vec<&str> =
                    session.outputs.iter().map(|o| o.name.as_str()).collect();
                return Err(DetectError::model_load_error(
                    &self.model_path,
                    format!("model has no output named '{output_name}' (available: {available:?})"),
                    Some("set output_name to one of the model's outputs"),
                    None::<DetectError>,
                ));
            }
        }
        Ok(())
    }
}
