use super::*;
use crate::core::errors::SimpleError;
use crate::core::{Tensor2D, Tensor4D};
use ndarray::ArrayView2;
use ort::value::TensorRef;
use tracing::debug;

impl OrtInfer {
    /// Returns the model path associated with this inference engine.
    pub fn model_path(&self) -> &std::path::Path {
        &self.model_path
    }

    /// Returns the model name associated with this inference engine.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Returns the name of the input the tensor is bound to.
    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    /// Runs the model on `x` and hands the raw f32 output to `processor`.
    fn run_inference_with_processor<T>(
        &self,
        x: &Tensor4D,
        processor: impl FnOnce(&[i64], &[f32]) -> Result<T, DetectError>,
    ) -> Result<T, DetectError> {
        let input_shape = x.shape().to_vec();

        let input_tensor = TensorRef::from_array_view(x.view()).map_err(|e| {
            DetectError::inference_error(
                &self.model_name,
                &format!("failed to bind input tensor with shape {input_shape:?}"),
                e,
            )
        })?;

        let inputs = ort::inputs![self.input_name.as_str() => input_tensor];

        let mut session_guard = self.session.lock().map_err(|_| {
            DetectError::inference_error(
                &self.model_name,
                "failed to acquire session lock",
                SimpleError::new("Session lock acquisition failed"),
            )
        })?;

        let output_name = match &self.output_name {
            Some(name) => name.clone(),
            None => session_guard
                .outputs
                .first()
                .map(|o| o.name.clone())
                .ok_or_else(|| {
                    DetectError::inference_error(
                        &self.model_name,
                        "model declares no outputs",
                        SimpleError::new("model may be invalid or corrupted"),
                    )
                })?,
        };

        let outputs = session_guard.run(inputs).map_err(|e| {
            DetectError::inference_error(
                &self.model_name,
                &format!(
                    "forward pass failed with input '{}' -> output '{}'",
                    self.input_name, output_name
                ),
                e,
            )
        })?;

        let output = outputs[output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| {
                DetectError::inference_error(
                    &self.model_name,
                    &format!("failed to extract output tensor '{output_name}' as f32"),
                    e,
                )
            })?;
        let (output_shape, output_data) = output;
        debug!(model = %self.model_name, ?input_shape, ?output_shape, "inference finished");

        processor(output_shape, output_data)
    }

    /// Runs the model and returns its output as `(batch, classes)`.
    ///
    /// A 1D output is treated as a single batch row.
    pub fn infer_2d(&self, x: &Tensor4D) -> Result<Tensor2D, DetectError> {
        let batch_size = x.shape()[0];
        self.run_inference_with_processor(x, |output_shape, output_data| {
            let (rows, classes) = match *output_shape {
                [n] => (1, n.max(0) as usize),
                [b, n] => (b.max(0) as usize, n.max(0) as usize),
                _ => {
                    return Err(DetectError::tensor_operation_error(
                        "output_validation",
                        &[batch_size, 0],
                        &output_shape.iter().map(|&d| d.max(0) as usize).collect::<Vec<_>>(),
                        &format!(
                            "model '{}' must produce one score per class",
                            self.model_name
                        ),
                        SimpleError::new("Invalid output tensor dimensions"),
                    ));
                }
            };

            if output_data.len() != rows * classes {
                return Err(DetectError::tensor_operation_error(
                    "output_data_validation",
                    &[rows, classes],
                    &[output_data.len()],
                    &format!("model '{}' output size mismatch", self.model_name),
                    SimpleError::new("Output tensor data size mismatch"),
                ));
            }

            let array_view =
                ArrayView2::from_shape((rows, classes), output_data).map_err(DetectError::Tensor)?;
            Ok(array_view.to_owned())
        })
    }

    /// Runs the model and returns the class scores of the first batch element.
    ///
    /// An output without rows or without classes yields an empty vector.
    pub fn infer_scores(&self, x: &Tensor4D) -> Result<Vec<f32>, DetectError> {
        let scores = self.infer_2d(x)?;
        Ok(scores
            .outer_iter()
            .next()
            .map(|row| row.to_vec())
            .unwrap_or_default())
    }
}

impl crate::core::traits::ClassScorer for OrtInfer {
    fn score(&self, input: &Tensor4D) -> Result<Vec<f32>, DetectError> {
        self.infer_scores(input)
    }

    fn engine_info(&self) -> String {
        format!(
            "ONNX Runtime model '{}' ({})",
            self.model_name,
            self.model_path.display()
        )
    }
}
