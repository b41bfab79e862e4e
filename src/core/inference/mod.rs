//! Structures and helpers for ONNX Runtime inference.
//!
//! [`OrtInfer`] owns a single ONNX Runtime session for the lifetime of the
//! value and exposes typed entry points for running the classifier.

pub mod ort_infer;
pub mod session;

pub use ort_infer::OrtInfer;
pub use session::{apply_ort_config, load_session};
