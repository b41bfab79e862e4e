//! Tensor aliases used across the crate.

/// 2D f32 tensor, `(batch, classes)` for classifier output.
pub type Tensor2D = ndarray::Array2<f32>;

/// 4D f32 tensor, `(batch, channels, height, width)` for model input.
pub type Tensor4D = ndarray::Array4<f32>;
