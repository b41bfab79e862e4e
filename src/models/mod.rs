//! Model wrappers that combine preprocessing, inference and postprocessing.

pub mod deepfake;

pub use deepfake::{DeepfakeClassifier, DeepfakeClassifierBuilder};
