//! Domain-level structures produced by the detector.

pub mod prediction;

pub use prediction::Prediction;
