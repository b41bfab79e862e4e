//! The analysis pipeline.
//!
//! Ties image acquisition, preprocessing and classification together and
//! turns the outcome into a user-facing [`AnalysisStatus`].

mod detector;
mod status;

pub use detector::DeepfakePipeline;
pub use status::AnalysisStatus;
