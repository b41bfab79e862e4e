use crate::core::DetectError;
use crate::domain::Prediction;
use std::fmt;

/// User-facing outcome of an analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnalysisStatus {
    /// No analysis has run yet.
    #[default]
    Idle,
    /// The model produced a prediction.
    Predicted(Prediction),
    /// The image could not be fetched or decoded.
    ImageUnprocessable,
    /// Preprocessing, model loading or inference failed.
    PredictionFailed(String),
}

impl AnalysisStatus {
    /// Returns the prediction, if the analysis succeeded.
    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Self::Predicted(prediction) => Some(prediction),
            _ => None,
        }
    }

    /// Maps a failure to its status: acquisition errors mean the image was
    /// unusable, anything else is reported with its full description.
    pub fn from_error(err: &DetectError) -> Self {
        if err.is_acquisition_failure() {
            Self::ImageUnprocessable
        } else {
            Self::PredictionFailed(err.describe())
        }
    }

    /// True for both failure statuses.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ImageUnprocessable | Self::PredictionFailed(_))
    }
}

impl From<DetectError> for AnalysisStatus {
    fn from(err: DetectError) -> Self {
        Self::from_error(&err)
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Result: none"),
            Self::Predicted(prediction) => {
                write!(f, "Predicted class: {}", prediction.class_id())?;
                if let Some(label) = &prediction.label {
                    write!(f, " ({label})")?;
                }
                Ok(())
            }
            Self::ImageUnprocessable => write!(f, "Image could not be processed."),
            Self::PredictionFailed(description) => write!(f, "Prediction error: {description}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimpleError;

    #[test]
    fn test_status_strings() {
        assert_eq!(AnalysisStatus::default().to_string(), "Result: none");
        assert_eq!(
            AnalysisStatus::ImageUnprocessable.to_string(),
            "Image could not be processed."
        );
        assert_eq!(
            AnalysisStatus::PredictionFailed("session closed".into()).to_string(),
            "Prediction error: session closed"
        );
    }

    #[test]
    fn test_predicted_status_renders_sentinel_and_label() {
        let empty = AnalysisStatus::Predicted(Prediction::from_scores(vec![], &[]));
        assert_eq!(empty.to_string(), "Predicted class: -1");
        assert!(!empty.is_failure());

        let labels = vec!["real".to_string(), "fake".to_string()];
        let labelled = AnalysisStatus::Predicted(Prediction::from_scores(vec![0.1, 0.9], &labels));
        assert_eq!(labelled.to_string(), "Predicted class: 1 (fake)");
        assert_eq!(labelled.prediction().and_then(|p| p.class_index), Some(1));
    }

    #[test]
    fn test_model_load_failure_is_prediction_error() {
        let err = DetectError::model_load_error(
            "models/missing.onnx",
            "failed to create ONNX session",
            None,
            Some(SimpleError::new("file not found")),
        );
        let status = AnalysisStatus::from(err);
        let text = status.to_string();
        assert!(
            text.starts_with("Prediction error: failed to load model 'models/missing.onnx'"),
            "{text}"
        );
        assert!(text.ends_with(": file not found"), "{text}");
    }

    #[test]
    fn test_acquisition_failure_is_unprocessable() {
        let err = DetectError::image_acquisition("face.jpg", SimpleError::new("truncated"));
        assert_eq!(
            AnalysisStatus::from_error(&err),
            AnalysisStatus::ImageUnprocessable
        );
    }
}
