use super::AnalysisStatus;
use crate::core::inference::OrtInfer;
use crate::core::traits::{ClassScorer, ImageSource};
use crate::core::{DetectError, DetectResult};
use crate::domain::Prediction;
use crate::models::DeepfakeClassifier;
use tracing::{info, warn};

/// Runs one analysis per call against a shared, already loaded classifier.
///
/// ```rust,no_run
/// use deepfake_detect::prelude::*;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let classifier = DeepfakeClassifier::builder()
///     .model_path("models/deepfake_binary_s128_e5_early.onnx")
///     .build()?;
/// let pipeline = DeepfakePipeline::new(&classifier);
///
/// let source = ImageLocation::parse("face.jpg", Duration::from_secs(30));
/// println!("{}", pipeline.analyze(&source));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DeepfakePipeline<'a, S: ClassScorer = OrtInfer> {
    classifier: &'a DeepfakeClassifier<S>,
}

impl<'a, S: ClassScorer> DeepfakePipeline<'a, S> {
    /// Creates a pipeline around a loaded classifier.
    pub fn new(classifier: &'a DeepfakeClassifier<S>) -> Self {
        Self { classifier }
    }

    /// Acquires, preprocesses and classifies one image.
    pub fn run(&self, source: &dyn ImageSource) -> DetectResult<Prediction> {
        let image = source.acquire()?;
        self.classifier.forward(&image)
    }

    /// Like [`run`](Self::run), but every failure is folded into the
    /// returned status.
    pub fn analyze(&self, source: &dyn ImageSource) -> AnalysisStatus {
        let origin = source.describe();
        match self.run(source) {
            Ok(prediction) => {
                info!(%origin, class_id = prediction.class_id(), "analysis finished");
                AnalysisStatus::Predicted(prediction)
            }
            Err(err) => Self::failure_status(&origin, err),
        }
    }

    fn failure_status(origin: &str, err: DetectError) -> AnalysisStatus {
        let status = AnalysisStatus::from_error(&err);
        match &status {
            AnalysisStatus::ImageUnprocessable => {
                warn!(%origin, error = %err.describe(), "image could not be processed")
            }
            _ => warn!(%origin, error = %err.describe(), "prediction failed"),
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::{BytesImageSource, ImageLocation};
    use crate::core::{SimpleError, Tensor4D};
    use crate::models::DeepfakeClassifierBuilder;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;
    use std::time::Duration;

    #[derive(Debug)]
    enum StubScorer {
        Scores(Vec<f32>),
        Fail,
    }

    impl ClassScorer for StubScorer {
        fn score(&self, _input: &Tensor4D) -> Result<Vec<f32>, DetectError> {
            match self {
                Self::Scores(scores) => Ok(scores.clone()),
                Self::Fail => Err(DetectError::inference_error(
                    "stub",
                    "forward pass",
                    SimpleError::new("output tensor missing"),
                )),
            }
        }

        fn engine_info(&self) -> String {
            "stub".to_string()
        }
    }

    fn classifier(scorer: StubScorer) -> DeepfakeClassifier<StubScorer> {
        DeepfakeClassifierBuilder::new()
            .build_with_scorer(scorer)
            .unwrap()
    }

    fn png_source() -> BytesImageSource {
        let img = RgbImage::from_pixel(40, 30, Rgb([200, 10, 10]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        BytesImageSource::new(buf.into_inner())
    }

    #[test]
    fn test_analyze_reports_predicted_class() {
        let model = classifier(StubScorer::Scores(vec![0.1, 0.9, 0.05]));
        let status = DeepfakePipeline::new(&model).analyze(&png_source());
        assert_eq!(status.to_string(), "Predicted class: 1");
    }

    #[test]
    fn test_analyze_empty_scores() {
        let model = classifier(StubScorer::Scores(vec![]));
        let status = DeepfakePipeline::new(&model).analyze(&png_source());
        assert_eq!(status.to_string(), "Predicted class: -1");
    }

    #[test]
    fn test_corrupt_bytes_are_unprocessable() {
        let model = classifier(StubScorer::Scores(vec![1.0]));
        let source = BytesImageSource::new(vec![0x89, b'P', b'N', b'G', 0, 1, 2]);
        let status = DeepfakePipeline::new(&model).analyze(&source);
        assert_eq!(status, AnalysisStatus::ImageUnprocessable);
        assert_eq!(status.to_string(), "Image could not be processed.");
    }

    #[test]
    fn test_unreachable_url_is_unprocessable() {
        let model = classifier(StubScorer::Scores(vec![1.0]));
        let source = ImageLocation::parse("http://127.0.0.1:9/face.jpg", Duration::from_secs(2));
        let status = DeepfakePipeline::new(&model).analyze(&source);
        assert_eq!(status, AnalysisStatus::ImageUnprocessable);
    }

    #[test]
    fn test_missing_file_is_unprocessable() {
        let model = classifier(StubScorer::Scores(vec![1.0]));
        let source = ImageLocation::parse("no/such/image.png", Duration::from_secs(2));
        let status = DeepfakePipeline::new(&model).analyze(&source);
        assert_eq!(status, AnalysisStatus::ImageUnprocessable);
    }

    #[test]
    fn test_inference_failure_is_prediction_error() {
        let model = classifier(StubScorer::Fail);
        let status = DeepfakePipeline::new(&model).analyze(&png_source());
        let text = status.to_string();
        assert!(text.starts_with("Prediction error: "), "{text}");
        assert!(text.contains("output tensor missing"), "{text}");
        assert!(status.is_failure());
    }

    #[test]
    fn test_run_propagates_errors() {
        let model = classifier(StubScorer::Fail);
        let err = DeepfakePipeline::new(&model).run(&png_source()).unwrap_err();
        assert!(matches!(err, DetectError::Inference { .. }));
    }
}
