//! Deepfake Classification Model
//!
//! Wraps a [`ClassScorer`] (normally an ONNX Runtime session) with the fixed
//! preprocessing the model was trained on and arg-max postprocessing. The
//! model is loaded once when the classifier is built and reused for every
//! image it classifies.

use crate::core::config::{ConfigValidator, DetectorConfig};
use crate::core::constants::{DEFAULT_CHANNELS, DEFAULT_SCALE};
use crate::core::inference::OrtInfer;
use crate::core::traits::ClassScorer;
use crate::core::{DetectError, SimpleError, Tensor4D};
use crate::domain::Prediction;
use crate::processors::{NormalizeImage, ResizeImage, TensorPreprocessor};
use image::RgbImage;
use tracing::{debug, warn};

/// Binary (or n-way) image classifier for manipulated faces.
#[derive(Debug)]
pub struct DeepfakeClassifier<S: ClassScorer = OrtInfer> {
    /// Resize and normalization applied to every image
    preprocessor: TensorPreprocessor,
    /// Backend producing per-class scores
    scorer: S,
    /// Optional class labels indexed by class id
    labels: Vec<String>,
}

impl DeepfakeClassifier {
    /// Returns a builder for an ONNX-backed classifier.
    pub fn builder() -> DeepfakeClassifierBuilder {
        DeepfakeClassifierBuilder::new()
    }
}

impl<S: ClassScorer> DeepfakeClassifier<S> {
    /// Creates a classifier from its parts.
    pub fn new(preprocessor: TensorPreprocessor, scorer: S, labels: Vec<String>) -> Self {
        Self {
            preprocessor,
            scorer,
            labels,
        }
    }

    /// Scoring backend in use.
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Configured class labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Converts a decoded image into the `(1, 3, H, W)` model input.
    pub fn preprocess(&self, image: &RgbImage) -> Result<Tensor4D, DetectError> {
        self.preprocessor.apply(image)
    }

    /// Runs the scorer on a preprocessed tensor.
    ///
    /// The tensor must hold exactly one planar image of the configured size.
    pub fn infer(&self, input: &Tensor4D) -> Result<Vec<f32>, DetectError> {
        let (height, width) = self.preprocessor.input_shape();
        let expected = [1, DEFAULT_CHANNELS, height as usize, width as usize];
        if input.shape() != expected.as_slice() {
            return Err(DetectError::tensor_operation_error(
                "input_validation",
                &expected,
                input.shape(),
                "classifier expects a single preprocessed image",
                SimpleError::new("Invalid input tensor dimensions"),
            ));
        }
        self.scorer.score(input)
    }

    /// Selects the class with the highest score.
    pub fn postprocess(&self, scores: Vec<f32>) -> Prediction {
        Prediction::from_scores(scores, &self.labels)
    }

    /// Performs the complete forward pass: preprocess -> infer -> postprocess.
    pub fn forward(&self, image: &RgbImage) -> Result<Prediction, DetectError> {
        let input = self.preprocess(image)?;
        let scores = self.infer(&input)?;
        let prediction = self.postprocess(scores);
        debug!(
            class_id = prediction.class_id(),
            scores = ?prediction.scores,
            "classified image"
        );
        Ok(prediction)
    }
}

/// Builder for [`DeepfakeClassifier`].
#[derive(Debug, Default)]
pub struct DeepfakeClassifierBuilder {
    config: DetectorConfig,
}

impl DeepfakeClassifierBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration.
    pub fn from_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Sets the model path.
    pub fn model_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.config.model_path = path.into();
        self
    }

    /// Sets the class labels.
    pub fn labels<I, T>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.config = self.config.with_labels(labels);
        self
    }

    /// Sets the model input shape (height, width).
    pub fn input_shape(mut self, shape: (u32, u32)) -> Self {
        self.config.input_shape = shape;
        self
    }

    /// Configuration the classifier will be built from.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Loads the ONNX model and builds the classifier.
    pub fn build(self) -> Result<DeepfakeClassifier, DetectError> {
        self.config.validate()?;
        let inference = OrtInfer::from_config(&self.config)?;

        if let Some(shape) = inference.primary_input_shape() {
            let (height, width) = self.config.input_shape;
            let declared_hw = shape.get(2..4).unwrap_or_default();
            let matches = declared_hw.len() == 2
                && [height as i64, width as i64]
                    .iter()
                    .zip(declared_hw)
                    .all(|(&want, &got)| got <= 0 || got == want);
            if !matches {
                warn!(
                    model = %inference.model_name(),
                    ?shape,
                    configured = ?self.config.input_shape,
                    "model input shape differs from configured input shape"
                );
            }
        }

        self.build_with_scorer(inference)
    }

    /// Builds the classifier around an already constructed scorer.
    pub fn build_with_scorer<S: ClassScorer>(
        self,
        scorer: S,
    ) -> Result<DeepfakeClassifier<S>, DetectError> {
        self.config.validate()?;
        let config = self.config;

        let resize = ResizeImage::new(config.input_shape, config.resize_filter)?;
        let normalizer = NormalizeImage::new(
            Some(DEFAULT_SCALE),
            Some(config.normalize_mean.as_slice()),
            Some(config.normalize_std.as_slice()),
            Some(config.color_order),
        )?;

        debug!(engine = %scorer.engine_info(), "building deepfake classifier");
        Ok(DeepfakeClassifier::new(
            TensorPreprocessor::new(resize, normalizer),
            scorer,
            config.labels,
        ))
    }
}
