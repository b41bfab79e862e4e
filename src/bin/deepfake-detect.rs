//! Deepfake detection command-line tool
//!
//! Loads the classifier once and prints one status line per image source.
//! Sources starting with `http://` or `https://` are downloaded, anything else
//! is read from disk.
//!
//! Usage:
//! ```text
//! deepfake-detect --model-path <model.onnx> [--labels real,fake] <images or URLs>...
//! deepfake-detect --config detector.json <images or URLs>...
//! ```

use clap::Parser;
use deepfake_detect::core::{ClassScorer, ConfigValidator, DetectorConfig, init_tracing};
use deepfake_detect::prelude::*;
use deepfake_detect::processors::ResizeFilter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Command-line arguments for the deepfake detector
#[derive(Parser)]
#[command(name = "deepfake-detect")]
#[command(about = "Classifies face images as genuine or manipulated")]
struct Args {
    /// Path to the ONNX model file (overrides the config file)
    #[arg(short, long)]
    model_path: Option<PathBuf>,

    /// JSON detector configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma-separated class labels, indexed by class id
    #[arg(short, long, value_delimiter = ',')]
    labels: Vec<String>,

    /// Resampling filter (nearest, bilinear, cubic, gaussian, lanczos3)
    #[arg(long)]
    resize_filter: Option<ResizeFilter>,

    /// Image paths or URLs to analyze
    #[arg(required = true)]
    sources: Vec<String>,
}

/// Validates the model path and loads the classifier once.
fn load_classifier(config: DetectorConfig) -> DetectResult<DeepfakeClassifier> {
    config
        .validate_model_path(&config.model_path)
        .map_err(|e| {
            DetectError::model_load_error(
                &config.model_path,
                "model file not found",
                Some("pass --model-path pointing at the ONNX file"),
                Some(e),
            )
        })?;
    DeepfakeClassifierBuilder::from_config(config).build()
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match DetectorConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", DetectError::from(e).describe());
                return ExitCode::FAILURE;
            }
        },
        None => DetectorConfig::default(),
    };
    if let Some(model_path) = args.model_path {
        config.model_path = model_path;
    }
    if let Some(filter) = args.resize_filter {
        config = config.with_resize_filter(filter);
    }
    if !args.labels.is_empty() {
        config = config.with_labels(args.labels);
    }

    let fetch_timeout = config.fetch_timeout();
    let classifier = match load_classifier(config) {
        Ok(classifier) => classifier,
        Err(e) => {
            error!("{}", e.describe());
            println!("{}", AnalysisStatus::from(e));
            return ExitCode::FAILURE;
        }
    };
    info!(engine = %classifier.scorer().engine_info(), "classifier ready");

    let pipeline = DeepfakePipeline::new(&classifier);
    for source in &args.sources {
        let location = ImageLocation::parse(source, fetch_timeout);
        let status = pipeline.analyze(&location);
        println!("{source}: {status}");
    }

    ExitCode::SUCCESS
}
