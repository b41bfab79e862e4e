//! Constants shared by the preprocessing and inference stages.

/// Height and width, in pixels, of the model input.
pub const DEFAULT_INPUT_SIZE: u32 = 128;

/// Number of color channels fed to the model.
pub const DEFAULT_CHANNELS: usize = 3;

/// Per-channel mean in source RGB order.
pub const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];

/// Per-channel standard deviation in source RGB order.
pub const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Scale applied to 8-bit channel values before normalization.
pub const DEFAULT_SCALE: f32 = 1.0 / 255.0;

/// Name of the model's single input tensor.
pub const DEFAULT_INPUT_NAME: &str = "input";

/// File name of the packaged deepfake classifier.
pub const DEFAULT_MODEL_FILE: &str = "deepfake_binary_s128_e5_early.onnx";

/// Timeout applied to remote image downloads, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Largest remote image body accepted, in bytes.
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 32 * 1024 * 1024;
