//! Fixed-size resampling and the full image-to-tensor transform.

use crate::core::constants::DEFAULT_INPUT_SIZE;
use crate::core::{DetectError, ProcessingStage, SimpleError, Tensor4D};
use crate::processors::normalization::NormalizeImage;
use crate::processors::types::ResizeFilter;
use image::{RgbImage, imageops};

/// Resizes images to an exact `(height, width)`, ignoring aspect ratio.
#[derive(Debug, Clone)]
pub struct ResizeImage {
    /// Target shape (height, width)
    pub input_shape: (u32, u32),
    /// Resampling filter
    pub filter: ResizeFilter,
}

impl ResizeImage {
    /// Creates a resizer for the given `(height, width)` and filter.
    pub fn new(input_shape: (u32, u32), filter: ResizeFilter) -> Result<Self, DetectError> {
        if input_shape.0 == 0 || input_shape.1 == 0 {
            return Err(DetectError::config_error(format!(
                "Resize target must be non-empty, got {}x{}",
                input_shape.1, input_shape.0
            )));
        }
        Ok(Self {
            input_shape,
            filter,
        })
    }

    /// Resizes `img` to the target shape.
    ///
    /// Images that already have the target dimensions are copied without
    /// resampling.
    pub fn apply(&self, img: &RgbImage) -> Result<RgbImage, DetectError> {
        let (height, width) = self.input_shape;
        if img.width() == 0 || img.height() == 0 {
            return Err(DetectError::processing_error(
                ProcessingStage::Resize,
                &format!("empty {}x{} image", img.width(), img.height()),
                SimpleError::new("nothing to resample"),
            ));
        }
        if img.dimensions() == (width, height) {
            return Ok(img.clone());
        }
        Ok(imageops::resize(img, width, height, self.filter.into()))
    }
}

impl Default for ResizeImage {
    fn default() -> Self {
        Self {
            input_shape: (DEFAULT_INPUT_SIZE, DEFAULT_INPUT_SIZE),
            filter: ResizeFilter::Bilinear,
        }
    }
}

/// Resize followed by normalization: turns any decoded image into the model's
/// `(1, 3, H, W)` input tensor.
#[derive(Debug, Clone, Default)]
pub struct TensorPreprocessor {
    resize: ResizeImage,
    normalizer: NormalizeImage,
}

impl TensorPreprocessor {
    /// Creates a preprocessor from a resizer and a normalizer.
    pub fn new(resize: ResizeImage, normalizer: NormalizeImage) -> Self {
        Self { resize, normalizer }
    }

    /// Target `(height, width)` of the produced tensor.
    pub fn input_shape(&self) -> (u32, u32) {
        self.resize.input_shape
    }

    /// Converts a decoded image into a normalized input tensor.
    pub fn apply(&self, img: &RgbImage) -> Result<Tensor4D, DetectError> {
        let resized = self.resize.apply(img)?;
        self.normalizer.normalize_to(&resized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const MEAN: [f32; 3] = [0.485, 0.456, 0.406];
    const STD: [f32; 3] = [0.229, 0.224, 0.225];

    fn expected(source_channel: usize, value: u8) -> f32 {
        (value as f32 / 255.0 - MEAN[source_channel]) / STD[source_channel]
    }

    fn assert_uniform(tensor: &Tensor4D, slot: usize, value: f32) {
        for v in tensor.slice(ndarray::s![0, slot, .., ..]).iter() {
            assert!((v - value).abs() < 1e-4, "slot {slot}: expected {value}, got {v}");
        }
    }

    #[test]
    fn test_output_shape_is_independent_of_input_size() {
        let preprocessor = TensorPreprocessor::default();
        for (w, h) in [(1, 1), (7, 300), (640, 480), (128, 128), (129, 127)] {
            let img = RgbImage::from_pixel(w, h, Rgb([10, 20, 30]));
            let tensor = preprocessor.apply(&img).unwrap();
            assert_eq!(tensor.shape(), &[1, 3, 128, 128], "input {w}x{h}");
        }
    }

    #[test]
    fn test_saturated_colors() {
        let preprocessor = TensorPreprocessor::default();
        let cases: [([u8; 3], &str); 5] = [
            ([255, 0, 0], "red"),
            ([0, 255, 0], "green"),
            ([0, 0, 255], "blue"),
            ([0, 0, 0], "black"),
            ([255, 255, 255], "white"),
        ];

        for (rgb, name) in cases {
            let img = RgbImage::from_pixel(64, 48, Rgb(rgb));
            let tensor = preprocessor.apply(&img).unwrap();
            // Output slots are blue, green, red; constants follow the source channel.
            assert_uniform(&tensor, 0, expected(2, rgb[2]));
            assert_uniform(&tensor, 1, expected(1, rgb[1]));
            assert_uniform(&tensor, 2, expected(0, rgb[0]));
            assert!(tensor.iter().all(|v| v.is_finite()), "{name}");
        }
    }

    #[test]
    fn test_pure_red_uses_red_statistics_in_last_slot() {
        let preprocessor = TensorPreprocessor::default();
        let img = RgbImage::from_pixel(200, 100, Rgb([255, 0, 0]));
        let tensor = preprocessor.apply(&img).unwrap();

        assert_uniform(&tensor, 2, (1.0 - 0.485) / 0.229);
        assert_uniform(&tensor, 1, (0.0 - 0.456) / 0.224);
        assert_uniform(&tensor, 0, (0.0 - 0.406) / 0.225);
    }

    #[test]
    fn test_every_position_maps_to_its_own_slot() {
        let preprocessor = TensorPreprocessor::default();
        let img = RgbImage::from_fn(128, 128, |x, y| {
            Rgb([(x * 2) as u8, (y * 2) as u8, ((x + y) % 256) as u8])
        });

        let tensor = preprocessor.apply(&img).unwrap();
        for y in 0..128usize {
            for x in 0..128usize {
                let px = img.get_pixel(x as u32, y as u32);
                assert!((tensor[[0, 0, y, x]] - expected(2, px[2])).abs() < 1e-5);
                assert!((tensor[[0, 1, y, x]] - expected(1, px[1])).abs() < 1e-5);
                assert!((tensor[[0, 2, y, x]] - expected(0, px[0])).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_preprocessing_is_deterministic() {
        let preprocessor = TensorPreprocessor::default();
        let img = RgbImage::from_fn(90, 60, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
        let first = preprocessor.apply(&img).unwrap();
        let second = preprocessor.apply(&img).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resize_rejects_empty_target_and_input() {
        assert!(ResizeImage::new((0, 128), ResizeFilter::Bilinear).is_err());
        let resize = ResizeImage::default();
        let err = resize.apply(&RgbImage::new(0, 0)).unwrap_err();
        assert!(matches!(
            err,
            DetectError::Processing {
                kind: ProcessingStage::Resize,
                ..
            }
        ));
        assert_eq!(
            err.describe(),
            "resize failed: empty 0x0 image: nothing to resample"
        );
    }
}
