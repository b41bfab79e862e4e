//! Image normalization for model input.
//!
//! Converts an 8-bit RGB image into a normalized f32 tensor. Each value is
//! computed as `(value * scale - mean[c]) / std[c]`, where `c` is the channel's
//! source RGB identity, and then written to the planar slot selected by the
//! configured [`ColorOrder`].

use crate::core::constants::{DEFAULT_SCALE, IMAGENET_MEAN, IMAGENET_STD};
use crate::core::{DetectError, Tensor4D};
use crate::processors::types::ColorOrder;
use image::RgbImage;

/// Normalizes images for model input.
///
/// Stores the affine form of the normalization, `alpha = scale / std` and
/// `beta = -mean / std`, both indexed by source RGB channel.
#[derive(Debug, Clone)]
pub struct NormalizeImage {
    /// Scaling factors for each source channel (alpha = scale / std)
    pub alpha: [f32; 3],
    /// Offset values for each source channel (beta = -mean / std)
    pub beta: [f32; 3],
    /// Color ordering of the produced tensor
    pub color: ColorOrder,
}

impl NormalizeImage {
    /// Creates a new NormalizeImage instance with the specified parameters.
    ///
    /// # Arguments
    ///
    /// * `scale` - Optional scaling factor (defaults to 1.0/255.0)
    /// * `mean` - Optional mean values in RGB order (defaults to [0.485, 0.456, 0.406])
    /// * `std` - Optional standard deviation values in RGB order (defaults to [0.229, 0.224, 0.225])
    /// * `color` - Optional color ordering (defaults to BGR)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * Scale is not a finite value greater than 0
    /// * Mean or std don't have exactly 3 elements
    /// * Any standard deviation value is less than or equal to 0
    pub fn new(
        scale: Option<f32>,
        mean: Option<&[f32]>,
        std: Option<&[f32]>,
        color: Option<ColorOrder>,
    ) -> Result<Self, DetectError> {
        let scale = scale.unwrap_or(DEFAULT_SCALE);
        let mean = mean.unwrap_or(&IMAGENET_MEAN);
        let std = std.unwrap_or(&IMAGENET_STD);

        if !(scale.is_finite() && scale > 0.0) {
            return Err(DetectError::config_error(format!(
                "Scale must be greater than 0, got {scale}"
            )));
        }

        if mean.len() != 3 {
            return Err(DetectError::config_error(
                "Mean must have exactly 3 elements for RGB",
            ));
        }

        if std.len() != 3 {
            return Err(DetectError::config_error(
                "Std must have exactly 3 elements for RGB",
            ));
        }

        for (i, &s) in std.iter().enumerate() {
            if s <= 0.0 {
                return Err(DetectError::config_error(format!(
                    "Standard deviation at index {i} must be greater than 0, got {s}"
                )));
            }
        }

        let mut alpha = [0.0f32; 3];
        let mut beta = [0.0f32; 3];
        for c in 0..3 {
            alpha[c] = scale / std[c];
            beta[c] = -mean[c] / std[c];
        }

        Ok(Self {
            alpha,
            beta,
            color: color.unwrap_or_default(),
        })
    }

    /// ImageNet statistics, planar layout, blue-green-red channel order.
    pub fn imagenet_bgr() -> Self {
        Self::from_stats(DEFAULT_SCALE, IMAGENET_MEAN, IMAGENET_STD, ColorOrder::Bgr)
    }

    fn from_stats(scale: f32, mean: [f32; 3], std: [f32; 3], color: ColorOrder) -> Self {
        Self {
            alpha: std.map(|s| scale / s),
            beta: [0usize, 1, 2].map(|c| -mean[c] / std[c]),
            color,
        }
    }

    /// Normalizes a single 8-bit value of the given source RGB channel.
    #[inline]
    pub fn normalize_value(&self, source_channel: usize, value: u8) -> f32 {
        value as f32 * self.alpha[source_channel] + self.beta[source_channel]
    }

    /// Normalizes a single image into a planar tensor of shape
    /// `(1, 3, height, width)`.
    pub fn normalize_to(&self, img: &RgbImage) -> Result<Tensor4D, DetectError> {
        let (width, height) = img.dimensions();
        let (w, h) = (width as usize, height as usize);
        let channels = 3;
        let mut result = vec![0.0f32; channels * h * w];

        for (x, y, pixel) in img.enumerate_pixels() {
            let (x, y) = (x as usize, y as usize);
            for (src, &value) in pixel.0.iter().enumerate() {
                let dst_c = self.color.output_slot(src);
                result[dst_c * h * w + y * w + x] = self.normalize_value(src, value);
            }
        }

        ndarray::Array4::from_shape_vec((1, channels, h, w), result).map_err(|e| {
            DetectError::tensor_operation_error(
                "normalization_tensor_creation",
                &[1, channels, h, w],
                &[channels * h * w],
                &format!("{width}x{height} image"),
                e,
            )
        })
    }
}

impl Default for NormalizeImage {
    fn default() -> Self {
        Self::imagenet_bgr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(NormalizeImage::new(Some(0.0), None, None, None).is_err());
        assert!(NormalizeImage::new(None, Some(&[0.5, 0.5]), None, None).is_err());
        assert!(NormalizeImage::new(None, None, Some(&[0.2, 0.0, 0.2]), None).is_err());
    }

    #[test]
    fn test_new_with_defaults_matches_imagenet_bgr() {
        let built = NormalizeImage::new(None, None, None, None).unwrap();
        let preset = NormalizeImage::imagenet_bgr();
        for c in 0..3 {
            assert_close(built.alpha[c], preset.alpha[c]);
            assert_close(built.beta[c], preset.beta[c]);
        }
        assert_eq!(built.color, ColorOrder::Bgr);
    }

    #[test]
    fn test_bgr_chw_places_channels_by_identity() {
        let normalizer = NormalizeImage::imagenet_bgr();
        let img = RgbImage::from_pixel(2, 2, Rgb([255, 0, 51]));

        let tensor = normalizer.normalize_to(&img).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 2, 2]);

        let red = (1.0 - 0.485) / 0.229;
        let green = (0.0 - 0.456) / 0.224;
        let blue = (0.2 - 0.406) / 0.225;
        for y in 0..2 {
            for x in 0..2 {
                assert_close(tensor[[0, 0, y, x]], blue);
                assert_close(tensor[[0, 1, y, x]], green);
                assert_close(tensor[[0, 2, y, x]], red);
            }
        }
    }

    #[test]
    fn test_rgb_order_keeps_red_first() {
        let normalizer = NormalizeImage::new(
            Some(1.0 / 255.0),
            Some(&[0.0, 0.0, 0.0]),
            Some(&[1.0, 1.0, 1.0]),
            Some(ColorOrder::Rgb),
        )
        .unwrap();
        let mut img = RgbImage::new(3, 1);
        img.put_pixel(2, 0, Rgb([255, 0, 0]));

        let tensor = normalizer.normalize_to(&img).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 1, 3]);
        assert_close(tensor[[0, 0, 0, 2]], 1.0);
        assert_close(tensor[[0, 2, 0, 2]], 0.0);
        assert_close(tensor[[0, 0, 0, 0]], 0.0);
    }
}
