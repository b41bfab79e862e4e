//! Utility functions for decoding images.
//!
//! Decoding always sniffs the actual content, so a JPEG stored under a `.png`
//! name (or bytes with no name at all) still decodes with the right decoder.

use crate::core::DetectError;
use image::{DynamicImage, ImageError, ImageReader, RgbImage};
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

/// Converts a DynamicImage to an RgbImage, dropping any alpha channel.
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Decodes an in-memory encoded image (JPEG, PNG, ...) into RGB.
///
/// # Errors
///
/// Returns [`DetectError::ImageAcquisition`] if the format cannot be
/// recognized or the data is corrupt.
pub fn decode_image_bytes(bytes: &[u8], origin: &str) -> Result<RgbImage, DetectError> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(ImageError::IoError)
        .and_then(|reader| reader.decode())
        .map_err(|e| DetectError::image_acquisition(origin, e))?;
    Ok(dynamic_to_rgb(img))
}

/// Loads an image from a file path and converts it to RgbImage.
///
/// The extension is tried first; on a decoding or unsupported-format error
/// the file is decoded again with content sniffing.
pub fn load_image(path: &Path) -> Result<RgbImage, DetectError> {
    let origin = path.display().to_string();
    let img = match image::open(path) {
        Ok(img) => img,
        Err(err) if should_retry(&err) => {
            tracing::warn!("Standard decode failed for {origin} ({err}). Retrying with format sniffing.");
            decode_with_guessed_format(path)
                .map_err(|e| DetectError::image_acquisition(&origin, e))?
        }
        Err(err) => return Err(DetectError::image_acquisition(&origin, err)),
    };
    Ok(dynamic_to_rgb(img))
}

fn should_retry(err: &ImageError) -> bool {
    matches!(err, ImageError::Decoding(_) | ImageError::Unsupported(_))
}

fn decode_with_guessed_format(path: &Path) -> Result<DynamicImage, ImageError> {
    let file = File::open(path)?;
    let reader = ImageReader::new(BufReader::new(file)).with_guessed_format()?;
    reader.decode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png_bytes() {
        let img = RgbImage::from_pixel(5, 3, Rgb([1, 2, 3]));
        let decoded = decode_image_bytes(&encode(&img, ImageFormat::Png), "memory").unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_decode_corrupt_bytes_is_acquisition_error() {
        let err = decode_image_bytes(b"\x89PNG\r\n\x1a\ngarbage", "memory").unwrap_err();
        assert!(err.is_acquisition_failure());
        let err = decode_image_bytes(&[], "memory").unwrap_err();
        assert!(err.is_acquisition_failure());
    }

    #[test]
    fn test_load_image_with_mismatched_extension() {
        let img = RgbImage::from_pixel(4, 4, Rgb([200, 100, 50]));
        let mut file = NamedTempFile::with_suffix(".jpg").unwrap();
        file.write_all(&encode(&img, ImageFormat::Png)).unwrap();
        file.flush().unwrap();

        let loaded = load_image(file.path()).unwrap();
        assert_eq!(loaded, img);
    }

    #[test]
    fn test_load_missing_file_is_acquisition_error() {
        let err = load_image(Path::new("no/such/image.png")).unwrap_err();
        assert!(err.is_acquisition_failure());
    }
}
