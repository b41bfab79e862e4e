use crate::core::{DetectError, ImageSource};
use crate::utils::decode_image_bytes;
use image::RgbImage;
use std::io::Read;

/// Decodes an encoded image held in memory.
///
/// This is the provider to use when a host application hands over an already
/// opened byte stream (a content resolver, an upload, a picker result).
#[derive(Debug, Clone)]
pub struct BytesImageSource {
    bytes: Vec<u8>,
    label: String,
}

impl BytesImageSource {
    /// Wraps encoded image bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            label: "in-memory image".to_string(),
        }
    }

    /// Reads a whole stream into memory.
    ///
    /// A read failure is reported as an acquisition error.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, DetectError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| DetectError::image_acquisition("stream", e))?;
        Ok(Self::new(bytes).with_label("stream"))
    }

    /// Sets the label used in logs and errors.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl ImageSource for BytesImageSource {
    fn acquire(&self) -> Result<RgbImage, DetectError> {
        decode_image_bytes(&self.bytes, &self.label)
    }

    fn describe(&self) -> String {
        format!("{} ({} bytes)", self.label, self.bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb};
    use std::io::Cursor;

    #[test]
    fn test_bytes_source_decodes_jpeg() {
        let img = RgbImage::from_pixel(16, 16, Rgb([128, 128, 128]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Jpeg).unwrap();

        let source = BytesImageSource::from_reader(Cursor::new(buf.into_inner())).unwrap();
        let decoded = source.acquire().unwrap();
        assert_eq!(decoded.dimensions(), (16, 16));
        assert!(source.describe().starts_with("stream"));
    }

    #[test]
    fn test_bytes_source_rejects_garbage() {
        let source = BytesImageSource::new(b"definitely not an image".to_vec());
        assert!(source.acquire().unwrap_err().is_acquisition_failure());
    }
}
