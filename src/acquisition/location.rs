use super::{FileImageSource, UrlImageSource};
use crate::core::{DetectError, ImageSource};
use image::RgbImage;
use std::path::PathBuf;
use std::time::Duration;

/// Either a local file or a remote URL, chosen from user input.
#[derive(Debug, Clone)]
pub enum ImageLocation {
    /// Local file.
    File(FileImageSource),
    /// Remote URL.
    Url(UrlImageSource),
}

impl ImageLocation {
    /// Strings starting with `http://` or `https://` (case-insensitive) are
    /// treated as URLs, anything else as a file path.
    pub fn parse(input: &str, fetch_timeout: Duration) -> Self {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageLocation::Url(UrlImageSource::new(trimmed).with_timeout(fetch_timeout))
        } else {
            ImageLocation::File(FileImageSource::new(PathBuf::from(trimmed)))
        }
    }

    /// Returns true for the URL variant.
    pub fn is_remote(&self) -> bool {
        matches!(self, ImageLocation::Url(_))
    }
}

impl ImageSource for ImageLocation {
    fn acquire(&self) -> Result<RgbImage, DetectError> {
        match self {
            ImageLocation::File(source) => source.acquire(),
            ImageLocation::Url(source) => source.acquire(),
        }
    }

    fn describe(&self) -> String {
        match self {
            ImageLocation::File(source) => source.describe(),
            ImageLocation::Url(source) => source.describe(),
        }
    }
}
