use crate::core::{DetectError, ImageSource};
use crate::utils::load_image;
use image::RgbImage;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads an image from local storage.
#[derive(Debug, Clone)]
pub struct FileImageSource {
    path: PathBuf,
}

impl FileImageSource {
    /// Creates a source for the image at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the image file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSource for FileImageSource {
    fn acquire(&self) -> Result<RgbImage, DetectError> {
        debug!(path = %self.path.display(), "reading image file");
        load_image(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
