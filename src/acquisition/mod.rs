//! Image acquisition.
//!
//! Every provider implements [`ImageSource`](crate::core::ImageSource) and
//! yields a decoded [`RgbImage`](image::RgbImage). The pipeline does not care
//! which provider it was handed:
//!
//! * [`FileImageSource`] - an image file on local storage
//! * [`BytesImageSource`] - encoded image bytes already in memory
//! * [`UrlImageSource`] - an image fetched over HTTP(S)
//! * [`ImageLocation`] - picks the file or URL provider from a string

mod bytes;
mod file;
mod location;
mod url;

pub use bytes::BytesImageSource;
pub use file::FileImageSource;
pub use location::ImageLocation;
pub use url::UrlImageSource;
