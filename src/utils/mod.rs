//! Utility functions shared by the image sources.

pub mod image;

pub use image::{decode_image_bytes, dynamic_to_rgb, load_image};
