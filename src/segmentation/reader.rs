//! Image reading module
//!
//! Decoding of image files on disk into 8-bit RGB pixel grids.

mod image_crate_reader;

pub use image_crate_reader::ImageCrateReader;

use std::path::Path;

use crate::segmentation::common::error::Result;
use crate::segmentation::common::types::RgbImageData;

pub trait ImageReader {
    /// Reads the file at `path` as 8-bit RGB, converting from whatever it was stored as.
    fn read_rgb(&self, path: &Path) -> Result<RgbImageData>;
}
