//! Image reader backed by the `image` crate.
//!
//! Handles JPEG photos and PNG label masks. Paletted PNGs (as VOC ships its
//! `SegmentationClass` masks) are expanded to RGB, so the palette colors come through
//! unchanged for the label codec.

use std::io::Cursor;
use std::path::Path;

use tracing::debug;

use crate::segmentation::common::error::{Result, SegmentationError};
use crate::segmentation::common::types::RgbImageData;
use crate::segmentation::reader::ImageReader;

pub struct ImageCrateReader;

impl ImageCrateReader {
    /// Decodes an in-memory encoded image to RGB.
    pub fn decode_rgb(&self, data: &[u8]) -> Result<RgbImageData> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::ImageReader::new(Cursor::new(data))
            .with_guessed_format()?
            .decode()
            .map_err(|e| SegmentationError::DecodeError(e.to_string()))?;

        let rgb = decoded.to_rgb8();
        debug!("Decoded image: {}x{}", rgb.width(), rgb.height());
        Ok(RgbImageData::from(rgb))
    }
}

impl ImageReader for ImageCrateReader {
    fn read_rgb(&self, path: &Path) -> Result<RgbImageData> {
        let data = std::fs::read(path).map_err(|e| {
            SegmentationError::InputReadError(format!("{}: {}", path.display(), e))
        })?;
        self.decode_rgb(&data)
    }
}
