//! RGB label image to class-index map conversion

use std::collections::HashMap;

use image::DynamicImage;
use tracing::{debug, instrument};

use crate::segmentation::colormap::{Palette, generate_colormap};
use crate::segmentation::common::error::{Result, SegmentationError};
use crate::segmentation::common::types::{ClassMap, RgbImageData};
use crate::segmentation::config::DatasetConfig;

/// Converts color-coded label images into class-index maps.
///
/// The palette is rebuilt from the number of configured class names on every call.
#[derive(Debug, Clone)]
pub struct LabelCodec {
    label_names: Vec<String>,
}

impl LabelCodec {
    pub fn new(config: &DatasetConfig) -> Self {
        Self {
            label_names: config.label_names.clone(),
        }
    }

    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }

    /// Maps every pixel to the index of the palette color it equals, or `UNLABELED`.
    ///
    /// # Errors
    ///
    /// * `DegenerateClassList` - the codec was configured with no class names
    #[instrument(skip(self, label_rgb), fields(width = label_rgb.width, height = label_rgb.height))]
    pub fn decode(&self, label_rgb: &RgbImageData) -> Result<ClassMap> {
        let palette = generate_colormap(self.label_names.len())?;
        decode_with_palette(label_rgb, &palette)
    }

    /// Same as [`LabelCodec::decode`] for an already decoded image of any pixel type.
    ///
    /// # Errors
    ///
    /// * `InvalidInputType` - the image is not 8-bit RGB
    pub fn decode_dynamic(&self, label: &DynamicImage) -> Result<ClassMap> {
        match label {
            DynamicImage::ImageRgb8(rgb) => self.decode(&RgbImageData::from(rgb.clone())),
            other => Err(SegmentationError::InvalidInputType(format!(
                "label image must be 8-bit RGB, got {:?}",
                other.color()
            ))),
        }
    }
}

/// Decodes `label_rgb` against an explicit palette.
///
/// Classes are applied in ascending index order, so when two palette entries share a color
/// the higher index wins.
pub fn decode_with_palette(label_rgb: &RgbImageData, palette: &Palette) -> Result<ClassMap> {
    let expected = label_rgb.width * label_rgb.height * 3;
    if label_rgb.data.len() != expected {
        return Err(SegmentationError::InvalidBufferLength {
            expected,
            actual: label_rgb.data.len(),
        });
    }

    let mut lookup: HashMap<[u8; 3], i32> = HashMap::with_capacity(palette.len());
    for (index, color) in palette.iter().enumerate() {
        lookup.insert(*color, index as i32);
    }

    let mut class_map = ClassMap::unlabeled(label_rgb.width, label_rgb.height);
    for (cell, px) in class_map.data.iter_mut().zip(label_rgb.data.chunks_exact(3)) {
        if let Some(&index) = lookup.get(&[px[0], px[1], px[2]]) {
            *cell = index;
        }
    }

    debug!(
        classes = palette.len(),
        unlabeled = class_map.unlabeled_count(),
        "Decoded label image"
    );
    Ok(class_map)
}
