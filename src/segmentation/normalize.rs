//! Conversion between 8-bit RGB images and mean-subtracted BGR CHW model input

use tracing::trace;

use crate::segmentation::common::error::{Result, SegmentationError};
use crate::segmentation::common::types::{Datum, RgbImageData};
use crate::segmentation::config::{DatasetConfig, RoundingPolicy};

#[derive(Debug, Clone, Copy)]
pub struct PixelNormalizer {
    mean_bgr: [f32; 3],
    rounding: RoundingPolicy,
}

impl PixelNormalizer {
    pub fn new(config: &DatasetConfig) -> Self {
        Self {
            mean_bgr: config.mean_bgr,
            rounding: config.rounding,
        }
    }

    /// RGB HWC u8 -> BGR CHW f32 with the configured mean subtracted.
    ///
    /// # Errors
    ///
    /// * `InvalidBufferLength` - the image does not hold `3 * width * height` samples
    pub fn to_datum(&self, img: &RgbImageData) -> Result<Datum> {
        let plane = img.width * img.height;
        if img.data.len() != plane * 3 {
            return Err(SegmentationError::InvalidBufferLength {
                expected: plane * 3,
                actual: img.data.len(),
            });
        }

        let mut data = vec![0.0f32; plane * Datum::CHANNELS];
        for (i, px) in img.data.chunks_exact(3).enumerate() {
            // output channel c is BGR, so it reads RGB channel 2 - c
            for c in 0..Datum::CHANNELS {
                data[c * plane + i] = px[2 - c] as f32 - self.mean_bgr[c];
            }
        }

        trace!(width = img.width, height = img.height, "Image converted to datum");
        Ok(Datum {
            width: img.width,
            height: img.height,
            data,
        })
    }

    /// Inverse of [`PixelNormalizer::to_datum`], rounding per the configured policy.
    ///
    /// # Errors
    ///
    /// * `InvalidBufferLength` - the datum does not hold `3 * width * height` values
    pub fn to_image(&self, datum: &Datum) -> Result<RgbImageData> {
        let plane = datum.width * datum.height;
        if datum.data.len() != plane * Datum::CHANNELS {
            return Err(SegmentationError::InvalidBufferLength {
                expected: plane * Datum::CHANNELS,
                actual: datum.data.len(),
            });
        }

        let mut data = Vec::with_capacity(plane * 3);
        for i in 0..plane {
            for rgb in 0..3 {
                let c = 2 - rgb;
                let value = datum.data[c * plane + i] + self.mean_bgr[c];
                data.push(self.rounding.to_u8(value));
            }
        }

        Ok(RgbImageData {
            width: datum.width,
            height: datum.height,
            data,
        })
    }
}
