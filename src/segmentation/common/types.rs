//! Pixel containers shared across the segmentation pipeline

use crate::segmentation::common::error::{Result, SegmentationError};

/// Class index written for pixels whose color matches no palette entry.
pub const UNLABELED: i32 = -1;

/// 8-bit RGB image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...], row-major
    pub data: Vec<u8>,
}

impl RgbImageData {
    /// Wraps an interleaved RGB buffer, checking it holds exactly `width * height` pixels.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(SegmentationError::InvalidBufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Image of a single color.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        let data = rgb.iter().copied().cycle().take(width * height * 3).collect();
        Self { width, height, data }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * 3;
        let px = self.data.get(offset..offset + 3)?;
        Some([px[0], px[1], px[2]])
    }

    pub fn put_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = (y * self.width + x) * 3;
        if let Some(px) = self.data.get_mut(offset..offset + 3) {
            px.copy_from_slice(&rgb);
        }
    }
}

impl From<image::RgbImage> for RgbImageData {
    fn from(img: image::RgbImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

/// Dense per-pixel class indices, same spatial size as the label image it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMap {
    pub width: usize,
    pub height: usize,
    /// Row-major class indices, `UNLABELED` where no palette color matched
    pub data: Vec<i32>,
}

impl ClassMap {
    pub fn unlabeled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![UNLABELED; width * height],
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<i32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Pixel count per class index in `0..num_classes`.
    ///
    /// Unlabeled pixels and indices outside the range are not counted; see
    /// [`ClassMap::unlabeled_count`].
    pub fn class_histogram(&self, num_classes: usize) -> Vec<usize> {
        let mut counts = vec![0usize; num_classes];
        for &label in &self.data {
            if label >= 0 && (label as usize) < num_classes {
                counts[label as usize] += 1;
            }
        }
        counts
    }

    pub fn unlabeled_count(&self) -> usize {
        self.data.iter().filter(|&&l| l == UNLABELED).count()
    }
}

/// Normalized model input: BGR, mean-subtracted, channel-first (C, H, W)
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    pub width: usize,
    pub height: usize,
    /// Planar data: all B values, then all G, then all R
    pub data: Vec<f32>,
}

impl Datum {
    pub const CHANNELS: usize = 3;

    /// Shape as (channels, height, width).
    pub fn shape(&self) -> (usize, usize, usize) {
        (Self::CHANNELS, self.height, self.width)
    }

    /// One channel plane in BGR order (0 = B, 1 = G, 2 = R).
    pub fn channel(&self, c: usize) -> Option<&[f32]> {
        if c >= Self::CHANNELS {
            return None;
        }
        let plane = self.width * self.height;
        self.data.get(c * plane..(c + 1) * plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_short_buffer() {
        let result = RgbImageData::new(2, 2, vec![0u8; 11]);
        assert!(matches!(
            result,
            Err(SegmentationError::InvalidBufferLength { expected: 12, actual: 11 })
        ));
    }

    #[test]
    fn test_pixel_access() {
        let mut img = RgbImageData::filled(3, 2, [1, 2, 3]);
        img.put_pixel(2, 1, [9, 8, 7]);

        assert_eq!(img.pixel(0, 0), Some([1, 2, 3]));
        assert_eq!(img.pixel(2, 1), Some([9, 8, 7]));
        assert_eq!(img.pixel(3, 0), None);
    }

    #[test]
    fn test_pixel_access_short_buffer() {
        let mut img = RgbImageData {
            width: 2,
            height: 2,
            data: vec![7u8; 5],
        };
        img.put_pixel(1, 1, [1, 2, 3]);

        assert_eq!(img.pixel(0, 0), Some([7, 7, 7]));
        assert_eq!(img.pixel(1, 0), None);
        assert_eq!(img.pixel(1, 1), None);
        assert_eq!(img.data, vec![7u8; 5]);
    }

    #[test]
    fn test_class_map_get_short_buffer() {
        let map = ClassMap {
            width: 2,
            height: 2,
            data: vec![0, 1, 2],
        };

        assert_eq!(map.get(0, 1), Some(2));
        assert_eq!(map.get(1, 1), None);
    }

    #[test]
    fn test_from_image_crate() {
        let img = image::RgbImage::from_pixel(4, 3, image::Rgb([10, 20, 30]));
        let data = RgbImageData::from(img);

        assert_eq!(data.dimensions(), (4, 3));
        assert_eq!(data.pixel(3, 2), Some([10, 20, 30]));
    }

    #[test]
    fn test_class_histogram() {
        let map = ClassMap {
            width: 3,
            height: 2,
            data: vec![0, 0, 1, UNLABELED, 2, 7],
        };

        assert_eq!(map.class_histogram(3), vec![2, 1, 1]);
        assert_eq!(map.unlabeled_count(), 1);
        assert_eq!(map.get(1, 1), Some(2));
    }

    #[test]
    fn test_datum_channel_planes() {
        let datum = Datum {
            width: 2,
            height: 1,
            data: vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        };

        assert_eq!(datum.shape(), (3, 1, 2));
        assert_eq!(datum.channel(1), Some(&[2.0, 3.0][..]));
        assert_eq!(datum.channel(3), None);
    }
}
