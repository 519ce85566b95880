//! Label colormap generation
//!
//! Builds the Pascal VOC style palette: the bits of each class index are spread over the
//! high bits of the three channels, three bits per round, so neighbouring indices land on
//! visibly different colors.

use tracing::trace;

use crate::segmentation::common::error::{Result, SegmentationError};

/// Ordered class colors; entry `i` is the color of class index `i`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Palette from explicit colors. Duplicates are allowed; the label codec resolves
    /// them in favour of the higher index.
    pub fn from_colors(colors: Vec<[u8; 3]>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<[u8; 3]> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8; 3]> {
        self.colors.iter()
    }

    /// Colors scaled to [0, 1].
    pub fn normalized(&self) -> Vec<[f32; 3]> {
        self.colors
            .iter()
            .map(|c| [c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0])
            .collect()
    }
}

fn bit(value: usize, idx: u32) -> u8 {
    ((value >> idx) & 1) as u8
}

fn label_color(index: usize) -> [u8; 3] {
    let mut id = index;
    let (mut r, mut g, mut b) = (0u8, 0u8, 0u8);
    for j in 0..8 {
        r |= bit(id, 0) << (7 - j);
        g |= bit(id, 1) << (7 - j);
        b |= bit(id, 2) << (7 - j);
        id >>= 3;
    }
    [r, g, b]
}

/// Generates the colormap for `n` classes.
///
/// Deterministic for a given `n`. Index 0 is always black.
///
/// # Errors
///
/// * `DegenerateClassList` - `n` is zero
pub fn generate_colormap(n: usize) -> Result<Palette> {
    if n == 0 {
        return Err(SegmentationError::DegenerateClassList);
    }
    trace!(n, "Generating label colormap");
    Ok(Palette {
        colors: (0..n).map(label_color).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_length_matches_request() {
        for n in [1, 2, 21, 256] {
            assert_eq!(generate_colormap(n).unwrap().len(), n);
        }
    }

    #[test]
    fn test_zero_classes_rejected() {
        assert!(matches!(
            generate_colormap(0),
            Err(SegmentationError::DegenerateClassList)
        ));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate_colormap(21).unwrap(), generate_colormap(21).unwrap());
    }

    #[test]
    fn test_background_is_black() {
        let palette = generate_colormap(21).unwrap();
        assert_eq!(palette.get(0), Some([0, 0, 0]));
    }

    #[test]
    fn test_known_voc_colors() {
        let palette = generate_colormap(21).unwrap();

        assert_eq!(palette.get(1), Some([128, 0, 0]));
        assert_eq!(palette.get(2), Some([0, 128, 0]));
        assert_eq!(palette.get(3), Some([128, 128, 0]));
        assert_eq!(palette.get(4), Some([0, 0, 128]));
        assert_eq!(palette.get(8), Some([64, 0, 0]));
        assert_eq!(palette.get(15), Some([192, 128, 128]));
        assert_eq!(palette.get(20), Some([0, 64, 128]));
    }

    #[test]
    fn test_colors_are_distinct() {
        let palette = generate_colormap(256).unwrap();
        let unique: HashSet<_> = palette.iter().collect();
        assert_eq!(unique.len(), 256);
    }

    #[test]
    fn test_prefix_stable_across_sizes() {
        let small = generate_colormap(21).unwrap();
        let large = generate_colormap(256).unwrap();
        assert_eq!(small.colors(), &large.colors()[..21]);
    }

    #[test]
    fn test_normalized_scales_back_exactly() {
        let palette = generate_colormap(21).unwrap();
        for (norm, raw) in palette.normalized().iter().zip(palette.iter()) {
            for c in 0..3 {
                assert!((0.0..=1.0).contains(&norm[c]));
                assert_eq!((norm[c] * 255.0).round() as u8, raw[c]);
            }
        }
    }
}
