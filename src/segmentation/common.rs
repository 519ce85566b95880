//! Common types module
//!
//! Error definitions and the pixel containers shared by the codec, normalizer and dataset.

pub mod error;
pub mod types;

pub use error::{SegmentationError, Result};
pub use types::{ClassMap, Datum, RgbImageData, UNLABELED};
