//! Semantic segmentation data module
//!
//! Palette generation, label image decoding, pixel normalization, and the Pascal VOC
//! loader that ties them together.

pub mod colormap;
pub mod common;
pub mod config;
pub mod dataset;
pub mod label_codec;
pub mod normalize;
pub mod reader;

pub use common::{
    ClassMap,
    Datum,
    RgbImageData,
    Result,
    SegmentationError,
    UNLABELED,
};

pub use colormap::{
    Palette,
    generate_colormap,
};

pub use config::{
    DatasetConfig,
    DatasetConfigBuilder,
    RoundingPolicy,
    VOC_LABEL_NAMES,
    VOC_MEAN_BGR,
};

pub use label_codec::{
    LabelCodec,
    decode_with_palette,
};

pub use normalize::PixelNormalizer;

pub use reader::{
    ImageCrateReader,
    ImageReader,
};

pub use dataset::{
    DataSplit,
    ExampleFiles,
    PascalVocDataset,
};
