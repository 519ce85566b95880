//! Dataset loading module
//!
//! Enumerates image/label pairs from the Pascal VOC 2012 directory layout and turns each
//! pair into a model-ready datum plus class map.

mod pascal_voc;


pub use pascal_voc::{DataSplit, ExampleFiles, PascalVocDataset};
