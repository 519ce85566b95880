use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::segmentation::{
    common::error::{Result, SegmentationError},
    common::types::{ClassMap, Datum},
    config::DatasetConfig,
    label_codec::LabelCodec,
    normalize::PixelNormalizer,
    reader::{ImageCrateReader, ImageReader},
};

/// Segmentation split listed under `ImageSets/Segmentation`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSplit {
    Train,
    Val,
    TrainVal,
}

impl DataSplit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSplit::Train => "train",
            DataSplit::Val => "val",
            DataSplit::TrainVal => "trainval",
        }
    }
}

impl fmt::Display for DataSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DataSplit {
    type Err = SegmentationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "train" => Ok(DataSplit::Train),
            "val" => Ok(DataSplit::Val),
            "trainval" => Ok(DataSplit::TrainVal),
            other => Err(SegmentationError::UnknownSplit(other.to_string())),
        }
    }
}

/// Image and label paths of one example
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleFiles {
    pub img: PathBuf,
    pub label_rgb: PathBuf,
}

pub struct PascalVocDataset<R: ImageReader> {
    reader: R,
    files: Vec<ExampleFiles>,
    config: DatasetConfig,
    codec: LabelCodec,
    normalizer: PixelNormalizer,
}

impl PascalVocDataset<ImageCrateReader> {
    /// Loads the example list for `split` from a `VOC2012` directory.
    #[instrument(skip(root, config), fields(root = %root.as_ref().display()))]
    pub fn new<P: AsRef<Path>>(root: P, split: DataSplit, config: DatasetConfig) -> Result<Self> {
        let files = Self::list_files(root.as_ref(), split)?;
        info!(split = %split, examples = files.len(), "Loaded dataset index");
        Ok(Self::with_custom(ImageCrateReader, files, config))
    }

    /// Reads `ImageSets/Segmentation/{split}.txt` and resolves each id to its
    /// `JPEGImages` photo and `SegmentationClass` mask.
    pub fn list_files(root: &Path, split: DataSplit) -> Result<Vec<ExampleFiles>> {
        let index_file = root
            .join("ImageSets")
            .join("Segmentation")
            .join(format!("{split}.txt"));
        let contents = std::fs::read_to_string(&index_file).map_err(|e| {
            SegmentationError::InputReadError(format!("{}: {}", index_file.display(), e))
        })?;

        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| ExampleFiles {
                img: root.join("JPEGImages").join(format!("{id}.jpg")),
                label_rgb: root.join("SegmentationClass").join(format!("{id}.png")),
            })
            .collect())
    }
}

impl<R: ImageReader> PascalVocDataset<R> {
    pub fn with_custom(reader: R, files: Vec<ExampleFiles>, config: DatasetConfig) -> Self {
        Self {
            reader,
            files,
            codec: LabelCodec::new(&config),
            normalizer: PixelNormalizer::new(&config),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[ExampleFiles] {
        &self.files
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    pub fn label_names(&self) -> &[String] {
        self.codec.label_names()
    }

    pub fn normalizer(&self) -> &PixelNormalizer {
        &self.normalizer
    }

    fn validate_dimensions(&self, img: (usize, usize), label: (usize, usize)) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if img.0 == 0 || img.1 == 0 {
            return Err(SegmentationError::InvalidDimensions(img.0, img.1));
        }

        if img != label {
            return Err(SegmentationError::ShapeMismatch {
                expected: img,
                actual: label,
            });
        }

        Ok(())
    }

    /// Loads example `i` as (normalized image, class map).
    #[instrument(skip(self))]
    pub fn get_example(&self, i: usize) -> Result<(Datum, ClassMap)> {
        let files = self.files.get(i).ok_or(SegmentationError::IndexOutOfRange {
            index: i,
            len: self.files.len(),
        })?;

        let img = {
            let _span = tracing::debug_span!("read_image").entered();
            self.reader.read_rgb(&files.img)?
        };
        let label_rgb = {
            let _span = tracing::debug_span!("read_label").entered();
            self.reader.read_rgb(&files.label_rgb)?
        };

        self.validate_dimensions(img.dimensions(), label_rgb.dimensions())?;

        let datum = self.normalizer.to_datum(&img)?;
        let label = self.codec.decode(&label_rgb)?;

        debug!(
            width = img.width,
            height = img.height,
            unlabeled = label.unlabeled_count(),
            "Example loaded"
        );
        Ok((datum, label))
    }
}
