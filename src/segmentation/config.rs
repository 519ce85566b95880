//! Dataset configuration types

/// Pascal VOC 2012 class names, background first.
pub const VOC_LABEL_NAMES: [&str; 21] = [
    "background",
    "aeroplane",
    "bicycle",
    "bird",
    "boat",
    "bottle",
    "bus",
    "car",
    "cat",
    "chair",
    "cow",
    "diningtable",
    "dog",
    "horse",
    "motorbike",
    "person",
    "potted plant",
    "sheep",
    "sofa",
    "train",
    "tv/monitor",
];

/// Per-channel mean of the VOC training images, in BGR order.
pub const VOC_MEAN_BGR: [f32; 3] = [104.006_99, 116.668_77, 122.678_91];

/// How `to_image` turns floats back into 8-bit samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingPolicy {
    /// Round to nearest, then clamp to 0..=255. Exact round-trip for every u8 input.
    #[default]
    Nearest,
    /// Clamp, then truncate toward zero. May come back one below the input
    /// when the mean add/subtract loses precision.
    Truncate,
}

impl RoundingPolicy {
    pub fn to_u8(self, value: f32) -> u8 {
        match self {
            RoundingPolicy::Nearest => value.round().clamp(0.0, 255.0) as u8,
            RoundingPolicy::Truncate => value.clamp(0.0, 255.0) as u8,
        }
    }
}

/// Configuration shared by the label codec, the normalizer and the dataset loader
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Ordered class names; only the count drives the palette size
    pub label_names: Vec<String>,
    /// Mean subtracted from each channel, BGR order
    pub mean_bgr: [f32; 3],
    /// Rounding used when converting a datum back to an image
    pub rounding: RoundingPolicy,
    /// Whether to reject zero-sized images and mismatched image/label pairs
    pub validate_dimensions: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::pascal_voc_2012()
    }
}

impl DatasetConfig {
    pub fn pascal_voc_2012() -> Self {
        Self {
            label_names: VOC_LABEL_NAMES.iter().map(|s| s.to_string()).collect(),
            mean_bgr: VOC_MEAN_BGR,
            rounding: RoundingPolicy::default(),
            validate_dimensions: true,
        }
    }

    pub fn builder() -> DatasetConfigBuilder {
        DatasetConfigBuilder::default()
    }

    pub fn num_classes(&self) -> usize {
        self.label_names.len()
    }
}

/// Builder for DatasetConfig
#[derive(Default)]
pub struct DatasetConfigBuilder {
    label_names: Option<Vec<String>>,
    mean_bgr: Option<[f32; 3]>,
    rounding: Option<RoundingPolicy>,
    validate_dimensions: Option<bool>,
}

impl DatasetConfigBuilder {
    pub fn label_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn mean_bgr(mut self, mean_bgr: [f32; 3]) -> Self {
        self.mean_bgr = Some(mean_bgr);
        self
    }

    pub fn rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = Some(rounding);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> DatasetConfig {
        let default = DatasetConfig::default();
        DatasetConfig {
            label_names: self.label_names.unwrap_or(default.label_names),
            mean_bgr: self.mean_bgr.unwrap_or(default.mean_bgr),
            rounding: self.rounding.unwrap_or(default.rounding),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_voc() {
        let config = DatasetConfig::default();

        assert_eq!(config.num_classes(), 21);
        assert_eq!(config.label_names[0], "background");
        assert_eq!(config.label_names[20], "tv/monitor");
        assert_eq!(config.rounding, RoundingPolicy::Nearest);
        assert!(config.validate_dimensions);
    }

    #[test]
    fn test_config_builder() {
        let config = DatasetConfig::builder()
            .label_names(["background", "road"])
            .mean_bgr([1.0, 2.0, 3.0])
            .rounding(RoundingPolicy::Truncate)
            .validate_dimensions(false)
            .build();

        assert_eq!(config.label_names, vec!["background".to_string(), "road".to_string()]);
        assert_eq!(config.mean_bgr, [1.0, 2.0, 3.0]);
        assert_eq!(config.rounding, RoundingPolicy::Truncate);
        assert!(!config.validate_dimensions);
    }

    #[test]
    fn test_builder_falls_back_to_defaults() {
        let config = DatasetConfig::builder().mean_bgr([0.0; 3]).build();

        assert_eq!(config.num_classes(), 21);
        assert_eq!(config.mean_bgr, [0.0; 3]);
    }

    #[test]
    fn test_rounding_policies() {
        assert_eq!(RoundingPolicy::Nearest.to_u8(254.9999), 255);
        assert_eq!(RoundingPolicy::Truncate.to_u8(254.9999), 254);
        assert_eq!(RoundingPolicy::Nearest.to_u8(-3.0), 0);
        assert_eq!(RoundingPolicy::Truncate.to_u8(300.0), 255);
    }
}
