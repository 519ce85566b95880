use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentationError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Invalid input type: {0}")]
    InvalidInputType(String),

    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Invalid buffer length: expected {expected}, got {actual}")]
    InvalidBufferLength { expected: usize, actual: usize },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Colormap requires at least one class")]
    DegenerateClassList,

    #[error("Example index {index} out of range for dataset of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown split '{0}', expected train, val or trainval")]
    UnknownSplit(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SegmentationError>;
