use std::path::PathBuf;

/// Unified error type for all imgconv operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No input image selected")]
    NoInputSelected,

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid file path: {0}")]
    InvalidPath(PathBuf),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("{0}")]
    ConversionError(String),
}

impl Error {
    /// Collapse a decode/encode/write failure into the single error the user sees.
    pub fn into_conversion(self) -> Self {
        match self {
            Self::ConversionError(_) | Self::NoInputSelected => self,
            Self::Io(e) => Self::ConversionError(e.to_string()),
            Self::ImageError(e) => Self::ConversionError(e.to_string()),
            other => Self::ConversionError(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
