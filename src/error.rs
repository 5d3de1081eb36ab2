use thiserror::Error;

use crate::geometry::Rect;

#[derive(Debug, Error)]
pub enum SckError {
    #[error("{0}")]
    Error(String),
    #[error("ScreenCaptureKit is not supported on this platform")]
    NotSupported,
    #[error("No displays found")]
    NoDisplays,
    #[error("Invalid dimensions {width}x{height}, width and height must be > 0")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("Image allocation failed for {width}x{height}")]
    ImageAllocation { width: u32, height: u32 },
    #[error("Capture failed for region {0}")]
    CaptureFailed(Rect),

    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl SckError {
    pub fn new<S: ToString>(err: S) -> Self {
        SckError::Error(err.to_string())
    }
}

pub type SckResult<T> = Result<T, SckError>;
