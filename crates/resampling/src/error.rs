//! Error types for raster resampling.

use thiserror::Error;

/// Errors that can occur while resampling a raster.
///
/// Missing data is never an error: it travels through the kernels as NaN.
/// These variants cover genuine failures of the raster source or of the
/// caller's inputs.
#[derive(Error, Debug)]
pub enum ResamplingError {
    /// A sample coordinate lies outside the raster.
    #[error("sample ({x}, {y}) is outside raster of {width}x{height}")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// The raster data does not match its declared dimensions.
    #[error("raster data has {actual} values, expected {expected}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// The sample buffer handed to a raster has the wrong size.
    #[error("sample buffer has {actual} slots, expected {expected}")]
    SampleBufferMismatch { expected: usize, actual: usize },

    /// The requested target grid is degenerate.
    #[error("invalid target grid: {0}")]
    InvalidTarget(String),

    /// The raster source failed to deliver samples.
    #[error("failed to read raster samples: {0}")]
    ReadFailed(String),
}

impl ResamplingError {
    /// Create an OutOfBounds error.
    pub fn out_of_bounds(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a ReadFailed error.
    pub fn read_failed(msg: impl Into<String>) -> Self {
        Self::ReadFailed(msg.into())
    }

    /// Create an InvalidTarget error.
    pub fn invalid_target(msg: impl Into<String>) -> Self {
        Self::InvalidTarget(msg.into())
    }
}

impl From<std::io::Error> for ResamplingError {
    fn from(err: std::io::Error) -> Self {
        Self::ReadFailed(err.to_string())
    }
}

/// Result type for resampling operations.
pub type Result<T> = std::result::Result<T, ResamplingError>;
