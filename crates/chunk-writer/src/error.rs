//! Error types for chunked raster writing.

use thiserror::Error;

use crate::rect::Rect;

/// Errors that can occur while accumulating or flushing chunks.
#[derive(Error, Debug)]
pub enum ChunkWriterError {
    /// Invalid writer geometry or configuration.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// The data buffer does not match the region size.
    #[error("region {region} needs {expected} values, got {actual}")]
    DataLengthMismatch {
        region: Rect,
        expected: usize,
        actual: usize,
    },

    /// The region is not inside the scene.
    #[error("region {region} is outside scene {scene}")]
    OutOfBounds { region: Rect, scene: Rect },

    /// The region covers pixels of a partial chunk that were already written.
    #[error("region {region} overlaps data already written to chunk ({chunk_x}, {chunk_y})")]
    OverlappingWrite {
        chunk_x: usize,
        chunk_y: usize,
        region: Rect,
    },

    /// The region touches a chunk that has already been flushed.
    #[error("chunk ({chunk_x}, {chunk_y}) has already been written")]
    ChunkAlreadyWritten { chunk_x: usize, chunk_y: usize },

    /// Partial chunks remained when the writer was finished.
    #[error("{count} chunks were never completely written")]
    IncompleteChunks { count: usize },

    /// The chunk sink failed.
    #[error("chunk sink error: {0}")]
    SinkError(String),

    /// Storage/IO error.
    #[error("storage error: {0}")]
    StorageError(String),
}

impl ChunkWriterError {
    /// Create a ConfigError.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a SinkError.
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::SinkError(msg.into())
    }

    /// Create a StorageError.
    pub fn storage_error(msg: impl Into<String>) -> Self {
        Self::StorageError(msg.into())
    }
}

impl From<std::io::Error> for ChunkWriterError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageError(err.to_string())
    }
}

/// Result type for chunk writer operations.
pub type Result<T> = std::result::Result<T, ChunkWriterError>;
