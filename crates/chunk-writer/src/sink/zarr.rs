//! Zarr V3 chunk sink.

use std::sync::Arc;

use zarrs::array::codec::bytes_to_bytes::blosc::{
    BloscCodec, BloscCompressionLevel, BloscCompressor, BloscShuffleMode,
};
use zarrs::array::{Array, ArrayBuilder, DataType, FillValue};
use zarrs::array_subset::ArraySubset;
use zarrs::storage::{ReadableStorageTraits, WritableStorageTraits};

use crate::config::{ChunkWriterConfig, ZarrCompression};
use crate::error::{ChunkWriterError, Result};
use crate::rect::Rect;
use crate::sink::ChunkSink;

/// Writes chunks into a 2-D `float32` Zarr V3 array.
///
/// The array's chunk grid equals the writer's, so each flushed chunk maps
/// onto exactly one stored chunk. Unwritten pixels read back as NaN.
pub struct ZarrChunkSink<S> {
    array: Array<S>,
    chunks_written: usize,
    bytes_written: u64,
}

impl<S: ReadableStorageTraits + WritableStorageTraits + 'static> ZarrChunkSink<S> {
    /// Create the array at `path` and store its metadata.
    ///
    /// # Arguments
    /// * `storage` - The storage backend to write to (must be readable AND writable)
    /// * `path` - Path for the Zarr array (e.g., "/")
    /// * `scene_width` / `scene_height` - Array shape in pixels
    /// * `config` - Chunk size and compression settings
    /// * `attributes` - User attributes stored with the array
    pub fn create(
        storage: S,
        path: &str,
        scene_width: usize,
        scene_height: usize,
        config: &ChunkWriterConfig,
        attributes: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self> {
        config.validate().map_err(ChunkWriterError::ConfigError)?;

        let chunk_grid: zarrs::array::ChunkGrid =
            vec![config.chunk_height as u64, config.chunk_width as u64]
                .try_into()
                .map_err(|e| ChunkWriterError::config(format!("{:?}", e)))?;

        let mut binding = ArrayBuilder::new(
            vec![scene_height as u64, scene_width as u64], // shape [rows, cols]
            DataType::Float32,
            chunk_grid,
            FillValue::from(f32::NAN),
        );
        let mut builder = binding.attributes(attributes);

        if config.zarr_compression != ZarrCompression::None {
            builder = builder.bytes_to_bytes_codecs(vec![compression_codec(config)?]);
        }

        let array = builder
            .build(Arc::new(storage), path)
            .map_err(|e| ChunkWriterError::storage_error(e.to_string()))?;
        array
            .store_metadata()
            .map_err(|e| ChunkWriterError::storage_error(e.to_string()))?;

        tracing::debug!(
            path,
            shape = ?(scene_width, scene_height),
            chunk = ?(config.chunk_width, config.chunk_height),
            compression = %config.zarr_compression,
            "Created Zarr array"
        );

        Ok(Self {
            array,
            chunks_written: 0,
            bytes_written: 0,
        })
    }

    /// The underlying array.
    pub fn array(&self) -> &Array<S> {
        &self.array
    }

    /// Number of chunks stored.
    pub fn chunks_written(&self) -> usize {
        self.chunks_written
    }

    /// Uncompressed bytes stored.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl<S: ReadableStorageTraits + WritableStorageTraits + 'static> ChunkSink<f32> for ZarrChunkSink<S> {
    fn write_chunk(&mut self, rect: Rect, data: &[f32]) -> Result<()> {
        let subset = ArraySubset::new_with_start_shape(
            vec![rect.y as u64, rect.x as u64],
            vec![rect.height as u64, rect.width as u64],
        )
        .map_err(|e| ChunkWriterError::storage_error(e.to_string()))?;

        self.array
            .store_array_subset_elements(&subset, data)
            .map_err(|e| ChunkWriterError::storage_error(e.to_string()))?;

        self.chunks_written += 1;
        self.bytes_written += std::mem::size_of_val(data) as u64;
        Ok(())
    }
}

fn compression_codec(
    config: &ChunkWriterConfig,
) -> Result<Arc<dyn zarrs::array::codec::BytesToBytesCodecTraits>> {
    let level = BloscCompressionLevel::try_from(config.zarr_compression_level)
        .map_err(|_| ChunkWriterError::config("Invalid compression level"))?;

    let (shuffle, typesize) = if config.zarr_shuffle {
        (BloscShuffleMode::Shuffle, Some(std::mem::size_of::<f32>()))
    } else {
        (BloscShuffleMode::NoShuffle, None)
    };

    let compressor = match config.zarr_compression {
        ZarrCompression::None => {
            return Err(ChunkWriterError::config("No compression configured"));
        }
        ZarrCompression::BloscLz4 => BloscCompressor::LZ4,
        ZarrCompression::BloscZstd => BloscCompressor::Zstd,
    };

    let codec = BloscCodec::new(compressor, level, None, shuffle, typesize)
        .map_err(|e| ChunkWriterError::config(e.to_string()))?;
    Ok(Arc::new(codec))
}
