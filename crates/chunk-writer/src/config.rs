//! Configuration for chunked writing.

use serde::{Deserialize, Serialize};

/// Configuration for a [`ChunkWriter`](crate::ChunkWriter) and its Zarr sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkWriterConfig {
    /// Chunk width in pixels.
    pub chunk_width: usize,

    /// Chunk height in pixels.
    pub chunk_height: usize,

    /// Incoming writes use a bottom-up row order.
    pub y_flipped: bool,

    /// Compression codec for Zarr output.
    pub zarr_compression: ZarrCompression,

    /// Compression level (1-9).
    pub zarr_compression_level: u8,

    /// Enable byte shuffle filter for better compression.
    pub zarr_shuffle: bool,
}

impl Default for ChunkWriterConfig {
    fn default() -> Self {
        Self {
            chunk_width: 512,
            chunk_height: 512,
            y_flipped: false,
            zarr_compression: ZarrCompression::BloscZstd,
            zarr_compression_level: 1,
            zarr_shuffle: true,
        }
    }
}

impl ChunkWriterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("CHUNK_WIDTH") {
            if let Ok(size) = val.parse() {
                config.chunk_width = size;
            }
        }

        if let Ok(val) = std::env::var("CHUNK_HEIGHT") {
            if let Ok(size) = val.parse() {
                config.chunk_height = size;
            }
        }

        if let Ok(val) = std::env::var("CHUNK_Y_FLIPPED") {
            config.y_flipped = parse_flag(&val);
        }

        if let Ok(val) = std::env::var("ZARR_COMPRESSION") {
            match ZarrCompression::parse(&val) {
                Some(compression) => config.zarr_compression = compression,
                None => tracing::warn!(value = %val, "Unknown ZARR_COMPRESSION, keeping default"),
            }
        }

        if let Ok(val) = std::env::var("ZARR_COMPRESSION_LEVEL") {
            if let Ok(level) = val.parse() {
                config.zarr_compression_level = level;
            }
        }

        if let Ok(val) = std::env::var("ZARR_SHUFFLE") {
            config.zarr_shuffle = parse_flag(&val);
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_width == 0 || self.chunk_height == 0 {
            return Err(format!(
                "chunk size must be > 0, got {}x{}",
                self.chunk_width, self.chunk_height
            ));
        }

        if self.zarr_compression != ZarrCompression::None
            && (self.zarr_compression_level == 0 || self.zarr_compression_level > 9)
        {
            return Err("zarr_compression_level must be 1-9".to_string());
        }

        Ok(())
    }
}

fn parse_flag(val: &str) -> bool {
    val.eq_ignore_ascii_case("true") || val == "1"
}

/// Compression codec for Zarr output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZarrCompression {
    /// No compression.
    None,
    /// Blosc with LZ4.
    BloscLz4,
    /// Blosc with Zstd.
    #[default]
    BloscZstd,
}

impl ZarrCompression {
    /// Parse a codec name (case-insensitive). `lz4` and `zstd` select the
    /// Blosc variants.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Self::None),
            "lz4" | "blosc_lz4" => Some(Self::BloscLz4),
            "zstd" | "blosc_zstd" => Some(Self::BloscZstd),
            _ => None,
        }
    }

    /// Get the codec name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::BloscLz4 => "blosc_lz4",
            Self::BloscZstd => "blosc_zstd",
        }
    }
}

impl std::fmt::Display for ZarrCompression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
