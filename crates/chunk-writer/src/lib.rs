//! Chunked raster writing.
//!
//! A [`ChunkWriter`] accepts writes of arbitrary rectangular sub-regions of
//! a large 2-D raster, in any order, buffers them per fixed-size chunk and
//! hands each chunk to a [`ChunkSink`] exactly once, as soon as every pixel
//! of it has been written.
//!
//! # Example
//!
//! ```
//! use chunk_writer::{ChunkWriter, MemorySink, Rect};
//!
//! let mut writer = ChunkWriter::new(4, 4, 4, 4, false, MemorySink::new()).unwrap();
//! writer.write(0, 0, 4, 2, &[1.0f32; 8]).unwrap();
//! assert_eq!(writer.pending_chunks(), 1);
//!
//! writer.write(0, 2, 4, 2, &[2.0f32; 8]).unwrap();
//! let sink = writer.finish().unwrap();
//! assert_eq!(sink.chunks()[0].0, Rect::new(0, 0, 4, 4));
//! ```

pub mod chunk;
pub mod config;
pub mod coverage;
pub mod error;
pub mod rect;
pub mod sink;
pub mod writer;

pub use chunk::Chunk;
pub use config::{ChunkWriterConfig, ZarrCompression};
pub use coverage::Coverage;
pub use error::{ChunkWriterError, Result};
pub use rect::Rect;
pub use sink::{ChunkSink, MemorySink, WriteOnceSink, ZarrChunkSink};
pub use writer::{ChunkKey, ChunkWriter};
