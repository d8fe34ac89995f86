//! Destinations for completed chunks.

mod memory;
mod write_once;
mod zarr;

pub use memory::MemorySink;
pub use write_once::WriteOnceSink;
pub use zarr::ZarrChunkSink;

use crate::error::Result;
use crate::rect::Rect;

/// Persists complete chunks.
///
/// `rect` is the chunk's scene rectangle, which is smaller than the
/// nominal chunk size on the right and bottom scene edges. `data` holds
/// exactly `rect.area()` values, row-major.
pub trait ChunkSink<T> {
    /// Write one complete chunk.
    fn write_chunk(&mut self, rect: Rect, data: &[T]) -> Result<()>;
}

impl<T, S: ChunkSink<T> + ?Sized> ChunkSink<T> for &mut S {
    fn write_chunk(&mut self, rect: Rect, data: &[T]) -> Result<()> {
        (**self).write_chunk(rect, data)
    }
}

impl<T, S: ChunkSink<T> + ?Sized> ChunkSink<T> for Box<S> {
    fn write_chunk(&mut self, rect: Rect, data: &[T]) -> Result<()> {
        (**self).write_chunk(rect, data)
    }
}
