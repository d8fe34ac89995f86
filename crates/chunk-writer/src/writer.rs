//! Accumulation of arbitrary rectangular writes into whole chunks.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::ops::Range;

use crate::chunk::Chunk;
use crate::config::ChunkWriterConfig;
use crate::error::{ChunkWriterError, Result};
use crate::rect::Rect;
use crate::sink::ChunkSink;

/// Chunk-grid coordinate (column, row).
pub type ChunkKey = (usize, usize);

/// Buffers sub-region writes of a `scene_width × scene_height` raster and
/// hands each chunk to the sink exactly once, as soon as it is fully
/// covered.
///
/// Writes may arrive in any order and any shape, but must not overlap.
/// Overlaps are rejected before anything is copied, so a failed `write`
/// leaves the writer unchanged.
///
/// A writer is single-threaded: `write` takes `&mut self`.
#[derive(Debug)]
pub struct ChunkWriter<T, S> {
    scene_width: usize,
    scene_height: usize,
    chunk_width: usize,
    chunk_height: usize,
    y_flipped: bool,
    active_chunks: HashMap<ChunkKey, Chunk<T>>,
    written: HashSet<ChunkKey>,
    sink: S,
}

impl<T, S> ChunkWriter<T, S>
where
    T: Copy + Default,
    S: ChunkSink<T>,
{
    /// Create a writer for a scene of the given size.
    ///
    /// With `y_flipped` set, incoming regions are addressed bottom-up: row
    /// `y` of a write lands on scene row `scene_height - 1 - y`.
    pub fn new(
        scene_width: usize,
        scene_height: usize,
        chunk_width: usize,
        chunk_height: usize,
        y_flipped: bool,
        sink: S,
    ) -> Result<Self> {
        if chunk_width == 0 || chunk_height == 0 {
            return Err(ChunkWriterError::config(format!(
                "chunk size must be > 0, got {}x{}",
                chunk_width, chunk_height
            )));
        }

        Ok(Self {
            scene_width,
            scene_height,
            chunk_width,
            chunk_height,
            y_flipped,
            active_chunks: HashMap::new(),
            written: HashSet::new(),
            sink,
        })
    }

    /// Create a writer using the chunk geometry from `config`.
    pub fn from_config(
        scene_width: usize,
        scene_height: usize,
        config: &ChunkWriterConfig,
        sink: S,
    ) -> Result<Self> {
        config.validate().map_err(ChunkWriterError::ConfigError)?;
        Self::new(
            scene_width,
            scene_height,
            config.chunk_width,
            config.chunk_height,
            config.y_flipped,
            sink,
        )
    }

    /// Write a `width × height` region at `(x, y)`.
    ///
    /// `data` is row-major, `width * height` values. Every chunk the
    /// region completes is flushed to the sink before this returns.
    pub fn write(&mut self, x: usize, y: usize, width: usize, height: usize, data: &[T]) -> Result<()> {
        let region = Rect::new(x, y, width, height);
        if region.is_empty() {
            if !data.is_empty() {
                return Err(ChunkWriterError::DataLengthMismatch {
                    region,
                    expected: 0,
                    actual: data.len(),
                });
            }
            return Ok(());
        }

        let scene = self.scene_rect();
        if !scene.contains_rect(&region) {
            return Err(ChunkWriterError::OutOfBounds { region, scene });
        }

        // Inside the scene, so the area cannot overflow.
        if data.len() != region.area() {
            return Err(ChunkWriterError::DataLengthMismatch {
                region,
                expected: region.area(),
                actual: data.len(),
            });
        }

        let (region, data) = if self.y_flipped {
            let flipped = Rect::new(x, self.scene_height - (y + height), width, height);
            (flipped, Cow::Owned(flip_rows(data, width)))
        } else {
            (region, Cow::Borrowed(data))
        };

        let (columns, rows) = self.chunk_indices(&region);
        self.check_overlap(&region, columns.clone(), rows.clone())?;

        for chunk_y in rows {
            for chunk_x in columns.clone() {
                self.write_to_chunk((chunk_x, chunk_y), &region, &data)?;
            }
        }

        Ok(())
    }

    /// Reject the write if it touches a flushed chunk or re-covers pixels
    /// of a partial one.
    fn check_overlap(&self, region: &Rect, columns: Range<usize>, rows: Range<usize>) -> Result<()> {
        for chunk_y in rows {
            for chunk_x in columns.clone() {
                let key = (chunk_x, chunk_y);
                if self.written.contains(&key) {
                    return Err(ChunkWriterError::ChunkAlreadyWritten { chunk_x, chunk_y });
                }

                let Some(chunk) = self.active_chunks.get(&key) else {
                    continue;
                };
                if let Some(overlap) = chunk.rect().intersection(region) {
                    if chunk.pending_within(&overlap) != overlap.area() {
                        return Err(ChunkWriterError::OverlappingWrite {
                            chunk_x,
                            chunk_y,
                            region: *region,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn write_to_chunk(&mut self, key: ChunkKey, region: &Rect, data: &[T]) -> Result<()> {
        let chunk_rect = self.chunk_rect(key.0, key.1);

        // A write of exactly one whole chunk skips the buffer.
        if *region == chunk_rect {
            return self.flush(key, chunk_rect, data, true);
        }

        let chunk = self
            .active_chunks
            .entry(key)
            .or_insert_with(|| Chunk::new(chunk_rect));
        let covered = chunk.write(region, data);
        let complete = chunk.is_complete();

        tracing::trace!(
            chunk_x = key.0,
            chunk_y = key.1,
            region = %region,
            covered,
            pending = chunk.pending(),
            "Accumulated partial chunk write"
        );

        if complete {
            if let Some(chunk) = self.active_chunks.remove(&key) {
                self.flush(key, chunk_rect, chunk.data(), false)?;
            }
        }
        Ok(())
    }

    fn flush(&mut self, key: ChunkKey, rect: Rect, data: &[T], bypassed: bool) -> Result<()> {
        self.sink.write_chunk(rect, data)?;
        self.written.insert(key);

        tracing::debug!(
            chunk_x = key.0,
            chunk_y = key.1,
            rect = %rect,
            bypassed,
            "Flushed chunk"
        );
        Ok(())
    }

    /// Range of chunk columns and chunk rows overlapped by `rect`.
    ///
    /// Both ranges are empty for an empty rectangle.
    pub fn chunk_indices(&self, rect: &Rect) -> (Range<usize>, Range<usize>) {
        if rect.is_empty() {
            return (0..0, 0..0);
        }
        (
            self.chunk_x(rect.x)..self.chunk_x(rect.right() - 1) + 1,
            self.chunk_y(rect.y)..self.chunk_y(rect.bottom() - 1) + 1,
        )
    }

    /// Chunk column containing scene column `x`.
    pub fn chunk_x(&self, x: usize) -> usize {
        x / self.chunk_width
    }

    /// Chunk row containing scene row `y`.
    pub fn chunk_y(&self, y: usize) -> usize {
        y / self.chunk_height
    }

    /// Scene rectangle of chunk `(chunk_x, chunk_y)`.
    ///
    /// Chunks on the right and bottom edges are cut to the scene, so they
    /// may be smaller than the nominal chunk size.
    pub fn chunk_rect(&self, chunk_x: usize, chunk_y: usize) -> Rect {
        let x = chunk_x * self.chunk_width;
        let y = chunk_y * self.chunk_height;
        Rect::new(
            x,
            y,
            self.chunk_width.min(self.scene_width.saturating_sub(x)),
            self.chunk_height.min(self.scene_height.saturating_sub(y)),
        )
    }

    /// Number of chunk columns and rows covering the scene.
    pub fn num_chunks(&self) -> (usize, usize) {
        (
            self.scene_width.div_ceil(self.chunk_width),
            self.scene_height.div_ceil(self.chunk_height),
        )
    }

    /// The whole scene as a rectangle at the origin.
    pub fn scene_rect(&self) -> Rect {
        Rect::new(0, 0, self.scene_width, self.scene_height)
    }

    /// Whether incoming writes are bottom-up.
    pub fn is_y_flipped(&self) -> bool {
        self.y_flipped
    }

    /// Number of partially written chunks held in memory.
    pub fn pending_chunks(&self) -> usize {
        self.active_chunks.len()
    }

    /// Number of chunks flushed so far.
    pub fn written_chunks(&self) -> usize {
        self.written.len()
    }

    /// Check if chunk `(chunk_x, chunk_y)` has been flushed.
    pub fn is_chunk_written(&self, chunk_x: usize, chunk_y: usize) -> bool {
        self.written.contains(&(chunk_x, chunk_y))
    }

    /// The sink receiving flushed chunks.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Finish writing and return the sink.
    ///
    /// Fails with [`ChunkWriterError::IncompleteChunks`] if any chunk is
    /// still only partially written; its buffered data is discarded.
    pub fn finish(self) -> Result<S> {
        if !self.active_chunks.is_empty() {
            let count = self.active_chunks.len();
            let pending_pixels: usize = self.active_chunks.values().map(Chunk::pending).sum();
            tracing::warn!(count, pending_pixels, "Abandoning partially written chunks");
            return Err(ChunkWriterError::IncompleteChunks { count });
        }

        let (columns, rows) = self.num_chunks();
        tracing::debug!(
            written = self.written.len(),
            total = columns * rows,
            "Chunk writer finished"
        );
        Ok(self.sink)
    }
}

/// Reverse the row order of a row-major buffer.
fn flip_rows<T: Copy>(data: &[T], width: usize) -> Vec<T> {
    data.chunks(width).rev().flatten().copied().collect()
}
