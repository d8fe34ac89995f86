use crate::error::Result;
use crate::rect::Rect;
use crate::sink::ChunkSink;

/// Keeps every flushed chunk in memory, in flush order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink<T> {
    chunks: Vec<(Rect, Vec<T>)>,
}

impl<T: Clone> MemorySink<T> {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Flushed chunks in the order they arrived.
    pub fn chunks(&self) -> &[(Rect, Vec<T>)] {
        &self.chunks
    }

    /// Number of flushed chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Check if nothing has been flushed.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Paste every chunk into a `width × height` raster, starting from
    /// `fill`.
    pub fn assemble(&self, width: usize, height: usize, fill: T) -> Vec<T> {
        let mut raster = vec![fill; width * height];
        for (rect, data) in &self.chunks {
            for (row, line) in data.chunks(rect.width).enumerate() {
                let start = (rect.y + row) * width + rect.x;
                raster[start..start + rect.width].clone_from_slice(line);
            }
        }
        raster
    }
}

impl<T: Clone> ChunkSink<T> for MemorySink<T> {
    fn write_chunk(&mut self, rect: Rect, data: &[T]) -> Result<()> {
        self.chunks.push((rect, data.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_places_chunks() {
        let mut sink = MemorySink::new();
        sink.write_chunk(Rect::new(2, 0, 1, 2), &[5, 6]).unwrap();
        sink.write_chunk(Rect::new(0, 1, 2, 1), &[3, 4]).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.assemble(3, 2, 0), vec![0, 0, 5, 3, 4, 6]);
    }
}
