use std::collections::HashSet;

use crate::error::Result;
use crate::rect::Rect;
use crate::sink::ChunkSink;

/// Forwards each chunk rectangle to the inner sink at most once.
///
/// Some formats (NetCDF-4 among them) cannot rewrite a chunk. A repeated
/// flush of an already written rectangle is dropped with a warning.
#[derive(Debug)]
pub struct WriteOnceSink<S> {
    inner: S,
    written: HashSet<Rect>,
    suppressed: usize,
}

impl<S> WriteOnceSink<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            written: HashSet::new(),
            suppressed: 0,
        }
    }

    /// The wrapped sink.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Number of distinct rectangles forwarded.
    pub fn written(&self) -> usize {
        self.written.len()
    }

    /// Number of duplicate flushes dropped.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }
}

impl<T, S: ChunkSink<T>> ChunkSink<T> for WriteOnceSink<S> {
    fn write_chunk(&mut self, rect: Rect, data: &[T]) -> Result<()> {
        if self.written.contains(&rect) {
            self.suppressed += 1;
            tracing::warn!(rect = %rect, "Chunk already written, skipping duplicate flush");
            return Ok(());
        }

        self.inner.write_chunk(rect, data)?;
        self.written.insert(rect);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChunkWriterError;
    use crate::sink::MemorySink;

    #[test]
    fn test_duplicate_flush_suppressed() {
        let mut sink = WriteOnceSink::new(MemorySink::new());
        let rect = Rect::new(0, 0, 1, 1);

        sink.write_chunk(rect, &[1.0f32]).unwrap();
        sink.write_chunk(rect, &[2.0]).unwrap();
        sink.write_chunk(Rect::new(1, 0, 1, 1), &[3.0]).unwrap();

        assert_eq!(sink.written(), 2);
        assert_eq!(sink.suppressed(), 1);
        assert_eq!(sink.inner().chunks()[0].1, vec![1.0]);
    }

    struct FailingSink;

    impl ChunkSink<f32> for FailingSink {
        fn write_chunk(&mut self, _rect: Rect, _data: &[f32]) -> Result<()> {
            Err(ChunkWriterError::sink("disk full"))
        }
    }

    #[test]
    fn test_failed_write_not_recorded() {
        let mut sink = WriteOnceSink::new(FailingSink);
        assert!(sink.write_chunk(Rect::new(0, 0, 1, 1), &[0.0]).is_err());
        assert_eq!(sink.written(), 0);
    }
}
