//! A partially written chunk.

use crate::coverage::Coverage;
use crate::rect::Rect;

/// Buffered pixels of one chunk plus what is still missing.
#[derive(Debug, Clone)]
pub struct Chunk<T> {
    rect: Rect,
    data: Vec<T>,
    coverage: Coverage,
}

impl<T: Copy + Default> Chunk<T> {
    /// Create an empty chunk covering `rect` of the scene.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            data: vec![T::default(); rect.area()],
            coverage: Coverage::new(rect),
        }
    }

    /// The chunk's scene rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Copy the part of `region` that falls inside this chunk.
    ///
    /// `data` holds `region` row-major.
    ///
    /// # Returns
    /// The number of newly covered pixels.
    pub fn write(&mut self, region: &Rect, data: &[T]) -> usize {
        let Some(overlap) = self.rect.intersection(region) else {
            return 0;
        };

        for row in overlap.y..overlap.bottom() {
            let src = (row - region.y) * region.width + (overlap.x - region.x);
            let dst = (row - self.rect.y) * self.rect.width + (overlap.x - self.rect.x);
            self.data[dst..dst + overlap.width].copy_from_slice(&data[src..src + overlap.width]);
        }

        self.coverage.subtract(&overlap)
    }

    /// Check if every pixel of the chunk has been written.
    pub fn is_complete(&self) -> bool {
        self.coverage.is_complete()
    }

    /// Number of pixels inside `rect` not yet written.
    pub fn pending_within(&self, rect: &Rect) -> usize {
        self.coverage.uncovered_area_within(rect)
    }

    /// Number of pixels not yet written.
    pub fn pending(&self) -> usize {
        self.coverage.uncovered_area()
    }

    /// The buffered pixels, row-major.
    pub fn data(&self) -> &[T] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_copies_overlap_only() {
        let mut chunk = Chunk::<u16>::new(Rect::new(4, 4, 4, 2));

        // 6x3 region starting left of and above the chunk.
        let region = Rect::new(2, 3, 6, 3);
        let data: Vec<u16> = (0..18).collect();

        assert_eq!(chunk.write(&region, &data), 8);
        assert!(chunk.is_complete());
        assert_eq!(chunk.data(), &[8, 9, 10, 11, 14, 15, 16, 17]);
    }

    #[test]
    fn test_pending_tracks_partial_writes() {
        let mut chunk = Chunk::<f32>::new(Rect::new(0, 0, 4, 4));
        chunk.write(&Rect::new(0, 0, 4, 1), &[1.0; 4]);

        assert_eq!(chunk.pending(), 12);
        assert_eq!(chunk.pending_within(&Rect::new(0, 0, 2, 2)), 2);
        assert!(!chunk.is_complete());
    }

    #[test]
    fn test_disjoint_region_is_ignored() {
        let mut chunk = Chunk::<i32>::new(Rect::new(0, 0, 2, 2));
        assert_eq!(chunk.write(&Rect::new(5, 5, 1, 1), &[7]), 0);
        assert_eq!(chunk.data(), &[0, 0, 0, 0]);
    }
}
