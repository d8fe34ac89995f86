//! Tracking which pixels of a rectangle have been written.

use crate::rect::Rect;

/// The still-uncovered part of an area, kept as disjoint rectangles.
///
/// Subtracting a written rectangle splits each rectangle it touches into
/// at most four bands (above, below, left, right of the overlap).
#[derive(Debug, Clone, Default)]
pub struct Coverage {
    uncovered: Vec<Rect>,
}

impl Coverage {
    /// Start with all of `area` uncovered.
    pub fn new(area: Rect) -> Self {
        let uncovered = if area.is_empty() { Vec::new() } else { vec![area] };
        Self { uncovered }
    }

    /// Check if every pixel has been covered.
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }

    /// The uncovered rectangles.
    pub fn uncovered(&self) -> &[Rect] {
        &self.uncovered
    }

    /// Total number of uncovered pixels.
    pub fn uncovered_area(&self) -> usize {
        self.uncovered.iter().map(Rect::area).sum()
    }

    /// Number of uncovered pixels inside `rect`.
    pub fn uncovered_area_within(&self, rect: &Rect) -> usize {
        self.uncovered
            .iter()
            .filter_map(|r| r.intersection(rect))
            .map(|r| r.area())
            .sum()
    }

    /// Mark `rect` as covered.
    ///
    /// # Returns
    /// The number of pixels that were uncovered before the call.
    pub fn subtract(&mut self, rect: &Rect) -> usize {
        let mut covered = 0;
        let old = std::mem::take(&mut self.uncovered);

        for r in old {
            let Some(overlap) = r.intersection(rect) else {
                self.uncovered.push(r);
                continue;
            };
            covered += overlap.area();

            let pieces = [
                Rect::new(r.x, r.y, r.width, overlap.y - r.y),
                Rect::new(r.x, overlap.bottom(), r.width, r.bottom() - overlap.bottom()),
                Rect::new(r.x, overlap.y, overlap.x - r.x, overlap.height),
                Rect::new(overlap.right(), overlap.y, r.right() - overlap.right(), overlap.height),
            ];
            self.uncovered
                .extend(pieces.into_iter().filter(|piece| !piece.is_empty()));
        }

        covered
    }
}
