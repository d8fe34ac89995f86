use crate::error::Result;
use crate::factory::CUBIC_CONVOLUTION;
use crate::index::Index;
use crate::raster::Raster;

use super::Resampler;

/// Cubic convolution over a 4×4 window.
///
/// Each row is blended with the Catmull-Rom weights of the x offset, then
/// the four row results are blended with the weights of the y offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubicConvolution;

impl Resampler for CubicConvolution {
    fn name(&self) -> &'static str {
        CUBIC_CONVOLUTION
    }

    fn create_index(&self) -> Index {
        Index::new(4, 1)
    }

    fn compute_index(&self, x: f64, y: f64, width: usize, height: usize, index: &mut Index) {
        index.compute_window(x, y, width, height, 1);
    }

    fn resample<R: Raster + ?Sized>(&self, raster: &R, index: &mut Index) -> Result<f64> {
        if !index.load_samples(raster)? {
            return Ok(f64::NAN);
        }

        let wx = weights(index.ki[0]);
        let wy = weights(index.kj[0]);
        let s = index.samples();

        let mut rows = [0.0; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            *row = blend(&s[r * 4..r * 4 + 4], &wx);
        }

        Ok(blend(&rows, &wy))
    }
}

/// Catmull-Rom weights for a fractional offset `t` in `[0, 1)`,
/// normalized to sum to one.
fn weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;

    let c0 = -0.5 * t3 + t2 - 0.5 * t;
    let c1 = 1.5 * t3 - 2.5 * t2 + 1.0;
    let c2 = -1.5 * t3 + 2.0 * t2 + 0.5 * t;
    let c3 = 0.5 * t3 - 0.5 * t2;

    let sum = c0 + c1 + c2 + c3;
    [c0 / sum, c1 / sum, c2 / sum, c3 / sum]
}

fn blend(values: &[f64], w: &[f64; 4]) -> f64 {
    values[0] * w[0] + values[1] * w[1] + values[2] * w[2] + values[3] * w[3]
}
