use crate::error::Result;
use crate::factory::BILINEAR_INTERPOLATION;
use crate::index::Index;
use crate::raster::Raster;

use super::Resampler;

/// Bilinear interpolation over a 2×2 window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bilinear;

impl Resampler for Bilinear {
    fn name(&self) -> &'static str {
        BILINEAR_INTERPOLATION
    }

    fn create_index(&self) -> Index {
        Index::new(2, 1)
    }

    fn compute_index(&self, x: f64, y: f64, width: usize, height: usize, index: &mut Index) {
        index.compute_window(x, y, width, height, 0);
    }

    fn resample<R: Raster + ?Sized>(&self, raster: &R, index: &mut Index) -> Result<f64> {
        if !index.load_samples(raster)? {
            return Ok(f64::NAN);
        }

        let ki = index.ki[0];
        let kj = index.kj[0];
        let s = index.samples();

        Ok(s[0] * (1.0 - ki) * (1.0 - kj)
            + s[1] * ki * (1.0 - kj)
            + s[2] * (1.0 - ki) * kj
            + s[3] * ki * kj)
    }
}
