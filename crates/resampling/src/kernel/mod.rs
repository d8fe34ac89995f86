//! Resampling kernels.
//!
//! Every kernel implements [`Resampler`]. Kernels hold no mutable state and
//! can be shared between threads; the per-query state lives in an
//! [`Index`] owned by the caller.

mod bicubic;
mod bilinear;
mod bisinc;
mod cubic;
mod nearest;

pub use bicubic::BiCubic;
pub use bilinear::Bilinear;
pub use bisinc::BiSinc;
pub use cubic::CubicConvolution;
pub use nearest::NearestNeighbour;

use crate::error::Result;
use crate::index::Index;
use crate::raster::Raster;

/// Common contract of all resampling kernels.
pub trait Resampler {
    /// Stable identifier, e.g. `"BILINEAR_INTERPOLATION"`.
    fn name(&self) -> &'static str;

    /// Create an index sized for this kernel's support window.
    fn create_index(&self) -> Index;

    /// Fill `index` for a source coordinate in pixel-centre convention,
    /// where `n + 0.5` is the centre of pixel `n`.
    fn compute_index(&self, x: f64, y: f64, width: usize, height: usize, index: &mut Index);

    /// Fill `index` for a coordinate where integer `n` is the centre of
    /// pixel `n`.
    fn compute_corner_based_index(
        &self,
        x: f64,
        y: f64,
        width: usize,
        height: usize,
        index: &mut Index,
    ) {
        self.compute_index(x + 0.5, y + 0.5, width, height, index);
    }

    /// Interpolate the raster at the position last computed into `index`.
    ///
    /// Returns NaN when the sample containing the position is missing.
    fn resample<R: Raster + ?Sized>(&self, raster: &R, index: &mut Index) -> Result<f64>;

    /// Nominal kernel size.
    fn kernel_size(&self) -> usize {
        4
    }
}
