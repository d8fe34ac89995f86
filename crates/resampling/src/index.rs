//! Reusable per-query interpolation state.

use crate::error::Result;
use crate::missing::replace_nan_with_mean;
use crate::raster::Raster;

/// Interpolation state for one resampling query.
///
/// An `Index` is created once per kernel via
/// [`Resampler::create_index`](crate::Resampler::create_index) and then
/// reused for every `compute_index` / `resample` pair. It also owns the
/// scratch buffers the kernels fill, so a query never allocates.
///
/// An `Index` is mutated by every query and belongs to one thread; give
/// each worker its own.
#[derive(Debug, Clone)]
pub struct Index {
    /// Queried source coordinate (pixel-centre convention).
    pub x: f64,
    pub y: f64,
    /// Source raster dimensions at query time.
    pub width: usize,
    pub height: usize,
    /// Floor of `x` and `y`. May lie outside the raster.
    pub i0: i64,
    pub j0: i64,
    /// Clamped sample columns of the support window.
    pub i: Vec<usize>,
    /// Clamped sample rows of the support window.
    pub j: Vec<usize>,
    /// Fractional weights along x, each in `[0, 1)`.
    pub ki: Vec<f64>,
    /// Fractional weights along y, each in `[0, 1)`.
    pub kj: Vec<f64>,
    /// Window position of the sample containing `(x, y)`.
    pub ci: usize,
    pub cj: usize,
    samples: Vec<f64>,
    weights: Vec<f64>,
}

impl Index {
    /// Create an index for a square support window of `support` samples
    /// per axis and `weights` fractional weights per axis.
    pub fn new(support: usize, weights: usize) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0,
            height: 0,
            i0: 0,
            j0: 0,
            i: vec![0; support],
            j: vec![0; support],
            ki: vec![0.0; weights],
            kj: vec![0.0; weights],
            ci: 0,
            cj: 0,
            samples: vec![0.0; support * support],
            weights: vec![0.0; 2 * support],
        }
    }

    /// Clamp a signed coordinate into `[0, max]`.
    #[inline]
    pub fn crop(value: i64, max: usize) -> usize {
        if value < 0 {
            0
        } else {
            (value as usize).min(max)
        }
    }

    /// Number of samples per axis in the support window.
    pub fn support(&self) -> usize {
        self.i.len()
    }

    /// Record the query position and its floor, without touching the window.
    pub(crate) fn set_position(&mut self, x: f64, y: f64, width: usize, height: usize) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self.i0 = x.floor() as i64;
        self.j0 = y.floor() as i64;
    }

    /// Fill the support window for a pixel-centre coordinate.
    ///
    /// `before` is the number of window samples preceding the base sample.
    /// The base sample is `i0` when `x` lies right of the centre of pixel
    /// `i0`, and `i0 - 1` otherwise, so the window always straddles `x`.
    pub(crate) fn compute_window(
        &mut self,
        x: f64,
        y: f64,
        width: usize,
        height: usize,
        before: usize,
    ) {
        self.set_position(x, y, width, height);

        let (ki, ci) = fill_axis(x, width, before, &mut self.i);
        let (kj, cj) = fill_axis(y, height, before, &mut self.j);

        self.ki[0] = ki;
        self.kj[0] = kj;
        self.ci = ci;
        self.cj = cj;
    }

    /// Fetch the window samples from `raster` into the scratch buffer.
    ///
    /// Returns `false` when the sample containing the query point is NaN;
    /// the caller must then produce NaN. Otherwise any NaN in the window is
    /// replaced by the mean of the valid samples.
    pub(crate) fn load_samples<R: Raster + ?Sized>(&mut self, raster: &R) -> Result<bool> {
        if raster.get_samples(&self.i, &self.j, &mut self.samples)? {
            return Ok(true);
        }

        let centre = self.cj * self.i.len() + self.ci;
        if self.samples[centre].is_nan() {
            return Ok(false);
        }

        replace_nan_with_mean(&mut self.samples);
        Ok(true)
    }

    /// Samples of the last window fetched, row-major.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Split the scratch space into the fetched samples and a weight buffer
    /// of `2 * support` slots.
    pub(crate) fn samples_and_weights(&mut self) -> (&[f64], &mut [f64]) {
        (&self.samples, &mut self.weights)
    }
}

/// Fill one axis of a support window. Returns the fractional weight and
/// the window position of the sample containing `coord`.
fn fill_axis(coord: f64, dim: usize, before: usize, out: &mut [usize]) -> (f64, usize) {
    let max = dim.saturating_sub(1);

    // Past this margin every window entry clamps to the same edge sample.
    let margin = (out.len() + 1) as f64;
    let coord = coord.clamp(-margin, dim as f64 + margin);
    let floor = coord.floor() as i64;
    let delta = coord - (floor as f64 + 0.5);

    let (base, weight) = if delta >= 0.0 {
        (floor, delta)
    } else {
        (floor - 1, delta + 1.0)
    };

    let start = base - before as i64;
    for (n, slot) in out.iter_mut().enumerate() {
        *slot = Index::crop(start + n as i64, max);
    }

    (weight, (floor - start) as usize)
}
