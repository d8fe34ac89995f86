use crate::error::Result;
use crate::factory::BICUBIC_INTERPOLATION;
use crate::index::Index;
use crate::raster::Raster;

use super::Resampler;

/// Bicubic Hermite patch interpolation.
///
/// The inner 2×2 samples of a 4×4 window, together with central-difference
/// estimates of the first and cross derivatives at those four points,
/// determine a bicubic patch which is evaluated at the fractional offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BiCubic;

/// Maps `[f, fx, fy, fxy]` at the patch corners `(0,0) (1,0) (0,1) (1,1)`
/// onto the coefficients `a[i + 4j]` of `t^i u^j`.
#[rustfmt::skip]
const INV_A: [[f64; 16]; 16] = [
    [ 1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0,  1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0],
    [-3.0,  3.0,  0.0,  0.0, -2.0, -1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0],
    [ 2.0, -2.0,  0.0,  0.0,  1.0,  1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  1.0,  0.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -3.0,  3.0,  0.0,  0.0, -2.0, -1.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  2.0, -2.0,  0.0,  0.0,  1.0,  1.0,  0.0,  0.0],
    [-3.0,  0.0,  3.0,  0.0,  0.0,  0.0,  0.0,  0.0, -2.0,  0.0, -1.0,  0.0,  0.0,  0.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0, -3.0,  0.0,  3.0,  0.0,  0.0,  0.0,  0.0,  0.0, -2.0,  0.0, -1.0,  0.0],
    [ 9.0, -9.0, -9.0,  9.0,  6.0,  3.0, -6.0, -3.0,  6.0, -6.0,  3.0, -3.0,  4.0,  2.0,  2.0,  1.0],
    [-6.0,  6.0,  6.0, -6.0, -3.0, -3.0,  3.0,  3.0, -4.0,  4.0, -2.0,  2.0, -2.0, -2.0, -1.0, -1.0],
    [ 2.0,  0.0, -2.0,  0.0,  0.0,  0.0,  0.0,  0.0,  1.0,  0.0,  1.0,  0.0,  0.0,  0.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0,  2.0,  0.0, -2.0,  0.0,  0.0,  0.0,  0.0,  0.0,  1.0,  0.0,  1.0,  0.0],
    [-6.0,  6.0,  6.0, -6.0, -4.0, -2.0,  4.0,  2.0, -3.0,  3.0, -3.0,  3.0, -2.0, -1.0, -2.0, -1.0],
    [ 4.0, -4.0, -4.0,  4.0,  2.0,  2.0, -2.0, -2.0,  2.0, -2.0,  2.0, -2.0,  1.0,  1.0,  1.0,  1.0],
];

impl Resampler for BiCubic {
    fn name(&self) -> &'static str {
        BICUBIC_INTERPOLATION
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

        let coefficients = patch_coefficients(index.samples());
        Ok(evaluate(&coefficients, index.ki[0], index.kj[0]))
    }
}

/// Solve the patch spanning the inner 2×2 samples of a row-major 4×4 window.
fn patch_coefficients(s: &[f64]) -> [f64; 16] {
    let at = |col: usize, row: usize| s[row * 4 + col];

    // Patch corners in window coordinates: (1,1) (2,1) (1,2) (2,2).
    let corners = [(1, 1), (2, 1), (1, 2), (2, 2)];

    let mut x = [0.0; 16];
    for (k, &(c, r)) in corners.iter().enumerate() {
        x[k] = at(c, r);
        x[4 + k] = (at(c + 1, r) - at(c - 1, r)) / 2.0;
        x[8 + k] = (at(c, r + 1) - at(c, r - 1)) / 2.0;
        x[12 + k] =
            (at(c + 1, r + 1) - at(c - 1, r + 1) - at(c + 1, r - 1) + at(c - 1, r - 1)) / 4.0;
    }

    let mut a = [0.0; 16];
    for (row, coefficient) in INV_A.iter().zip(a.iter_mut()) {
        *coefficient = row.iter().zip(x.iter()).map(|(m, v)| m * v).sum();
    }
    a
}

/// Evaluate `Σ a[i + 4j] t^i u^j` with Horner's method in `t`, then `u`.
fn evaluate(a: &[f64; 16], t: f64, u: f64) -> f64 {
    let mut result = 0.0;
    for j in (0..4).rev() {
        let row = &a[4 * j..4 * j + 4];
        let in_t = ((row[3] * t + row[2]) * t + row[1]) * t + row[0];
        result = result * u + in_t;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::GridRaster;

    #[test]
    fn test_bicubic_exact_at_pixel_centre() {
        let data: Vec<f32> = (0..25).map(|v| (v * v) as f32).collect();
        let raster = GridRaster::new(&data, 5, 5).unwrap();
        let kernel = BiCubic;
        let mut index = kernel.create_index();

        kernel.compute_index(2.5, 1.5, 5, 5, &mut index);
        assert_eq!(kernel.resample(&raster, &mut index).unwrap(), 49.0);
    }

    #[test]
    fn test_bicubic_reproduces_bilinear_surface() {
        // f(col, row) = col * row + col; central differences are exact.
        let data: Vec<f32> = (0..6)
            .flat_map(|row| (0..6).map(move |col| (col * row + col) as f32))
            .collect();
        let raster = GridRaster::new(&data, 6, 6).unwrap();
        let kernel = BiCubic;
        let mut index = kernel.create_index();

        kernel.compute_index(3.25, 2.75, 6, 6, &mut index);
        let value = kernel.resample(&raster, &mut index).unwrap();
        let (c, r) = (2.75, 2.25);
        assert!((value - (c * r + c)).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_horner() {
        let mut a = [0.0; 16];
        a[0] = 1.0; // constant
        a[1] = 2.0; // t
        a[4 * 2 + 3] = 0.5; // t^3 u^2
        let value = evaluate(&a, 0.5, 0.4);
        assert!((value - (1.0 + 1.0 + 0.5 * 0.125 * 0.16)).abs() < 1e-12);
    }
}
