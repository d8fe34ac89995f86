//! Source raster access for the resampling kernels.

use crate::error::{ResamplingError, Result};

/// Read access to a 2D source raster.
///
/// Implementations own (or borrow) the backing storage; the kernels only
/// ever ask for the samples named by an [`Index`](crate::Index).
pub trait Raster {
    /// Raster width in pixels.
    fn width(&self) -> usize;

    /// Raster height in pixels.
    fn height(&self) -> usize;

    /// Fetch the samples at every combination of `x` columns and `y` rows.
    ///
    /// `samples` is row-major with `x.len()` values per row, so the sample
    /// at `(x[i], y[j])` lands in `samples[j * x.len() + i]`.
    ///
    /// Returns `Ok(false)` if any fetched sample is NaN. Errors are reserved
    /// for genuine failures such as unreadable storage or coordinates
    /// outside the raster.
    fn get_samples(&self, x: &[usize], y: &[usize], samples: &mut [f64]) -> Result<bool>;
}

/// A borrowed row-major raster held in memory.
///
/// Values equal to the optional no-data value are reported as NaN.
#[derive(Debug, Clone, Copy)]
pub struct GridRaster<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    no_data: Option<f64>,
}

impl<'a, T: Copy + Into<f64>> GridRaster<'a, T> {
    /// Wrap `data` as a `width × height` raster.
    pub fn new(data: &'a [T], width: usize, height: usize) -> Result<Self> {
        let expected = width * height;
        if data.len() != expected {
            return Err(ResamplingError::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
            no_data: None,
        })
    }

    /// Treat `value` as missing data.
    pub fn with_no_data(mut self, value: f64) -> Self {
        self.no_data = Some(value);
        self
    }

    /// Get the value at a pixel, with no-data mapped to NaN.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.value_at(y * self.width + x))
    }

    fn value_at(&self, offset: usize) -> f64 {
        let value: f64 = self.data[offset].into();
        match self.no_data {
            Some(no_data) if value == no_data => f64::NAN,
            _ => value,
        }
    }
}

impl<T: Copy + Into<f64>> Raster for GridRaster<'_, T> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get_samples(&self, x: &[usize], y: &[usize], samples: &mut [f64]) -> Result<bool> {
        let expected = x.len() * y.len();
        if samples.len() < expected {
            return Err(ResamplingError::SampleBufferMismatch {
                expected,
                actual: samples.len(),
            });
        }

        let mut complete = true;
        for (row, &sy) in y.iter().enumerate() {
            if sy >= self.height {
                return Err(ResamplingError::out_of_bounds(0, sy, self.width, self.height));
            }
            let line = sy * self.width;
            for (col, &sx) in x.iter().enumerate() {
                if sx >= self.width {
                    return Err(ResamplingError::out_of_bounds(sx, sy, self.width, self.height));
                }
                let value = self.value_at(line + sx);
                complete &= !value.is_nan();
                samples[row * x.len() + col] = value;
            }
        }

        Ok(complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_raster_rejects_bad_length() {
        let data = [1.0f32, 2.0, 3.0];
        let err = GridRaster::new(&data, 2, 2).unwrap_err();
        assert!(matches!(
            err,
            ResamplingError::DataLengthMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_get_samples_layout() {
        let data: Vec<f32> = (0..12).map(|v| v as f32).collect();
        let raster = GridRaster::new(&data, 4, 3).unwrap();

        let mut samples = [0.0; 4];
        let complete = raster.get_samples(&[1, 3], &[0, 2], &mut samples).unwrap();

        assert!(complete);
        assert_eq!(samples, [1.0, 3.0, 9.0, 11.0]);
    }

    #[test]
    fn test_get_samples_reports_nan() {
        let data = [1.0f64, f64::NAN, 3.0, 4.0];
        let raster = GridRaster::new(&data, 2, 2).unwrap();

        let mut samples = [0.0; 4];
        let complete = raster.get_samples(&[0, 1], &[0, 1], &mut samples).unwrap();

        assert!(!complete);
        assert!(samples[1].is_nan());
        assert_eq!(samples[3], 4.0);
    }

    #[test]
    fn test_no_data_value_becomes_nan() {
        let data = [-9999.0f32, 5.0];
        let raster = GridRaster::new(&data, 2, 1).unwrap().with_no_data(-9999.0);

        assert!(raster.get(0, 0).unwrap().is_nan());
        assert_eq!(raster.get(1, 0), Some(5.0));
        assert_eq!(raster.get(2, 0), None);
    }

    #[test]
    fn test_get_samples_out_of_bounds() {
        let data = [0.0f32; 4];
        let raster = GridRaster::new(&data, 2, 2).unwrap();

        let mut samples = [0.0; 1];
        let err = raster.get_samples(&[2], &[0], &mut samples).unwrap_err();
        assert!(matches!(err, ResamplingError::OutOfBounds { x: 2, .. }));
    }
}
