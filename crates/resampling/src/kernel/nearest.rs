use crate::error::Result;
use crate::factory::NEAREST_NEIGHBOUR;
use crate::index::Index;
use crate::raster::Raster;

use super::Resampler;

/// Nearest-neighbour lookup: the value of the pixel containing the point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestNeighbour;

impl Resampler for NearestNeighbour {
    fn name(&self) -> &'static str {
        NEAREST_NEIGHBOUR
    }

    fn create_index(&self) -> Index {
        Index::new(0, 0)
    }

    fn compute_index(&self, x: f64, y: f64, width: usize, height: usize, index: &mut Index) {
        index.set_position(x, y, width, height);
    }

    fn resample<R: Raster + ?Sized>(&self, raster: &R, index: &mut Index) -> Result<f64> {
        let x = Index::crop(index.i0, index.width.saturating_sub(1));
        let y = Index::crop(index.j0, index.height.saturating_sub(1));

        let mut sample = [0.0];
        raster.get_samples(&[x], &[y], &mut sample)?;
        Ok(sample[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::GridRaster;

    #[test]
    fn test_nearest_picks_containing_pixel() {
        let data: Vec<f32> = vec![
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 9.0,
        ];
        let raster = GridRaster::new(&data, 3, 3).unwrap();
        let kernel = NearestNeighbour;
        let mut index = kernel.create_index();

        kernel.compute_index(0.0, 0.0, 3, 3, &mut index);
        assert_eq!(kernel.resample(&raster, &mut index).unwrap(), 1.0);

        kernel.compute_index(1.99, 1.01, 3, 3, &mut index);
        assert_eq!(kernel.resample(&raster, &mut index).unwrap(), 5.0);

        kernel.compute_corner_based_index(1.6, 1.4, 3, 3, &mut index);
        assert_eq!(kernel.resample(&raster, &mut index).unwrap(), 6.0);
    }

    #[test]
    fn test_nearest_clamps_outside() {
        let data: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0];
        let raster = GridRaster::new(&data, 2, 2).unwrap();
        let kernel = NearestNeighbour;
        let mut index = kernel.create_index();

        kernel.compute_index(-3.0, 7.5, 2, 2, &mut index);
        assert_eq!(kernel.resample(&raster, &mut index).unwrap(), 3.0);
    }

    #[test]
    fn test_nearest_returns_missing() {
        let data = [f32::NAN, 2.0];
        let raster = GridRaster::new(&data, 2, 1).unwrap();
        let kernel = NearestNeighbour;
        let mut index = kernel.create_index();

        kernel.compute_index(0.5, 0.5, 2, 1, &mut index);
        assert!(kernel.resample(&raster, &mut index).unwrap().is_nan());
    }
}
