//! Raster Resampling Kernels
//!
//! Interpolates a 2D source raster at fractional positions. Supported
//! kernels:
//!
//! - **Nearest neighbour**: value of the containing pixel
//! - **Bilinear**: 2×2 weighted sum
//! - **Cubic convolution**: separable Catmull-Rom over 4×4
//! - **Bicubic**: Hermite patch with estimated derivatives over 4×4
//! - **Bisinc 5/11/21**: Hanning-windowed sinc
//!
//! Missing data is NaN. A missing sample at the query point yields NaN;
//! other missing samples in the window are replaced by the mean of the
//! valid ones before blending.
//!
//! # Example
//!
//! ```
//! use resampling::{create_resampling, GridRaster, Resampler};
//!
//! let data = vec![0.0f32, 2.0, 4.0, 6.0];
//! let raster = GridRaster::new(&data, 2, 2).unwrap();
//!
//! let kernel = create_resampling("BILINEAR_INTERPOLATION").unwrap();
//! let mut index = kernel.create_index();
//!
//! // Midway between the centres of the two top pixels.
//! kernel.compute_index(1.0, 0.5, 2, 2, &mut index);
//! assert_eq!(kernel.resample(&raster, &mut index).unwrap(), 1.0);
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod grid;
pub mod index;
pub mod kernel;
pub mod missing;
pub mod raster;

// Re-export commonly used types at crate root
pub use config::ResamplingConfig;
pub use error::{ResamplingError, Result};
pub use factory::{
    create_resampling, Resampling, ResamplingMethod, BICUBIC_INTERPOLATION,
    BILINEAR_INTERPOLATION, BISINC_11_POINT_INTERPOLATION, BISINC_21_POINT_INTERPOLATION,
    BISINC_5_POINT_INTERPOLATION, CUBIC_CONVOLUTION, NEAREST_NEIGHBOUR,
};
pub use grid::{par_resample_grid, resample_grid, resample_rows};
pub use index::Index;
pub use kernel::{BiCubic, BiSinc, Bilinear, CubicConvolution, NearestNeighbour, Resampler};
pub use missing::replace_nan_with_mean;
pub use raster::{GridRaster, Raster};
