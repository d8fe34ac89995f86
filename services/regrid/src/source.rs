//! Reading the source raster.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use zarrs::array::Array;
use zarrs::array_subset::ArraySubset;
use zarrs_filesystem::FilesystemStore;

/// A source raster loaded fully into memory.
#[derive(Debug, Clone)]
pub struct SourceGrid {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

/// Read a 2-D `float32` Zarr array stored at the root of `path`.
pub fn read_zarr_grid(path: &Path) -> Result<SourceGrid> {
    let store = FilesystemStore::new(path)
        .with_context(|| format!("Failed to open Zarr store {}", path.display()))?;
    let array = Array::open(Arc::new(store), "/")
        .with_context(|| format!("Failed to open Zarr array {}", path.display()))?;

    let shape = array.shape().to_vec();
    let [height, width] = shape[..] else {
        bail!("Expected a 2-D array, found shape {:?}", shape);
    };

    let subset = ArraySubset::new_with_start_shape(vec![0, 0], vec![height, width])?;
    let data = array
        .retrieve_array_subset_elements::<f32>(&subset)
        .context("Failed to read source array")?;

    Ok(SourceGrid {
        width: width as usize,
        height: height as usize,
        data,
    })
}
