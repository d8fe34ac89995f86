//! Whole-grid resampling built on the per-pixel kernels.
//!
//! Target pixel centres are mapped onto the source grid by scaling, so the
//! outer edges of both grids coincide.

use std::ops::Range;

use rayon::prelude::*;

use crate::error::{ResamplingError, Result};
use crate::index::Index;
use crate::kernel::Resampler;
use crate::raster::Raster;

/// Resample `raster` onto a `target_width × target_height` grid.
///
/// # Returns
/// Row-major target values; missing data stays NaN.
pub fn resample_grid<R, K>(
    raster: &R,
    target_width: usize,
    target_height: usize,
    resampler: &K,
) -> Result<Vec<f32>>
where
    R: Raster + ?Sized,
    K: Resampler,
{
    resample_rows(raster, target_width, target_height, 0..target_height, resampler)
}

/// Resample only the target rows in `rows`.
///
/// Used to stream a large target grid band by band.
///
/// # Returns
/// `rows.len() × target_width` row-major values.
pub fn resample_rows<R, K>(
    raster: &R,
    target_width: usize,
    target_height: usize,
    rows: Range<usize>,
    resampler: &K,
) -> Result<Vec<f32>>
where
    R: Raster + ?Sized,
    K: Resampler,
{
    let mapping = GridMapping::new(raster, target_width, target_height)?;
    if rows.end > target_height {
        return Err(ResamplingError::invalid_target(format!(
            "rows {:?} exceed target height {}",
            rows, target_height
        )));
    }

    tracing::debug!(
        method = resampler.name(),
        source = ?(mapping.source_width, mapping.source_height),
        target = ?(target_width, target_height),
        rows = ?rows,
        "Resampling grid"
    );

    let mut output = vec![f32::NAN; rows.len() * target_width];
    let mut index = resampler.create_index();
    for (row, line) in rows.zip(output.chunks_mut(target_width)) {
        mapping.fill_row(raster, resampler, row, line, &mut index)?;
    }

    Ok(output)
}

/// Parallel variant of [`resample_grid`]. Each rayon worker owns its index.
pub fn par_resample_grid<R, K>(
    raster: &R,
    target_width: usize,
    target_height: usize,
    resampler: &K,
) -> Result<Vec<f32>>
where
    R: Raster + Sync + ?Sized,
    K: Resampler + Sync,
{
    let mapping = GridMapping::new(raster, target_width, target_height)?;

    tracing::debug!(
        method = resampler.name(),
        source = ?(mapping.source_width, mapping.source_height),
        target = ?(target_width, target_height),
        "Resampling grid in parallel"
    );

    let mut output = vec![f32::NAN; target_width * target_height];
    output
        .par_chunks_mut(target_width)
        .enumerate()
        .try_for_each_init(
            || resampler.create_index(),
            |index, (row, line)| mapping.fill_row(raster, resampler, row, line, index),
        )?;

    Ok(output)
}

/// Scale factors from target pixel space to source pixel space.
#[derive(Debug, Clone, Copy)]
struct GridMapping {
    source_width: usize,
    source_height: usize,
    scale_x: f64,
    scale_y: f64,
}

impl GridMapping {
    fn new<R: Raster + ?Sized>(raster: &R, target_width: usize, target_height: usize) -> Result<Self> {
        if target_width == 0 || target_height == 0 {
            return Err(ResamplingError::invalid_target(format!(
                "target grid {}x{} is empty",
                target_width, target_height
            )));
        }

        let source_width = raster.width();
        let source_height = raster.height();
        if source_width == 0 || source_height == 0 {
            return Err(ResamplingError::invalid_target(format!(
                "source raster {}x{} is empty",
                source_width, source_height
            )));
        }

        Ok(Self {
            source_width,
            source_height,
            scale_x: source_width as f64 / target_width as f64,
            scale_y: source_height as f64 / target_height as f64,
        })
    }

    fn fill_row<R, K>(
        &self,
        raster: &R,
        resampler: &K,
        row: usize,
        line: &mut [f32],
        index: &mut Index,
    ) -> Result<()>
    where
        R: Raster + ?Sized,
        K: Resampler,
    {
        let y = (row as f64 + 0.5) * self.scale_y;
        for (col, value) in line.iter_mut().enumerate() {
            let x = (col as f64 + 0.5) * self.scale_x;
            resampler.compute_index(x, y, self.source_width, self.source_height, index);
            *value = resampler.resample(raster, index)? as f32;
        }
        Ok(())
    }
}
