//! Raster regridding.
//!
//! Reads a 2-D Zarr raster, resamples it onto a grid of a different size
//! band by band, and streams every band through a [`ChunkWriter`] into a
//! chunked Zarr output.

pub mod source;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, ensure, Context, Result};
use chunk_writer::{ChunkWriter, ChunkWriterConfig, WriteOnceSink, ZarrChunkSink};
use resampling::{par_resample_grid, resample_rows, GridRaster, Resampling, ResamplingMethod};
use serde::Serialize;
use tracing::info;
use zarrs_filesystem::FilesystemStore;

pub use source::{read_zarr_grid, SourceGrid};

/// Everything a regrid run needs.
#[derive(Debug, Clone)]
pub struct RegridOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
    /// Resampling method identifier, e.g. `CUBIC_CONVOLUTION`.
    pub method: String,
    /// Target rows resampled and written per band.
    pub rows_per_write: usize,
    /// Resample the whole target grid on the rayon pool before writing.
    pub parallel: bool,
    pub writer: ChunkWriterConfig,
}

/// What a finished run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RegridSummary {
    pub source_shape: (usize, usize),
    pub target_shape: (usize, usize),
    pub method: ResamplingMethod,
    pub bands: usize,
    pub chunks_written: usize,
    pub bytes_written: u64,
    pub elapsed: Duration,
}

/// Parse a method identifier, listing the valid ones on failure.
pub fn parse_method(name: &str) -> Result<ResamplingMethod> {
    match ResamplingMethod::from_name(name) {
        Some(method) => Ok(method),
        None => bail!(
            "Unknown resampling method '{}', expected one of: {}",
            name,
            ResamplingMethod::names().collect::<Vec<_>>().join(", ")
        ),
    }
}

/// Run one regrid from `options.input` to `options.output`.
pub fn run(options: &RegridOptions) -> Result<RegridSummary> {
    let start = Instant::now();
    let method = parse_method(&options.method)?;
    ensure!(
        options.width > 0 && options.height > 0,
        "Target size must be non-empty, got {}x{}",
        options.width,
        options.height
    );
    ensure!(options.rows_per_write > 0, "rows_per_write must be > 0");

    let source = read_zarr_grid(&options.input)?;
    let raster = GridRaster::new(&source.data, source.width, source.height)?;
    let resampling = Resampling::from_method(method);

    info!(
        input = %options.input.display(),
        source = ?(source.width, source.height),
        target = ?(options.width, options.height),
        method = %method,
        "Starting regrid"
    );

    std::fs::create_dir_all(&options.output)
        .with_context(|| format!("Failed to create {}", options.output.display()))?;
    let store = FilesystemStore::new(&options.output)
        .with_context(|| format!("Failed to open Zarr store {}", options.output.display()))?;

    let mut attributes = serde_json::Map::new();
    attributes.insert("resampling".to_string(), serde_json::json!(method));
    attributes.insert(
        "source_shape".to_string(),
        serde_json::json!([source.height, source.width]),
    );
    attributes.insert("y_flipped".to_string(), serde_json::json!(options.writer.y_flipped));

    let sink = ZarrChunkSink::create(
        store,
        "/",
        options.width,
        options.height,
        &options.writer,
        attributes,
    )?;
    let mut writer = ChunkWriter::from_config(
        options.width,
        options.height,
        &options.writer,
        WriteOnceSink::new(sink),
    )?;

    let full = if options.parallel {
        Some(par_resample_grid(&raster, options.width, options.height, &resampling)?)
    } else {
        None
    };

    let mut bands = 0;
    for first in (0..options.height).step_by(options.rows_per_write) {
        let rows = first..(first + options.rows_per_write).min(options.height);
        let band = match &full {
            Some(grid) => grid[rows.start * options.width..rows.end * options.width].to_vec(),
            None => resample_rows(&raster, options.width, options.height, rows.clone(), &resampling)?,
        };

        writer
            .write(0, rows.start, options.width, rows.len(), &band)
            .with_context(|| format!("Failed to write rows {:?}", rows))?;
        bands += 1;
    }

    let sink = writer.finish()?.into_inner();
    let summary = RegridSummary {
        source_shape: (source.width, source.height),
        target_shape: (options.width, options.height),
        method,
        bands,
        chunks_written: sink.chunks_written(),
        bytes_written: sink.bytes_written(),
        elapsed: start.elapsed(),
    };

    info!(
        output = %options.output.display(),
        bands = summary.bands,
        chunks = summary.chunks_written,
        bytes = summary.bytes_written,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "Regrid complete"
    );

    Ok(summary)
}
