//! End-to-end regridding between on-disk Zarr arrays.

use std::path::{Path, PathBuf};

use chunk_writer::{ChunkWriter, ChunkWriterConfig, ZarrChunkSink, ZarrCompression};
use regrid::{read_zarr_grid, run, RegridOptions};
use test_utils::{assert_approx_eq, create_noise_grid, create_ramp_grid, temp_test_dir};
use zarrs_filesystem::FilesystemStore;

fn writer_config(chunk: usize) -> ChunkWriterConfig {
    ChunkWriterConfig {
        chunk_width: chunk,
        chunk_height: chunk,
        zarr_compression: ZarrCompression::None,
        ..Default::default()
    }
}

fn write_source(path: &Path, data: &[f32], width: usize, height: usize) {
    let config = writer_config(8);
    let store = FilesystemStore::new(path).unwrap();
    let sink =
        ZarrChunkSink::create(store, "/", width, height, &config, serde_json::Map::new()).unwrap();
    let mut writer = ChunkWriter::from_config(width, height, &config, sink).unwrap();
    writer.write(0, 0, width, height, data).unwrap();
    writer.finish().unwrap();
}

fn options(input: PathBuf, output: PathBuf, width: usize, height: usize, method: &str) -> RegridOptions {
    RegridOptions {
        input,
        output,
        width,
        height,
        method: method.to_string(),
        rows_per_write: 3,
        parallel: false,
        writer: writer_config(8),
    }
}

#[test]
fn test_same_size_regrid_preserves_values() {
    let dir = temp_test_dir();
    let (input, output) = (dir.path().join("in"), dir.path().join("out"));
    std::fs::create_dir_all(&input).unwrap();

    let data = create_ramp_grid(20, 13, 0.5, 2.0);
    write_source(&input, &data, 20, 13);

    let summary = run(&options(input, output.clone(), 20, 13, "BILINEAR_INTERPOLATION")).unwrap();
    assert_eq!(summary.source_shape, (20, 13));
    assert_eq!(summary.bands, 5);
    assert_eq!(summary.chunks_written, 3 * 2);

    let result = read_zarr_grid(&output).unwrap();
    assert_eq!((result.width, result.height), (20, 13));
    for (got, want) in result.data.iter().zip(&data) {
        assert_approx_eq!(*got as f64, *want as f64, 1e-4);
    }
}

#[test]
fn test_parallel_matches_banded() {
    let dir = temp_test_dir();
    let input = dir.path().join("in");
    std::fs::create_dir_all(&input).unwrap();
    write_source(&input, &create_noise_grid(33, 21, 8), 33, 21);

    let mut banded = options(input.clone(), dir.path().join("banded"), 17, 30, "CUBIC_CONVOLUTION");
    run(&banded).unwrap();

    banded.output = dir.path().join("parallel");
    banded.parallel = true;
    run(&banded).unwrap();

    let a = read_zarr_grid(&dir.path().join("banded")).unwrap();
    let b = read_zarr_grid(&dir.path().join("parallel")).unwrap();
    assert_eq!(a.data, b.data);
}

#[test]
fn test_y_flip_reverses_output_rows() {
    let dir = temp_test_dir();
    let (input, output) = (dir.path().join("in"), dir.path().join("out"));
    std::fs::create_dir_all(&input).unwrap();

    let data = create_noise_grid(9, 10, 2);
    write_source(&input, &data, 9, 10);

    let mut opts = options(input, output.clone(), 9, 10, "NEAREST_NEIGHBOUR");
    opts.writer.y_flipped = true;
    run(&opts).unwrap();

    let flipped: Vec<f32> = data.chunks(9).rev().flatten().copied().collect();
    assert_eq!(read_zarr_grid(&output).unwrap().data, flipped);
}

#[test]
fn test_unknown_method_rejected() {
    let dir = temp_test_dir();
    let opts = options(dir.path().join("in"), dir.path().join("out"), 4, 4, "LANCZOS");

    let err = run(&opts).unwrap_err().to_string();
    assert!(err.contains("BISINC_21_POINT_INTERPOLATION"));
    assert!(!dir.path().join("out").exists());
}
