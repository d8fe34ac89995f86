//! Integration tests: chunked writes into an on-disk Zarr V3 array.

use std::sync::Arc;

use chunk_writer::{ChunkWriter, ChunkWriterConfig, WriteOnceSink, ZarrChunkSink, ZarrCompression};
use test_utils::fixtures::scene;
use test_utils::{create_test_grid, extract_region, split_region, temp_test_dir};
use zarrs::array::Array;
use zarrs::array_subset::ArraySubset;
use zarrs_filesystem::FilesystemStore;

fn read_back(path: &std::path::Path, width: usize, height: usize) -> Vec<f32> {
    let store = FilesystemStore::new(path).unwrap();
    let array = Array::open(Arc::new(store), "/").unwrap();
    assert_eq!(array.shape(), &[height as u64, width as u64]);

    let subset =
        ArraySubset::new_with_start_shape(vec![0, 0], vec![height as u64, width as u64]).unwrap();
    array.retrieve_array_subset_elements::<f32>(&subset).unwrap()
}

fn config(compression: ZarrCompression) -> ChunkWriterConfig {
    ChunkWriterConfig {
        chunk_width: scene::RAGGED.chunk_width,
        chunk_height: scene::RAGGED.chunk_height,
        zarr_compression: compression,
        ..Default::default()
    }
}

#[test]
fn test_partitioned_writes_round_trip() {
    let spec = scene::RAGGED;
    let data = create_test_grid(spec.width, spec.height);

    for compression in [
        ZarrCompression::None,
        ZarrCompression::BloscLz4,
        ZarrCompression::BloscZstd,
    ] {
        let dir = temp_test_dir();
        let config = config(compression);
        let store = FilesystemStore::new(dir.path()).unwrap();
        let sink = ZarrChunkSink::create(
            store,
            "/",
            spec.width,
            spec.height,
            &config,
            serde_json::Map::new(),
        )
        .unwrap();

        let mut writer =
            ChunkWriter::from_config(spec.width, spec.height, &config, WriteOnceSink::new(sink))
                .unwrap();
        for (x, y, w, h) in split_region(spec.width, spec.height, 4, 17) {
            writer
                .write(x, y, w, h, &extract_region(&data, spec.width, (x, y, w, h)))
                .unwrap();
        }

        let sink = writer.finish().unwrap().into_inner();
        assert_eq!(sink.chunks_written(), spec.chunk_count());
        assert_eq!(sink.bytes_written(), (spec.size() * 4) as u64);

        assert_eq!(read_back(dir.path(), spec.width, spec.height), data, "{compression}");
    }
}

#[test]
fn test_unwritten_chunks_read_as_nan() {
    let dir = temp_test_dir();
    let config = config(ZarrCompression::None);
    let store = FilesystemStore::new(dir.path()).unwrap();
    let sink = ZarrChunkSink::create(store, "/", 32, 32, &config, serde_json::Map::new()).unwrap();

    let mut writer = ChunkWriter::from_config(32, 32, &config, sink).unwrap();
    writer.write(16, 0, 16, 16, &[5.0; 256]).unwrap();
    writer.finish().unwrap();

    let values = read_back(dir.path(), 32, 32);
    assert_eq!(values[20], 5.0);
    assert!(values[0].is_nan());
    assert!(values[31 * 32 + 31].is_nan());
}

#[test]
fn test_attributes_are_stored() {
    let dir = temp_test_dir();
    let mut attributes = serde_json::Map::new();
    attributes.insert("resampling".to_string(), serde_json::json!("CUBIC_CONVOLUTION"));

    let store = FilesystemStore::new(dir.path()).unwrap();
    ZarrChunkSink::create(store, "/", 8, 8, &config(ZarrCompression::None), attributes).unwrap();

    let store = FilesystemStore::new(dir.path()).unwrap();
    let array = Array::open(Arc::new(store), "/").unwrap();
    assert_eq!(
        array.attributes().get("resampling"),
        Some(&serde_json::json!("CUBIC_CONVOLUTION"))
    );
}

#[test]
fn test_invalid_config_rejected() {
    let dir = temp_test_dir();
    let store = FilesystemStore::new(dir.path()).unwrap();
    let config = ChunkWriterConfig {
        chunk_width: 0,
        ..Default::default()
    };

    assert!(ZarrChunkSink::create(store, "/", 8, 8, &config, serde_json::Map::new()).is_err());
}
