//! Integration tests: every chunk is flushed exactly once, with the same
//! content, however the scene is split into writes.

use std::collections::HashMap;

use chunk_writer::{ChunkWriter, ChunkWriterError, MemorySink, Rect, WriteOnceSink};
use test_utils::fixtures::scene::{self, SceneSpec};
use test_utils::{create_test_grid, extract_region, split_region};

fn writer_for(spec: &SceneSpec, y_flipped: bool) -> ChunkWriter<f32, MemorySink<f32>> {
    ChunkWriter::new(
        spec.width,
        spec.height,
        spec.chunk_width,
        spec.chunk_height,
        y_flipped,
        MemorySink::new(),
    )
    .unwrap()
}

fn flushed_by_rect(sink: &MemorySink<f32>) -> HashMap<Rect, Vec<f32>> {
    let mut chunks = HashMap::new();
    for (rect, data) in sink.chunks() {
        let previous = chunks.insert(*rect, data.clone());
        assert!(previous.is_none(), "chunk {rect} flushed twice");
    }
    chunks
}

#[test]
fn test_any_partition_flushes_each_chunk_once() {
    for spec in [scene::ALIGNED, scene::RAGGED, scene::SINGLE_CHUNK, scene::STRIPS] {
        let data = create_test_grid(spec.width, spec.height);

        let mut reference = writer_for(&spec, false);
        reference.write(0, 0, spec.width, spec.height, &data).unwrap();
        let expected = flushed_by_rect(&reference.finish().unwrap());
        assert_eq!(expected.len(), spec.chunk_count());

        for seed in [1, 7, 42, 1234] {
            let mut writer = writer_for(&spec, false);
            for (x, y, w, h) in split_region(spec.width, spec.height, 3, seed) {
                let piece = extract_region(&data, spec.width, (x, y, w, h));
                writer.write(x, y, w, h, &piece).unwrap();
            }

            assert_eq!(writer.pending_chunks(), 0, "{spec:?} seed {seed}");
            let flushed = flushed_by_rect(&writer.finish().unwrap());
            assert_eq!(flushed, expected, "{spec:?} seed {seed}");
        }
    }
}

#[test]
fn test_chunk_content_matches_scene() {
    let spec = scene::RAGGED;
    let data = create_test_grid(spec.width, spec.height);

    let mut writer = writer_for(&spec, false);
    for (x, y, w, h) in split_region(spec.width, spec.height, 5, 99) {
        writer
            .write(x, y, w, h, &extract_region(&data, spec.width, (x, y, w, h)))
            .unwrap();
    }

    let sink = writer.finish().unwrap();
    for (rect, chunk) in sink.chunks() {
        let region = (rect.x, rect.y, rect.width, rect.height);
        assert_eq!(*chunk, extract_region(&data, spec.width, region));
    }
    assert_eq!(sink.assemble(spec.width, spec.height, f32::NAN), data);
}

#[test]
fn test_edge_chunks_are_cut_to_scene() {
    let spec = scene::RAGGED;
    let data = create_test_grid(spec.width, spec.height);

    let mut writer = writer_for(&spec, false);
    let (columns, rows) = writer.num_chunks();
    assert_eq!((columns, rows), (5, 3));

    writer.write(0, 0, spec.width, spec.height, &data).unwrap();
    let flushed = flushed_by_rect(&writer.finish().unwrap());

    assert!(flushed.contains_key(&Rect::new(64, 0, 6, 16)));
    assert!(flushed.contains_key(&Rect::new(0, 32, 16, 13)));
    assert!(flushed.contains_key(&Rect::new(64, 32, 6, 13)));
    assert_eq!(flushed[&Rect::new(64, 32, 6, 13)].len(), 6 * 13);
}

#[test]
fn test_y_flip_reverses_rows() {
    let spec = scene::ALIGNED;
    let data = create_test_grid(spec.width, spec.height);

    let mut writer = writer_for(&spec, true);
    for (x, y, w, h) in split_region(spec.width, spec.height, 4, 5) {
        writer
            .write(x, y, w, h, &extract_region(&data, spec.width, (x, y, w, h)))
            .unwrap();
    }
    let sink = writer.finish().unwrap();

    let flipped: Vec<f32> = data.chunks(spec.width).rev().flatten().copied().collect();
    assert_eq!(sink.assemble(spec.width, spec.height, f32::NAN), flipped);
}

#[test]
fn test_y_flip_single_region_origin() {
    let mut writer = ChunkWriter::new(4, 6, 4, 2, true, MemorySink::new()).unwrap();

    // Rows 1..3 of the bottom-up input are scene rows 3..5.
    writer.write(0, 1, 4, 2, &[1, 1, 1, 1, 2, 2, 2, 2]).unwrap();

    assert_eq!(writer.pending_chunks(), 2);
    writer.write(0, 0, 4, 1, &[0; 4]).unwrap();
    writer.write(0, 3, 4, 1, &[3; 4]).unwrap();

    let chunks = writer.sink().chunks();
    assert_eq!(chunks.len(), 2);
    assert!(chunks.contains(&(Rect::new(0, 4, 4, 2), vec![1, 1, 1, 1, 0, 0, 0, 0])));
    assert!(chunks.contains(&(Rect::new(0, 2, 4, 2), vec![3, 3, 3, 3, 2, 2, 2, 2])));
}

#[test]
fn test_row_strips_keep_one_chunk_pending() {
    let spec = scene::STRIPS;
    let data = create_test_grid(spec.width, spec.height);
    let mut writer = writer_for(&spec, false);

    for row in 0..spec.height {
        writer
            .write(0, row, spec.width, 1, &extract_region(&data, spec.width, (0, row, spec.width, 1)))
            .unwrap();
        assert!(writer.pending_chunks() <= 1);
        if row + 1 < spec.height {
            assert_eq!(writer.written_chunks(), (row + 1) / spec.chunk_height);
        }
    }

    // The 30-row scene ends in a 2-row chunk.
    assert_eq!(writer.written_chunks(), spec.chunk_count());
    assert_eq!(writer.chunk_rect(0, 7), Rect::new(0, 28, 40, 2));
}

#[test]
fn test_rewrite_after_flush_is_rejected() {
    let spec = scene::ALIGNED;
    let data = create_test_grid(spec.width, spec.height);
    let mut sink = WriteOnceSink::new(MemorySink::new());

    {
        let mut writer =
            ChunkWriter::new(spec.width, spec.height, 16, 16, false, &mut sink).unwrap();
        writer.write(0, 0, spec.width, spec.height, &data).unwrap();

        let err = writer
            .write(8, 8, 4, 4, &extract_region(&data, spec.width, (8, 8, 4, 4)))
            .unwrap_err();
        assert!(matches!(err, ChunkWriterError::ChunkAlreadyWritten { .. }));
        writer.finish().unwrap();
    }

    assert_eq!(sink.written(), spec.chunk_count());
    assert_eq!(sink.suppressed(), 0);
}
