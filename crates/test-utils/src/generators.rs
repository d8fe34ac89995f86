//! Test data generators for synthetic rasters and write patterns.
//!
//! These generators create predictable, verifiable test data that can be
//! used across the test suite.

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that data is being read/written correctly
/// by checking that grid[row][col] == col * 1000 + row.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
///
/// # Returns
///
/// A `Vec<f32>` in row-major order (row 0 first, then row 1, etc.)
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50); // 10 * 5
/// assert_eq!(grid[0], 0.0);   // col=0, row=0 -> 0*1000 + 0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0 -> 1*1000 + 0
/// assert_eq!(grid[10], 1.0);  // col=0, row=1 -> 0*1000 + 1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// Creates a linear ramp: `col * dx + row * dy`.
///
/// Every interpolating kernel should reproduce a ramp away from the edges.
pub fn create_ramp_grid(width: usize, height: usize, dx: f32, dy: f32) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push(col as f32 * dx + row as f32 * dy);
        }
    }
    data
}

/// Creates a grid with pseudo-random values in `[0, 100)`.
///
/// Uses a simple hash-based approach for reproducibility.
pub fn create_noise_grid(width: usize, height: usize, seed: u32) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let hash = simple_hash(col as u32, row as u32, seed);
            data.push((hash % 10_000) as f32 / 100.0);
        }
    }
    data
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

/// Creates a grid filled with a constant value.
pub fn create_constant_grid(width: usize, height: usize, value: f32) -> Vec<f32> {
    vec![value; width * height]
}

/// Creates a test grid (see [`create_test_grid`]) with NaN values at the
/// specified positions.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `nan_positions` - List of (col, row) positions that should be NaN
pub fn create_grid_with_nans(
    width: usize,
    height: usize,
    nan_positions: &[(usize, usize)],
) -> Vec<f32> {
    let mut data = create_test_grid(width, height);
    for &(col, row) in nan_positions {
        if col < width && row < height {
            data[row * width + col] = f32::NAN;
        }
    }
    data
}

/// A rectangular region as `(x, y, width, height)`.
pub type Region = (usize, usize, usize, usize);

/// Copies a rectangular region out of a row-major grid.
pub fn extract_region<T: Copy>(data: &[T], grid_width: usize, region: Region) -> Vec<T> {
    let (x, y, width, height) = region;
    let mut out = Vec::with_capacity(width * height);
    for row in y..y + height {
        let start = row * grid_width + x;
        out.extend_from_slice(&data[start..start + width]);
    }
    out
}

/// Partitions a `width × height` area into disjoint rectangles that tile
/// it exactly, returned in a shuffled order.
///
/// The partition is a random guillotine cut, deterministic for a given
/// seed. No piece is narrower or shorter than `min_size` unless the whole
/// area is.
pub fn split_region(width: usize, height: usize, min_size: usize, seed: u32) -> Vec<Region> {
    let min_size = min_size.max(1);
    let mut pieces = Vec::new();
    let mut stack = vec![(0, 0, width, height)];
    let mut step = 0u32;

    while let Some((x, y, w, h)) = stack.pop() {
        step = step.wrapping_add(1);
        let hash = simple_hash(x as u32, y as u32, seed.wrapping_add(step));

        let split_x = w >= 2 * min_size;
        let split_y = h >= 2 * min_size;
        let is_root = w == width && h == height;

        if (!split_x && !split_y) || (!is_root && hash % 4 == 0) {
            pieces.push((x, y, w, h));
            continue;
        }

        let along_x = split_x && (!split_y || hash % 2 == 0);
        if along_x {
            let cut = min_size + (hash >> 8) as usize % (w - 2 * min_size + 1);
            stack.push((x, y, cut, h));
            stack.push((x + cut, y, w - cut, h));
        } else {
            let cut = min_size + (hash >> 8) as usize % (h - 2 * min_size + 1);
            stack.push((x, y, w, cut));
            stack.push((x, y + cut, w, h - cut));
        }
    }

    shuffle(&mut pieces, seed);
    pieces
}

/// Deterministic Fisher-Yates shuffle.
pub fn shuffle<T>(items: &mut [T], seed: u32) {
    for i in (1..items.len()).rev() {
        let j = simple_hash(i as u32, 0, seed) as usize % (i + 1);
        items.swap(i, j);
    }
}
