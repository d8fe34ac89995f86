//! Common test fixtures for raster-toolkit tests.
//!
//! This module provides pre-defined scene geometries and small rasters
//! that represent common scenarios in chunked raster processing.

/// Scene and chunk geometries for chunk-writer tests.
pub mod scene {
    /// Scene dimensions are multiples of the chunk size.
    pub const ALIGNED: SceneSpec = SceneSpec {
        width: 64,
        height: 48,
        chunk_width: 16,
        chunk_height: 16,
    };

    /// Right and bottom edge chunks are truncated (6 and 13 pixels).
    pub const RAGGED: SceneSpec = SceneSpec {
        width: 70,
        height: 45,
        chunk_width: 16,
        chunk_height: 16,
    };

    /// A scene smaller than one nominal chunk.
    pub const SINGLE_CHUNK: SceneSpec = SceneSpec {
        width: 10,
        height: 7,
        chunk_width: 32,
        chunk_height: 32,
    };

    /// Full-width strips, as written by row-oriented producers.
    pub const STRIPS: SceneSpec = SceneSpec {
        width: 40,
        height: 30,
        chunk_width: 40,
        chunk_height: 4,
    };

    /// Scene specification for testing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SceneSpec {
        pub width: usize,
        pub height: usize,
        pub chunk_width: usize,
        pub chunk_height: usize,
    }

    impl SceneSpec {
        /// Returns the total number of pixels.
        pub fn size(&self) -> usize {
            self.width * self.height
        }

        /// Returns the number of chunks along x and y.
        pub fn num_chunks(&self) -> (usize, usize) {
            (
                (self.width + self.chunk_width - 1) / self.chunk_width,
                (self.height + self.chunk_height - 1) / self.chunk_height,
            )
        }

        /// Returns the total number of chunks.
        pub fn chunk_count(&self) -> usize {
            let (x, y) = self.num_chunks();
            x * y
        }
    }
}

/// Small rasters with hand-checkable interpolation results.
pub mod rasters {
    /// 2×2 raster `[[0, 2], [4, 6]]`.
    pub const QUAD: [f32; 4] = [0.0, 2.0, 4.0, 6.0];

    /// 3×3 raster with values 1 to 9.
    pub const NINE: [f32; 9] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
}

/// Common resampling method identifiers.
pub mod methods {
    pub const INTERPOLATING: [&str; 6] = [
        "BILINEAR_INTERPOLATION",
        "CUBIC_CONVOLUTION",
        "BISINC_5_POINT_INTERPOLATION",
        "BISINC_11_POINT_INTERPOLATION",
        "BISINC_21_POINT_INTERPOLATION",
        "BICUBIC_INTERPOLATION",
    ];

    pub const ALL: [&str; 7] = [
        "NEAREST_NEIGHBOUR",
        "BILINEAR_INTERPOLATION",
        "CUBIC_CONVOLUTION",
        "BISINC_5_POINT_INTERPOLATION",
        "BISINC_11_POINT_INTERPOLATION",
        "BISINC_21_POINT_INTERPOLATION",
        "BICUBIC_INTERPOLATION",
    ];
}
