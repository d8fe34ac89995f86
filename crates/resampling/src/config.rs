//! Configuration for grid resampling.

use serde::{Deserialize, Serialize};

use crate::factory::ResamplingMethod;

/// Configuration for grid resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResamplingConfig {
    /// Kernel used for every target pixel.
    pub method: ResamplingMethod,

    /// Spread target rows over the rayon thread pool.
    pub parallel: bool,
}

impl Default for ResamplingConfig {
    fn default() -> Self {
        Self {
            method: ResamplingMethod::Bilinear,
            parallel: false,
        }
    }
}

impl ResamplingConfig {
    /// Load configuration from environment variables.
    ///
    /// Unknown or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("RESAMPLING_METHOD") {
            match ResamplingMethod::from_name(&val) {
                Some(method) => config.method = method,
                None => tracing::warn!(value = %val, "Ignoring unknown RESAMPLING_METHOD"),
            }
        }

        if let Ok(val) = std::env::var("RESAMPLING_PARALLEL") {
            config.parallel = val.to_lowercase() == "true" || val == "1";
        }

        config
    }
}
