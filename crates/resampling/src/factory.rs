//! Resampling method names and kernel selection.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::Index;
use crate::kernel::{BiCubic, BiSinc, Bilinear, CubicConvolution, NearestNeighbour, Resampler};
use crate::raster::Raster;

pub const NEAREST_NEIGHBOUR: &str = "NEAREST_NEIGHBOUR";
pub const BILINEAR_INTERPOLATION: &str = "BILINEAR_INTERPOLATION";
pub const CUBIC_CONVOLUTION: &str = "CUBIC_CONVOLUTION";
pub const BISINC_5_POINT_INTERPOLATION: &str = "BISINC_5_POINT_INTERPOLATION";
pub const BISINC_11_POINT_INTERPOLATION: &str = "BISINC_11_POINT_INTERPOLATION";
pub const BISINC_21_POINT_INTERPOLATION: &str = "BISINC_21_POINT_INTERPOLATION";
pub const BICUBIC_INTERPOLATION: &str = "BICUBIC_INTERPOLATION";

/// The available resampling methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResamplingMethod {
    #[serde(rename = "NEAREST_NEIGHBOUR")]
    NearestNeighbour,
    #[default]
    #[serde(rename = "BILINEAR_INTERPOLATION")]
    Bilinear,
    #[serde(rename = "CUBIC_CONVOLUTION")]
    CubicConvolution,
    #[serde(rename = "BISINC_5_POINT_INTERPOLATION")]
    BiSinc5,
    #[serde(rename = "BISINC_11_POINT_INTERPOLATION")]
    BiSinc11,
    #[serde(rename = "BISINC_21_POINT_INTERPOLATION")]
    BiSinc21,
    #[serde(rename = "BICUBIC_INTERPOLATION")]
    BiCubic,
}

impl ResamplingMethod {
    /// Every method, in factory order.
    pub const ALL: [ResamplingMethod; 7] = [
        Self::NearestNeighbour,
        Self::Bilinear,
        Self::CubicConvolution,
        Self::BiSinc5,
        Self::BiSinc11,
        Self::BiSinc21,
        Self::BiCubic,
    ];

    /// The fixed identifier of this method.
    pub fn name(self) -> &'static str {
        match self {
            Self::NearestNeighbour => NEAREST_NEIGHBOUR,
            Self::Bilinear => BILINEAR_INTERPOLATION,
            Self::CubicConvolution => CUBIC_CONVOLUTION,
            Self::BiSinc5 => BISINC_5_POINT_INTERPOLATION,
            Self::BiSinc11 => BISINC_11_POINT_INTERPOLATION,
            Self::BiSinc21 => BISINC_21_POINT_INTERPOLATION,
            Self::BiCubic => BICUBIC_INTERPOLATION,
        }
    }

    /// Look up a method by its identifier. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.name() == name)
    }

    /// All identifiers, in factory order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::name)
    }
}

impl std::fmt::Display for ResamplingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A resampling kernel selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resampling {
    NearestNeighbour(NearestNeighbour),
    Bilinear(Bilinear),
    CubicConvolution(CubicConvolution),
    BiSinc(BiSinc),
    BiCubic(BiCubic),
}

impl Resampling {
    /// The kernel implementing `method`.
    pub fn from_method(method: ResamplingMethod) -> Self {
        match method {
            ResamplingMethod::NearestNeighbour => Self::NearestNeighbour(NearestNeighbour),
            ResamplingMethod::Bilinear => Self::Bilinear(Bilinear),
            ResamplingMethod::CubicConvolution => Self::CubicConvolution(CubicConvolution),
            ResamplingMethod::BiSinc5 => Self::BiSinc(BiSinc::FIVE),
            ResamplingMethod::BiSinc11 => Self::BiSinc(BiSinc::ELEVEN),
            ResamplingMethod::BiSinc21 => Self::BiSinc(BiSinc::TWENTY_ONE),
            ResamplingMethod::BiCubic => Self::BiCubic(BiCubic),
        }
    }
}

impl From<ResamplingMethod> for Resampling {
    fn from(method: ResamplingMethod) -> Self {
        Self::from_method(method)
    }
}

/// Create the kernel registered under `name`, or `None` for unknown names.
pub fn create_resampling(name: &str) -> Option<Resampling> {
    ResamplingMethod::from_name(name).map(Resampling::from_method)
}

macro_rules! dispatch {
    ($self:expr, $kernel:ident => $body:expr) => {
        match $self {
            Resampling::NearestNeighbour($kernel) => $body,
            Resampling::Bilinear($kernel) => $body,
            Resampling::CubicConvolution($kernel) => $body,
            Resampling::BiSinc($kernel) => $body,
            Resampling::BiCubic($kernel) => $body,
        }
    };
}

impl Resampler for Resampling {
    fn name(&self) -> &'static str {
        dispatch!(self, k => k.name())
    }

    fn create_index(&self) -> Index {
        dispatch!(self, k => k.create_index())
    }

    fn compute_index(&self, x: f64, y: f64, width: usize, height: usize, index: &mut Index) {
        dispatch!(self, k => k.compute_index(x, y, width, height, index))
    }

    fn compute_corner_based_index(
        &self,
        x: f64,
        y: f64,
        width: usize,
        height: usize,
        index: &mut Index,
    ) {
        dispatch!(self, k => k.compute_corner_based_index(x, y, width, height, index))
    }

    fn resample<R: Raster + ?Sized>(&self, raster: &R, index: &mut Index) -> Result<f64> {
        dispatch!(self, k => k.resample(raster, index))
    }

    fn kernel_size(&self) -> usize {
        dispatch!(self, k => k.kernel_size())
    }
}
