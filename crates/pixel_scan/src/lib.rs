#![forbid(unsafe_code)]
//! pixel_scan: lazy scan patterns over a 2D grid and composable point transformations.
//!
//! Modules:
//! - scan: pattern sources (grid, snake, circle, ring, Hilbert curve, random walk)
//! - transform: wrappers that clip, reflect, rotate, scale, translate, swap, snap, skip
//!   and sample another stream
//! - stream: the [`stream::PointStream`] contract and the [`stream::ScanExt`] chaining API
//! - metric: distance metrics for ring scans
//! - bits: Hilbert curve bit operations
//!
//! Every scan and transformation is a fused iterator of [`point::Point`]s that computes
//! nothing until pulled. Randomized streams take their random source as an argument so
//! chains are reproducible under a fixed seed.
pub mod bits;
pub mod error;
pub mod metric;
pub mod point;
mod random;
pub mod scan;
pub mod stream;
pub mod transform;

/// Convenient re-exports for common types. Import with `use pixel_scan::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::metric::{chebyshev, manhattan, DistanceMetric, Metric};
    pub use crate::point::Point;
    pub use crate::scan::{
        circlescan, gridscan, hilbertscan, randomscan, ringscan, snakescan, walkscan,
        CircleScan, GridScan, HilbertScan, RingScan, SnakeScan, WalkProbabilities, WalkScan,
    };
    pub use crate::stream::{PointStream, ScanExt};
    pub use crate::transform::{
        clip, reflection, reservoir, rotation, sample, scale, skip, snap, swap, translation,
        Clip, ClipConfig, Reflection, Reservoir, Rotation, Sample, Scale, Skip, SkipConfig, Snap,
        Swap, Translation,
    };
}
