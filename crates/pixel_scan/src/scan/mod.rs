//! Scan patterns: the sources of every point stream.
//!
//! Rectangular patterns ([`gridscan`], [`snakescan`]) run along x first and then y.
//! Radial patterns ([`circlescan`], [`ringscan`]) walk each radius clockwise starting
//! from the top. [`hilbertscan`] follows a Hilbert curve and [`walkscan`] is an
//! unbounded random walk.
use rand::RngCore;

use crate::error::{Error, Result};
use crate::transform::{reservoir, Reservoir};

pub mod circle;
pub mod grid;
pub mod hilbert;
pub mod ring;
pub mod snake;
pub mod walk;

pub use circle::{circlescan, CircleScan};
pub use grid::{gridscan, GridScan};
pub use hilbert::{hilbertscan, HilbertScan};
pub use ring::{ringscan, RingScan};
pub use snake::{snakescan, SnakeScan};
pub use walk::{walkscan, WalkProbabilities, WalkScan};

/// Scan `npoints` distinct cells of the rectangle `[xi, xf] x [yi, yf]` in random order.
///
/// Equivalent to reservoir-sampling a [`gridscan`] of the same rectangle; the whole
/// rectangle is enumerated once before this returns.
pub fn randomscan(
    xi: i64,
    yi: i64,
    xf: i64,
    yf: i64,
    npoints: usize,
    rng: &mut impl RngCore,
) -> Result<Reservoir> {
    reservoir(gridscan(xi, yi, xf, yf, 1, 1)?, npoints, rng)
}

/// Inclusive run of integers from `start` towards `end` in steps of `step`.
///
/// Values past `end` are never produced, even when `step` does not divide the span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AxisSpan {
    pub(crate) start: i64,
    pub(crate) end: i64,
    step: i64,
}

impl AxisSpan {
    /// Span from `start` to `end` with a step magnitude of `step` (> 0).
    pub(crate) fn new(start: i64, end: i64, step: i64) -> Self {
        debug_assert!(step > 0);
        let step = if end >= start { step } else { -step };
        Self { start, end, step }
    }

    /// The same cells walked in the opposite direction, starting from `end`.
    pub(crate) fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            step: -self.step,
        }
    }

    /// Value following `v`, or `None` once `end` would be passed.
    pub(crate) fn after(&self, v: i64) -> Option<i64> {
        let next = v.checked_add(self.step)?;
        let inside = if self.step > 0 {
            next <= self.end
        } else {
            next >= self.end
        };
        inside.then_some(next)
    }

    /// Number of values in the span.
    pub(crate) fn len(&self) -> u64 {
        self.start.abs_diff(self.end) / self.step.unsigned_abs() + 1
    }
}

/// Radii from `r1` to `r2` inclusive, stepping outward or inward.
#[derive(Clone, Debug)]
pub(crate) struct RadiusRange {
    next: Option<i64>,
    last: i64,
    step: i64,
}

impl RadiusRange {
    pub(crate) fn new(r1: i64, r2: i64) -> Result<Self> {
        if r1 < 0 {
            return Err(Error::invalid(format!(
                "initial radius must be >= 0, got {r1}"
            )));
        }
        if r2 < 0 {
            return Err(Error::invalid(format!(
                "final radius must be >= 0, got {r2}"
            )));
        }
        Ok(Self {
            next: Some(r1),
            last: r2,
            step: if r2 >= r1 { 1 } else { -1 },
        })
    }
}

impl Iterator for RadiusRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let radius = self.next?;
        self.next = (radius != self.last).then(|| radius + self.step);
        Some(radius)
    }
}
