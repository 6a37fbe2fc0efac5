//! Unbounded random walk on the grid.
use std::iter::FusedIterator;

use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::random::rand01;

/// Relative weights of the four unit moves of [`walkscan`].
///
/// The weights are normalized to sum to one, so only their ratios matter.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WalkProbabilities {
    /// Weight of a step towards negative x.
    pub xn: f64,
    /// Weight of a step towards positive x.
    pub xp: f64,
    /// Weight of a step towards negative y.
    pub yn: f64,
    /// Weight of a step towards positive y.
    pub yp: f64,
}

impl Default for WalkProbabilities {
    fn default() -> Self {
        Self {
            xn: 0.25,
            xp: 0.25,
            yn: 0.25,
            yp: 0.25,
        }
    }
}

impl WalkProbabilities {
    pub fn new(xn: f64, xp: f64, yn: f64, yp: f64) -> Self {
        Self { xn, xp, yn, yp }
    }

    /// Sets the weights of the negative and positive x moves.
    pub fn with_x(mut self, xn: f64, xp: f64) -> Self {
        self.xn = xn;
        self.xp = xp;
        self
    }

    /// Sets the weights of the negative and positive y moves.
    pub fn with_y(mut self, yn: f64, yp: f64) -> Self {
        self.yn = yn;
        self.yp = yp;
        self
    }

    /// Validates the weights, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("xn", self.xn),
            ("xp", self.xp),
            ("yn", self.yn),
            ("yp", self.yp),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid(format!(
                    "walk probability {name} must be finite and >= 0, got {value}"
                )));
            }
        }
        if self.total() <= 0.0 {
            return Err(Error::invalid("walk probabilities must not all be zero"));
        }
        Ok(())
    }

    fn total(&self) -> f64 {
        self.xn + self.xp + self.yn + self.yp
    }

    /// Upper edges of the `-x`, `+x` and `-y` bands; anything above moves `+y`.
    fn bands(&self) -> [f64; 3] {
        let total = self.total();
        let xn = self.xn / total;
        let xp = xn + self.xp / total;
        let yn = xp + self.yn / total;
        [xn, xp, yn]
    }
}

/// Random walk, see [`walkscan`].
#[derive(Clone, Debug)]
pub struct WalkScan<R> {
    position: (i64, i64),
    bands: [f64; 3],
    rng: R,
}

/// Walk randomly from `(x0, y0)`, taking one unit step per point.
///
/// The first point is the start itself. The walk never ends on its own: bound it with
/// [`crate::transform::skip`] (finite `stop`), an aborting [`crate::transform::clip`],
/// or [`Iterator::take`].
pub fn walkscan<R: RngCore>(
    x0: i64,
    y0: i64,
    probabilities: WalkProbabilities,
    rng: R,
) -> Result<WalkScan<R>> {
    probabilities.validate()?;
    let bands = probabilities.bands();
    debug!(
        "Random walk from ({}, {}) with cumulative bands {:?}.",
        x0, y0, bands
    );
    Ok(WalkScan {
        position: (x0, y0),
        bands,
        rng,
    })
}

impl<R: RngCore> Iterator for WalkScan<R> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let (x, y) = self.position;
        let roll = rand01(&mut self.rng);
        let [xn, xp, yn] = self.bands;
        self.position = if roll <= xn {
            (x - 1, y)
        } else if roll <= xp {
            (x + 1, y)
        } else if roll <= yn {
            (x, y - 1)
        } else {
            (x, y + 1)
        };
        Some(Point::cell(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore> FusedIterator for WalkScan<R> {}
