//! Distance metrics used to decide ring membership.
//!
//! [`crate::scan::ringscan`] accepts anything implementing [`DistanceMetric`]: the
//! [`chebyshev`] and [`manhattan`] functions, the configurable [`Metric`] enum, or any
//! closure `Fn(Point, Point) -> f64`.
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::point::Point;

/// A pure, symmetric distance between two points.
pub trait DistanceMetric {
    fn distance(&self, a: Point, b: Point) -> f64;
}

impl<F> DistanceMetric for F
where
    F: Fn(Point, Point) -> f64,
{
    fn distance(&self, a: Point, b: Point) -> f64 {
        self(a, b)
    }
}

/// Chessboard distance: `max(|dx|, |dy|)`.
pub fn chebyshev(a: Point, b: Point) -> f64 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Taxicab distance: `|dx| + |dy|`.
pub fn manhattan(a: Point, b: Point) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Built-in metrics, selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    #[default]
    Chebyshev,
    Manhattan,
}

impl DistanceMetric for Metric {
    fn distance(&self, a: Point, b: Point) -> f64 {
        match self {
            Metric::Chebyshev => chebyshev(a, b),
            Metric::Manhattan => manhattan(a, b),
        }
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chebyshev" => Ok(Metric::Chebyshev),
            "manhattan" => Ok(Metric::Manhattan),
            other => Err(Error::invalid(format!("unknown metric '{other}'"))),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Chebyshev => f.write_str("chebyshev"),
            Metric::Manhattan => f.write_str("manhattan"),
        }
    }
}
