//! Bounding-box and predicate filter.
use std::fmt;
use std::iter::FusedIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::stream::PointStream;

/// Inclusive bounds and abort behaviour for [`clip`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClipConfig {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    /// End the stream at the first rejected point instead of skipping it.
    pub abort: bool,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            min_x: -f64::MAX,
            max_x: f64::MAX,
            min_y: -f64::MAX,
            max_y: f64::MAX,
            abort: false,
        }
    }
}

impl ClipConfig {
    /// Unbounded clip that never aborts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive x range.
    pub fn with_x_range(mut self, min_x: f64, max_x: f64) -> Self {
        self.min_x = min_x;
        self.max_x = max_x;
        self
    }

    /// Sets the inclusive y range.
    pub fn with_y_range(mut self, min_y: f64, max_y: f64) -> Self {
        self.min_y = min_y;
        self.max_y = max_y;
        self
    }

    /// Sets whether the first rejected point ends the stream.
    pub fn with_abort(mut self, abort: bool) -> Self {
        self.abort = abort;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.min_x.is_nan() || self.max_x.is_nan() || self.min_y.is_nan() || self.max_y.is_nan()
        {
            return Err(Error::invalid("clip bounds must not be NaN"));
        }
        if self.min_x > self.max_x {
            return Err(Error::invalid(format!(
                "clip min_x ({}) must be <= max_x ({})",
                self.min_x, self.max_x
            )));
        }
        if self.min_y > self.max_y {
            return Err(Error::invalid(format!(
                "clip min_y ({}) must be <= max_y ({})",
                self.min_y, self.max_y
            )));
        }
        Ok(())
    }

    fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

type Predicate = Box<dyn Fn(Point) -> bool>;

/// Drops (or stops at) points outside the bounds or rejected by the predicate.
pub struct Clip<S> {
    upstream: S,
    config: ClipConfig,
    predicate: Option<Predicate>,
    done: bool,
}

impl<S: PointStream> Clip<S> {
    pub fn try_new(upstream: S, config: ClipConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            upstream,
            config,
            predicate: None,
            done: false,
        })
    }

    /// Additionally require `predicate(point)` to hold for a point to pass.
    pub fn with_predicate(mut self, predicate: impl Fn(Point) -> bool + 'static) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    fn accepts(&self, p: Point) -> bool {
        self.predicate.as_ref().is_none_or(|keep| keep(p)) && self.config.contains(p)
    }
}

/// Keep only the points inside the inclusive bounds of `config`.
///
/// With `config.abort` set, the first point that falls outside ends the stream, which
/// also bounds infinite scans such as [`crate::scan::walkscan`].
pub fn clip<S: PointStream>(stream: S, config: ClipConfig) -> Result<Clip<S>> {
    Clip::try_new(stream, config)
}

impl<S: PointStream> Iterator for Clip<S> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        loop {
            let Some(p) = self.upstream.next() else {
                self.done = true;
                return None;
            };
            if self.accepts(p) {
                return Some(p);
            }
            if self.config.abort {
                debug!("Clip boundary crossed at ({}, {}); aborting.", p.x, p.y);
                self.done = true;
                return None;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        (0, self.upstream.size_hint().1)
    }
}

impl<S: PointStream> FusedIterator for Clip<S> {}

impl<S: fmt::Debug> fmt::Debug for Clip<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clip")
            .field("upstream", &self.upstream)
            .field("config", &self.config)
            .field("has_predicate", &self.predicate.is_some())
            .field("done", &self.done)
            .finish()
    }
}
