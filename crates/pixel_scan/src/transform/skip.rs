//! Index-based selection of points.
use std::iter::FusedIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::point::Point;
use crate::stream::PointStream;

/// Zero-based index window and stride for [`skip`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkipConfig {
    /// First upstream index that may be emitted.
    pub start: usize,
    /// Last upstream index that may be emitted; the stream ends after it.
    pub stop: usize,
    /// Emit every `step`-th point counting from `start`.
    pub step: usize,
}

impl Default for SkipConfig {
    fn default() -> Self {
        Self {
            start: 0,
            stop: usize::MAX,
            step: 1,
        }
    }
}

impl SkipConfig {
    pub fn new(start: usize, stop: usize, step: usize) -> Self {
        Self { start, stop, step }
    }

    /// Sets the first index.
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Sets the last index.
    pub fn with_stop(mut self, stop: usize) -> Self {
        self.stop = stop;
        self
    }

    /// Sets the stride.
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.stop < self.start {
            return Err(Error::invalid(format!(
                "skip stop ({}) must be >= start ({})",
                self.stop, self.start
            )));
        }
        if self.step == 0 {
            return Err(Error::invalid("skip step must be > 0"));
        }
        Ok(())
    }
}

/// Emits the upstream points whose index lies in `start..=stop` on the stride.
#[derive(Clone, Debug)]
pub struct Skip<S> {
    upstream: S,
    config: SkipConfig,
    /// Index of the next upstream point.
    index: usize,
    done: bool,
}

impl<S: PointStream> Skip<S> {
    pub fn try_new(upstream: S, config: SkipConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            upstream,
            config,
            index: 0,
            done: false,
        })
    }
}

/// Emit upstream points with index `start`, `start + step`, ... up to `stop` inclusive.
///
/// The stream ends once the index passes `stop`, so a finite `stop` bounds infinite
/// scans: `skip(walk, 0, n, 1)` yields exactly `n + 1` points.
pub fn skip<S: PointStream>(stream: S, start: usize, stop: usize, step: usize) -> Result<Skip<S>> {
    Skip::try_new(stream, SkipConfig::new(start, stop, step))
}

impl<S: PointStream> Iterator for Skip<S> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let SkipConfig { start, stop, step } = self.config;
        while !self.done {
            let Some(p) = self.upstream.next() else {
                self.done = true;
                break;
            };
            let index = self.index;
            self.index = self.index.saturating_add(1);
            // Nothing past `stop` can be emitted, so stop pulling upstream right away.
            if index >= stop {
                self.done = true;
            }
            if index >= start && (index - start) % step == 0 {
                return Some(p);
            }
        }
        None
    }
}

impl<S: PointStream> FusedIterator for Skip<S> {}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::scan::{gridscan, snakescan, walkscan, WalkProbabilities};

    fn cells(stream: impl Iterator<Item = Point>) -> Vec<(i64, i64)> {
        stream.map(Point::rounded).collect()
    }

    #[test]
    fn window_and_stride_select_indices() {
        let out = cells(skip(gridscan(0, 0, 2, 2, 1, 1).unwrap(), 1, 3, 2).unwrap());
        assert_eq!(out, vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn stride_only() {
        let out = cells(skip(snakescan(0, 0, 2, 2), 0, usize::MAX, 2).unwrap());
        assert_eq!(out, vec![(0, 0), (2, 0), (1, 1), (0, 2), (2, 2)]);
    }

    #[test]
    fn indices_over_a_counting_stream() {
        // x carries the original index.
        let stream = gridscan(0, 0, 19, 0, 1, 1).unwrap();
        let picked: Vec<i64> = skip(stream, 2, 11, 3)
            .unwrap()
            .map(|p| p.rounded().0)
            .collect();
        assert_eq!(picked, vec![2, 5, 8, 11]);
    }

    #[test]
    fn stop_bounds_a_random_walk() {
        for seed in 0..10 {
            let walk =
                walkscan(0, 0, WalkProbabilities::default(), StdRng::seed_from_u64(seed)).unwrap();
            let mut bounded = skip(walk, 0, 8, 1).unwrap();
            assert_eq!(bounded.by_ref().count(), 9);
            assert_eq!(bounded.next(), None);
        }
    }

    #[test]
    fn config_builder_and_defaults() {
        let config = SkipConfig::default().with_start(4).with_step(2);
        assert_eq!(config, SkipConfig::new(4, usize::MAX, 2));
        let out = cells(Skip::try_new(gridscan(0, 0, 7, 0, 1, 1).unwrap(), config).unwrap());
        assert_eq!(out, vec![(4, 0), (6, 0)]);
        assert_eq!(SkipConfig::default().with_stop(3).stop, 3);
    }

    #[test]
    fn rejects_bad_windows() {
        assert!(matches!(
            skip(snakescan(0, 0, 1, 1), 3, 2, 1),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            skip(snakescan(0, 0, 1, 1), 0, 2, 0),
            Err(Error::InvalidParameter(_))
        ));
    }
}
