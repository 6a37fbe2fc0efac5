//! Bernoulli sampling of a stream.
use std::iter::FusedIterator;

use rand::RngCore;
use tracing::warn;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::random::rand01;
use crate::stream::PointStream;

/// Keeps each upstream point independently with a fixed probability.
#[derive(Clone, Debug)]
pub struct Sample<S, R> {
    upstream: S,
    probability: f64,
    rng: R,
}

/// Keep each point with the given `probability` in `[0, 1]`, drawing from `rng`.
///
/// The number of emitted points is random unless `probability` is 1, in which case
/// every point passes without consuming randomness. Use
/// [`crate::transform::reservoir`] to draw an exact number of points instead.
pub fn sample<S: PointStream, R: RngCore>(
    stream: S,
    probability: f64,
    rng: R,
) -> Result<Sample<S, R>> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(Error::invalid(format!(
            "sampling probability must be in [0, 1], got {probability}"
        )));
    }
    if probability == 0.0 {
        warn!("Sampling probability is 0; the stream will drain its upstream and emit nothing.");
    }
    Ok(Sample {
        upstream: stream,
        probability,
        rng,
    })
}

impl<S: PointStream, R: RngCore> Iterator for Sample<S, R> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.probability >= 1.0 {
            return self.upstream.next();
        }
        loop {
            let p = self.upstream.next()?;
            if rand01(&mut self.rng) < self.probability {
                return Some(p);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.upstream.size_hint();
        if self.probability >= 1.0 {
            (lower, upper)
        } else {
            (0, upper)
        }
    }
}

impl<S: PointStream, R: RngCore> FusedIterator for Sample<S, R> {}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::random::tests::FixedRng;
    use crate::scan::{gridscan, hilbertscan};

    #[test]
    fn probability_one_passes_everything() {
        let grid = gridscan(0, 0, 4, 4, 1, 1).unwrap();
        let all: Vec<Point> = sample(grid, 1.0, FixedRng { value: u64::MAX })
            .unwrap()
            .collect();
        assert_eq!(all, gridscan(0, 0, 4, 4, 1, 1).unwrap().collect::<Vec<_>>());
    }

    #[test]
    fn probability_zero_emits_nothing() {
        let grid = gridscan(0, 0, 4, 4, 1, 1).unwrap();
        let mut none = sample(grid, 0.0, FixedRng { value: 0 }).unwrap();
        assert_eq!(none.next(), None);
        assert_eq!(none.next(), None);
    }

    #[test]
    fn draws_are_compared_against_the_probability() {
        let keep = sample(hilbertscan(4, 16).unwrap(), 0.5, FixedRng::at(0.49)).unwrap();
        assert_eq!(keep.count(), 16);
        let drop = sample(hilbertscan(4, 16).unwrap(), 0.5, FixedRng::at(0.51)).unwrap();
        assert_eq!(drop.count(), 0);
    }

    #[test]
    fn sampled_points_are_an_ordered_subset() {
        let full: Vec<Point> = hilbertscan(32, 1024).unwrap().collect();
        let picked: Vec<Point> = sample(hilbertscan(32, 1024).unwrap(), 0.3, StdRng::seed_from_u64(1))
            .unwrap()
            .collect();
        assert!(picked.len() > 200 && picked.len() < 420, "got {}", picked.len());

        let mut it = full.iter();
        for p in &picked {
            assert!(it.any(|q| q == p), "{p:?} out of order");
        }
    }

    #[test]
    fn same_seed_same_sample() {
        let run = |seed| {
            sample(gridscan(0, 0, 9, 9, 1, 1).unwrap(), 0.5, StdRng::seed_from_u64(seed))
                .unwrap()
                .collect::<Vec<_>>()
        };
        assert_eq!(run(3), run(3));
    }

    #[test]
    fn rejects_out_of_range_probabilities() {
        let grid = || gridscan(0, 0, 1, 1, 1, 1).unwrap();
        assert!(sample(grid(), -0.1, FixedRng { value: 0 }).is_err());
        assert!(sample(grid(), 1.5, FixedRng { value: 0 }).is_err());
        assert!(sample(grid(), f64::NAN, FixedRng { value: 0 }).is_err());
    }
}
