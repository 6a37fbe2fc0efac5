//! Fixed-size uniform sample of a finite stream.
use std::iter::FusedIterator;

use rand::RngCore;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::point::Point;
use crate::random::{rand_inclusive, shuffle};
use crate::stream::PointStream;

/// Replays a uniform random sample drawn from an already drained stream.
#[derive(Clone, Debug)]
pub struct Reservoir {
    points: std::vec::IntoIter<Point>,
}

/// Draw `npoints` points uniformly at random from `stream` by reservoir sampling.
///
/// Unlike every other transformation this is eager: the whole upstream is consumed
/// before it returns, so `stream` must be finite (bound a [`crate::scan::walkscan`] with
/// [`crate::transform::skip`] or an aborting [`crate::transform::clip`] first). The
/// sample is shuffled before being replayed. A stream with fewer than `npoints` points
/// is replayed in full, in random order.
pub fn reservoir<S: PointStream>(
    stream: S,
    npoints: usize,
    rng: &mut impl RngCore,
) -> Result<Reservoir> {
    if npoints == 0 {
        return Err(Error::invalid("reservoir size must be > 0"));
    }

    let mut sample = Vec::with_capacity(npoints);
    let mut seen = 0_usize;
    for (index, point) in stream.enumerate() {
        seen = index + 1;
        if index < npoints {
            sample.push(point);
        } else {
            let slot = rand_inclusive(&mut *rng, index);
            if slot < npoints {
                sample[slot] = point;
            }
        }
    }
    shuffle(&mut sample, rng);

    if seen < npoints {
        warn!(
            "Reservoir of {} points filled from only {} upstream points.",
            npoints, seen
        );
    } else {
        debug!("Reservoir sampled {} of {} points.", npoints, seen);
    }

    Ok(Reservoir {
        points: sample.into_iter(),
    })
}

impl Iterator for Reservoir {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.points.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl ExactSizeIterator for Reservoir {}

impl FusedIterator for Reservoir {}
