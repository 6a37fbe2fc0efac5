//! Clockwise ring walk around a center point under a pluggable distance metric.
//!
//! Each ring starts directly above the center and is walked one neighbouring cell at a
//! time. The walker keeps its current heading while the next cell stays at the ring's
//! distance, and otherwise turns clockwise to the next of the eight headings. A ring is
//! complete when the walk returns to its starting cell. If all eight headings leave the
//! ring, the metric cannot be walked at this radius and the scan ends altogether.
use std::iter::FusedIterator;

use tracing::warn;

use crate::error::Result;
use crate::metric::DistanceMetric;
use crate::point::Point;
use crate::scan::RadiusRange;

/// Unit steps in clockwise order, starting east.
const HEADINGS: [(i64, i64); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Clone, Copy, Debug)]
struct Walk {
    radius: i64,
    start: (i64, i64),
    current: (i64, i64),
}

/// Ring scan, see the module documentation.
#[derive(Clone, Debug)]
pub struct RingScan<M> {
    center: (i64, i64),
    metric: M,
    radii: RadiusRange,
    walk: Option<Walk>,
    /// Heading index into [`HEADINGS`]; carried over from one ring to the next.
    heading: usize,
    done: bool,
}

/// Scan rings of radius `r1` through `r2` (inclusive) around `(x0, y0)`, where a cell
/// belongs to a ring when `metric(center, cell)` equals the radius.
///
/// Use [`crate::metric::chebyshev`] for square rings and [`crate::metric::manhattan`] for
/// diamonds. Both radii must be non-negative.
pub fn ringscan<M: DistanceMetric>(
    x0: i64,
    y0: i64,
    r1: i64,
    r2: i64,
    metric: M,
) -> Result<RingScan<M>> {
    Ok(RingScan {
        center: (x0, y0),
        metric,
        radii: RadiusRange::new(r1, r2)?,
        walk: None,
        heading: 0,
        done: false,
    })
}

impl<M: DistanceMetric> Iterator for RingScan<M> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let (x0, y0) = self.center;
        let center = Point::cell(x0, y0);

        let mut walk = match self.walk {
            Some(walk) => walk,
            None => {
                let Some(radius) = self.radii.next() else {
                    self.done = true;
                    return None;
                };
                if radius == 0 {
                    return Some(center);
                }
                let start = (x0, y0 + radius);
                Walk {
                    radius,
                    start,
                    current: start,
                }
            }
        };

        for _ in 0..HEADINGS.len() {
            let (dx, dy) = HEADINGS[self.heading];
            let next = (walk.current.0 + dx, walk.current.1 + dy);
            let distance = self.metric.distance(center, Point::cell(next.0, next.1));
            if distance != walk.radius as f64 {
                self.heading = (self.heading + 1) % HEADINGS.len();
                continue;
            }

            let emitted = walk.current;
            walk.current = next;
            self.walk = (next != walk.start).then_some(walk);
            return Some(Point::cell(emitted.0, emitted.1));
        }

        warn!(
            "Ring of radius {} around ({}, {}) cannot be walked under this metric; ending scan.",
            walk.radius, x0, y0
        );
        self.walk = None;
        self.done = true;
        None
    }
}

impl<M: DistanceMetric> FusedIterator for RingScan<M> {}
