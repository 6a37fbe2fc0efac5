//! The point-stream contract shared by every scan and transformation.
//!
//! A [`PointStream`] is a fused iterator of [`Point`]s: `Some(point)` yields the next
//! coordinate and `None` signals exhaustion, after which every further call also
//! returns `None`. Streams are pulled lazily, may be infinite ([`crate::scan::walkscan`])
//! and cannot be rewound. Transformations take ownership of the stream they wrap, so a
//! chain is a strictly linear sequence of owned values: dropping the head drops the
//! whole chain.
//!
//! [`ScanExt`] adds method-chaining constructors for every transformation:
//!
//! ```ignore
//! let points: Vec<_> = snakescan(0, 0, 2, 2).rotate(90.0).snap().collect();
//! ```
use std::iter::FusedIterator;

use rand::RngCore;

use crate::error::Result;
use crate::point::Point;
use crate::transform::{
    Clip, ClipConfig, Reflection, Reservoir, Rotation, Sample, Scale, Skip, Snap, Swap,
    Translation,
};

/// A lazily evaluated, fused sequence of points.
pub trait PointStream: Iterator<Item = Point> + FusedIterator {}

impl<T> PointStream for T where T: Iterator<Item = Point> + FusedIterator + ?Sized {}

/// Method-chaining constructors for the transformations in [`crate::transform`].
pub trait ScanExt: PointStream + Sized {
    /// See [`crate::transform::clip`].
    fn clip(self, config: ClipConfig) -> Result<Clip<Self>> {
        crate::transform::clip(self, config)
    }

    /// See [`crate::transform::reflection`].
    fn reflect(self, rx: bool, ry: bool) -> Reflection<Self> {
        crate::transform::reflection(self, rx, ry)
    }

    /// See [`crate::transform::rotation`].
    fn rotate(self, degrees: f64) -> Rotation<Self> {
        crate::transform::rotation(self, degrees)
    }

    /// See [`crate::transform::scale`].
    fn scale(self, sx: f64, sy: f64) -> Result<Scale<Self>> {
        crate::transform::scale(self, sx, sy)
    }

    /// See [`crate::transform::translation`].
    fn translate(self, tx: f64, ty: f64) -> Translation<Self> {
        crate::transform::translation(self, tx, ty)
    }

    /// See [`crate::transform::swap`].
    fn swap_xy(self) -> Swap<Self> {
        crate::transform::swap(self)
    }

    /// See [`crate::transform::snap`].
    fn snap(self) -> Snap<Self> {
        crate::transform::snap(self)
    }

    /// See [`crate::transform::skip`]. Named to stay clear of [`Iterator::skip`].
    fn skip_range(self, start: usize, stop: usize, step: usize) -> Result<Skip<Self>> {
        crate::transform::skip(self, start, stop, step)
    }

    /// See [`crate::transform::sample`].
    fn sample<R: RngCore>(self, probability: f64, rng: R) -> Result<Sample<Self, R>> {
        crate::transform::sample(self, probability, rng)
    }

    /// See [`crate::transform::reservoir`]. Drains `self` before returning.
    fn reservoir(self, npoints: usize, rng: &mut impl RngCore) -> Result<Reservoir> {
        crate::transform::reservoir(self, npoints, rng)
    }

    /// Erase the concrete chain type, e.g. to build chains from runtime configuration.
    fn boxed<'a>(self) -> Box<dyn PointStream + 'a>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<S: PointStream> ScanExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{gridscan, snakescan};

    fn cells(stream: impl PointStream) -> Vec<(i64, i64)> {
        stream.map(Point::rounded).collect()
    }

    #[test]
    fn chained_methods_match_nested_constructors() {
        let chained = snakescan(0, 0, 2, 2).rotate(90.0).snap();
        let nested =
            crate::transform::snap(crate::transform::rotation(snakescan(0, 0, 2, 2), 90.0));
        assert_eq!(cells(chained), cells(nested));
    }

    #[test]
    fn boxed_chains_still_satisfy_the_contract() {
        let mut stream = gridscan(0, 0, 1, 1, 1, 1)
            .unwrap()
            .boxed()
            .translate(10.0, 0.0)
            .boxed();
        assert_eq!(stream.next(), Some(Point::cell(10, 0)));
        assert_eq!(stream.by_ref().count(), 3);
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn deep_chains_compose() {
        let config = ClipConfig::new().with_x_range(0.0, 4.0);
        let out = cells(
            gridscan(0, 0, 3, 1, 1, 1)
                .unwrap()
                .scale(2.0, 1.0)
                .unwrap()
                .translate(-1.0, 0.0)
                .clip(config)
                .unwrap()
                .swap_xy()
                .reflect(true, false)
                .skip_range(0, usize::MAX, 2)
                .unwrap(),
        );
        // x in {-1, 1, 3, 5} is clipped to {1, 3}; the survivors are swapped, then x negated.
        assert_eq!(out, vec![(0, 1), (-1, 1)]);
    }
}
