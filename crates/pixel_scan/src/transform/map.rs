//! Pointwise transformations: every upstream point maps to exactly one output point.
use std::iter::FusedIterator;

use glam::DVec2;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::stream::PointStream;

/// Implements the stream contract for a wrapper with an `apply(&self, Point) -> Point`.
macro_rules! pointwise {
    ($name:ident) => {
        impl<S: PointStream> Iterator for $name<S> {
            type Item = Point;

            #[inline]
            fn next(&mut self) -> Option<Point> {
                let p = self.upstream.next()?;
                Some(self.apply(p))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.upstream.size_hint()
            }
        }

        impl<S: PointStream> FusedIterator for $name<S> {}
    };
}

/// Mirrors points across the y axis (`rx`) and/or the x axis (`ry`).
#[derive(Clone, Debug)]
pub struct Reflection<S> {
    upstream: S,
    rx: bool,
    ry: bool,
}

/// Negate x when `rx` is set and y when `ry` is set.
pub fn reflection<S: PointStream>(stream: S, rx: bool, ry: bool) -> Reflection<S> {
    Reflection {
        upstream: stream,
        rx,
        ry,
    }
}

impl<S> Reflection<S> {
    fn apply(&self, p: Point) -> Point {
        Point::new(
            if self.rx { -p.x } else { p.x },
            if self.ry { -p.y } else { p.y },
        )
    }
}

pointwise!(Reflection);

/// Rotates points counter-clockwise about the origin.
#[derive(Clone, Debug)]
pub struct Rotation<S> {
    upstream: S,
    /// `(cos, sin)` of the rotation angle.
    unit: DVec2,
}

/// Rotate every point counter-clockwise about the origin by `degrees`.
///
/// Unless the angle is a multiple of 90 degrees the output leaves the grid, and after
/// [`snap`] distinct inputs may land on the same cell.
pub fn rotation<S: PointStream>(stream: S, degrees: f64) -> Rotation<S> {
    Rotation {
        upstream: stream,
        unit: DVec2::from_angle(degrees.to_radians()),
    }
}

impl<S> Rotation<S> {
    fn apply(&self, p: Point) -> Point {
        self.unit.rotate(DVec2::from(p)).into()
    }
}

pointwise!(Rotation);

/// Multiplies each axis by a positive factor.
#[derive(Clone, Debug)]
pub struct Scale<S> {
    upstream: S,
    factor: DVec2,
}

/// Scale x by `sx` and y by `sy`. Both factors must be finite and positive.
pub fn scale<S: PointStream>(stream: S, sx: f64, sy: f64) -> Result<Scale<S>> {
    if !(sx.is_finite() && sx > 0.0) {
        return Err(Error::invalid(format!("x scale must be > 0, got {sx}")));
    }
    if !(sy.is_finite() && sy > 0.0) {
        return Err(Error::invalid(format!("y scale must be > 0, got {sy}")));
    }
    Ok(Scale {
        upstream: stream,
        factor: DVec2::new(sx, sy),
    })
}

impl<S> Scale<S> {
    fn apply(&self, p: Point) -> Point {
        (DVec2::from(p) * self.factor).into()
    }
}

pointwise!(Scale);

/// Offsets every point.
#[derive(Clone, Debug)]
pub struct Translation<S> {
    upstream: S,
    offset: DVec2,
}

/// Add `(tx, ty)` to every point.
pub fn translation<S: PointStream>(stream: S, tx: f64, ty: f64) -> Translation<S> {
    Translation {
        upstream: stream,
        offset: DVec2::new(tx, ty),
    }
}

impl<S> Translation<S> {
    fn apply(&self, p: Point) -> Point {
        (DVec2::from(p) + self.offset).into()
    }
}

pointwise!(Translation);

/// Exchanges the x and y coordinates.
#[derive(Clone, Debug)]
pub struct Swap<S> {
    upstream: S,
}

/// Swap x and y of every point.
pub fn swap<S: PointStream>(stream: S) -> Swap<S> {
    Swap { upstream: stream }
}

impl<S> Swap<S> {
    fn apply(&self, p: Point) -> Point {
        Point::new(p.y, p.x)
    }
}

pointwise!(Swap);

/// Rounds points to the nearest grid cell.
#[derive(Clone, Debug)]
pub struct Snap<S> {
    upstream: S,
}

/// Round both coordinates to the nearest integer, halves away from zero.
pub fn snap<S: PointStream>(stream: S) -> Snap<S> {
    Snap { upstream: stream }
}

impl<S> Snap<S> {
    fn apply(&self, p: Point) -> Point {
        let (x, y) = p.rounded();
        Point::cell(x, y)
    }
}

pointwise!(Snap);
