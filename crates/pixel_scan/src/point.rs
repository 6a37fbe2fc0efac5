//! Two-dimensional coordinate emitted by every scan and transformation.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on (or near) the integer grid.
///
/// Most scans emit integral coordinates; rotation and scaling may move points off the
/// grid until they are passed through [`crate::transform::snap`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on the integer grid.
    pub fn cell(x: i64, y: i64) -> Self {
        Self::new(x as f64, y as f64)
    }

    /// Nearest grid cell, rounding halves away from zero.
    pub fn rounded(self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::cell(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<mint::Point2<f64>> for Point {
    fn from(p: mint::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for mint::Point2<f64> {
    fn from(p: Point) -> Self {
        mint::Point2 { x: p.x, y: p.y }
    }
}

impl From<mint::Vector2<f64>> for Point {
    fn from(v: mint::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for mint::Vector2<f64> {
    fn from(p: Point) -> Self {
        mint::Vector2 { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_rounds_halves_away_from_zero() {
        assert_eq!(Point::new(0.5, -0.5).rounded(), (1, -1));
        assert_eq!(Point::new(1.49, -2.51).rounded(), (1, -3));
        assert_eq!(Point::new(6.1e-17, -1.0).rounded(), (0, -1));
    }

    #[test]
    fn converts_to_and_from_vector_types() {
        let p = Point::cell(3, -4);
        let v: DVec2 = p.into();
        assert_eq!(v, DVec2::new(3.0, -4.0));
        assert_eq!(Point::from(v), p);

        let m: mint::Point2<f64> = p.into();
        assert_eq!(Point::from(m), p);

        let t: (f64, f64) = p.into();
        assert_eq!(t, (3.0, -4.0));
        assert_eq!(Point::from((3_i64, -4_i64)), p);
    }
}
