//! Rectangular grid scan.
use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::scan::AxisSpan;

/// Row-major scan of a rectangle, x varying fastest.
#[derive(Clone, Debug)]
pub struct GridScan {
    xs: AxisSpan,
    ys: AxisSpan,
    cursor: Option<(i64, i64)>,
}

impl GridScan {
    /// Total number of points the scan emits from the start.
    pub fn total(&self) -> u64 {
        self.xs.len().saturating_mul(self.ys.len())
    }
}

/// Scan the rectangle from `(xi, yi)` to `(xf, yf)`, moving along x first and then y.
///
/// Each axis runs towards its final coordinate, so `xf < xi` scans right-to-left.
/// `stepx` and `stepy` are the distances between scanned cells and must be positive.
pub fn gridscan(xi: i64, yi: i64, xf: i64, yf: i64, stepx: i64, stepy: i64) -> Result<GridScan> {
    if stepx <= 0 {
        return Err(Error::invalid(format!("x step must be > 0, got {stepx}")));
    }
    if stepy <= 0 {
        return Err(Error::invalid(format!("y step must be > 0, got {stepy}")));
    }
    Ok(GridScan {
        xs: AxisSpan::new(xi, xf, stepx),
        ys: AxisSpan::new(yi, yf, stepy),
        cursor: Some((xi, yi)),
    })
}

impl Iterator for GridScan {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let (x, y) = self.cursor?;
        self.cursor = match self.xs.after(x) {
            Some(nx) => Some((nx, y)),
            None => self.ys.after(y).map(|ny| (self.xs.start, ny)),
        };
        Some(Point::cell(x, y))
    }
}

impl FusedIterator for GridScan {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(scan: GridScan) -> Vec<(i64, i64)> {
        scan.map(Point::rounded).collect()
    }

    #[test]
    fn scans_x_then_y() {
        let out = cells(gridscan(0, 0, 2, 2, 1, 1).unwrap());
        assert_eq!(
            out,
            vec![
                (0, 0),
                (1, 0),
                (2, 0),
                (0, 1),
                (1, 1),
                (2, 1),
                (0, 2),
                (1, 2),
                (2, 2)
            ]
        );
    }

    #[test]
    fn steps_skip_cells() {
        let out = cells(gridscan(0, 0, 2, 2, 2, 2).unwrap());
        assert_eq!(out, vec![(0, 0), (2, 0), (0, 2), (2, 2)]);
    }

    #[test]
    fn decreasing_bounds_scan_backwards() {
        let out = cells(gridscan(1, 1, 0, 0, 1, 1).unwrap());
        assert_eq!(out, vec![(1, 1), (0, 1), (1, 0), (0, 0)]);
    }

    #[test]
    fn count_and_bounds_hold_for_uneven_steps() {
        for &(xi, yi, xf, yf, sx, sy) in &[
            (0, 0, 3, 4, 2, 3),
            (5, -2, -4, 7, 3, 2),
            (0, 0, 0, 0, 5, 5),
            (-3, 3, 3, -3, 4, 1),
        ] {
            let scan = gridscan(xi, yi, xf, yf, sx, sy).unwrap();
            let expected = ((xi - xf).abs() + 1 + sx - 1) / sx * (((yi - yf).abs() + 1 + sy - 1) / sy);
            assert_eq!(scan.total(), expected as u64);

            let points = cells(scan);
            assert_eq!(points.len() as i64, expected);
            for (x, y) in points {
                assert!(x >= xi.min(xf) && x <= xi.max(xf));
                assert!(y >= yi.min(yf) && y <= yi.max(yf));
            }
        }
    }

    #[test]
    fn stays_exhausted() {
        let mut scan = gridscan(0, 0, 0, 0, 1, 1).unwrap();
        assert_eq!(scan.next(), Some(Point::cell(0, 0)));
        assert_eq!(scan.next(), None);
        assert_eq!(scan.next(), None);
    }

    #[test]
    fn rejects_non_positive_steps() {
        assert!(matches!(
            gridscan(0, 0, 2, 2, 0, 1),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            gridscan(0, 0, 2, 2, 1, -1),
            Err(Error::InvalidParameter(_))
        ));
    }
}
