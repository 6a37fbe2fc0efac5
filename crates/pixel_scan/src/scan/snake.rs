//! Boustrophedon (snake) scan.
use std::iter::FusedIterator;

use crate::point::Point;
use crate::scan::AxisSpan;

/// Row-by-row scan that reverses the x direction on every row.
#[derive(Clone, Debug)]
pub struct SnakeScan {
    row: AxisSpan,
    ys: AxisSpan,
    cursor: Option<(i64, i64)>,
}

/// Scan the rectangle from `(xi, yi)` to `(xf, yf)` in unit steps, so that each row
/// starts where the previous one ended.
pub fn snakescan(xi: i64, yi: i64, xf: i64, yf: i64) -> SnakeScan {
    SnakeScan {
        row: AxisSpan::new(xi, xf, 1),
        ys: AxisSpan::new(yi, yf, 1),
        cursor: Some((xi, yi)),
    }
}

impl Iterator for SnakeScan {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let (x, y) = self.cursor?;
        self.cursor = match self.row.after(x) {
            Some(nx) => Some((nx, y)),
            None => {
                self.row = self.row.reversed();
                self.ys.after(y).map(|ny| (self.row.start, ny))
            }
        };
        Some(Point::cell(x, y))
    }
}

impl FusedIterator for SnakeScan {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::scan::gridscan;

    fn cells(scan: impl Iterator<Item = Point>) -> Vec<(i64, i64)> {
        scan.map(Point::rounded).collect()
    }

    #[test]
    fn reverses_every_row() {
        let out = cells(snakescan(0, 0, 2, 2));
        assert_eq!(
            out,
            vec![
                (0, 0),
                (1, 0),
                (2, 0),
                (2, 1),
                (1, 1),
                (0, 1),
                (0, 2),
                (1, 2),
                (2, 2)
            ]
        );
    }

    #[test]
    fn visits_the_grid_cells_with_unit_moves() {
        for &(xi, yi, xf, yf) in &[(0, 0, 4, 3), (3, 2, -1, -2), (0, 0, 0, 3), (2, 5, 6, 5)] {
            let snake = cells(snakescan(xi, yi, xf, yf));
            let grid = cells(gridscan(xi, yi, xf, yf, 1, 1).unwrap());

            let a: HashSet<_> = snake.iter().copied().collect();
            let b: HashSet<_> = grid.iter().copied().collect();
            assert_eq!(snake.len(), grid.len());
            assert_eq!(a, b);

            for pair in snake.windows(2) {
                let dx = (pair[0].0 - pair[1].0).abs();
                let dy = (pair[0].1 - pair[1].1).abs();
                assert_eq!(dx + dy, 1, "diagonal or repeated move {pair:?}");
            }
        }
    }

    #[test]
    fn stays_exhausted() {
        let mut scan = snakescan(0, 0, 1, 0);
        assert_eq!(scan.by_ref().count(), 2);
        assert_eq!(scan.next(), None);
    }
}
