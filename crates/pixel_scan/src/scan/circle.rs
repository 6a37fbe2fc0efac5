//! Midpoint-circle scan around a center point.
//!
//! For each radius one octant arc is traced with the midpoint algorithm and rotated by
//! multiples of 45 degrees into the other seven octants. Rotating by 45 degrees leaves
//! the grid, so the emitted coordinates are not integral; pass the stream through
//! [`crate::transform::snap`] to get grid cells. Cells already produced for the previous
//! radius are suppressed so neighbouring rings do not repeat each other.
use std::collections::HashSet;
use std::f64::consts::FRAC_1_SQRT_2;
use std::iter::FusedIterator;

use crate::error::Result;
use crate::point::Point;
use crate::scan::RadiusRange;

const A: f64 = FRAC_1_SQRT_2;

/// Clockwise rotations by multiples of 45 degrees, as row-major 2x2 matrices.
const OCTANTS: [[f64; 4]; 8] = [
    [1.0, 0.0, 0.0, 1.0],
    [A, A, -A, A],
    [0.0, 1.0, -1.0, 0.0],
    [-A, A, -A, -A],
    [-1.0, 0.0, 0.0, -1.0],
    [-A, -A, A, -A],
    [0.0, -1.0, 1.0, 0.0],
    [A, -A, A, A],
];

/// Midpoint state for one octant arc.
#[derive(Clone, Debug)]
struct Arc {
    radius: i64,
    octant: usize,
    x: i64,
    y: i64,
    d: i64,
}

impl Arc {
    fn new(radius: i64) -> Self {
        Self {
            radius,
            octant: 0,
            x: 0,
            y: radius,
            d: 1 - radius,
        }
    }

    fn restart(&mut self, octant: usize) {
        *self = Self {
            octant,
            ..Self::new(self.radius)
        };
    }

    fn advance(&mut self) {
        if self.d < 0 {
            self.d += 3 + 2 * self.x;
        } else {
            self.d += 5 - 2 * (self.y - self.x);
            self.y -= 1;
        }
        self.x += 1;
    }
}

/// Concentric circle scan, see the module documentation.
#[derive(Clone, Debug)]
pub struct CircleScan {
    center: Point,
    radii: RadiusRange,
    arc: Option<Arc>,
    previous: HashSet<(i64, i64)>,
    current: HashSet<(i64, i64)>,
}

/// Scan circles of radius `r1` through `r2` (inclusive) around `(x0, y0)`.
///
/// Radii step outward when `r2 >= r1` and inward otherwise; radius zero is the center
/// itself. Both radii must be non-negative.
pub fn circlescan(x0: i64, y0: i64, r1: i64, r2: i64) -> Result<CircleScan> {
    Ok(CircleScan {
        center: Point::cell(x0, y0),
        radii: RadiusRange::new(r1, r2)?,
        arc: None,
        previous: HashSet::new(),
        current: HashSet::new(),
    })
}

impl Iterator for CircleScan {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            let Some(arc) = self.arc.as_mut() else {
                let radius = self.radii.next()?;
                if radius == 0 {
                    return Some(self.center);
                }
                self.arc = Some(Arc::new(radius));
                continue;
            };

            if arc.x >= arc.y {
                if arc.octant + 1 == OCTANTS.len() {
                    self.previous = std::mem::take(&mut self.current);
                    self.arc = None;
                } else {
                    arc.restart(arc.octant + 1);
                }
                continue;
            }

            let [m00, m01, m10, m11] = OCTANTS[arc.octant];
            let (x, y) = (arc.x as f64, arc.y as f64);
            let point = Point::new(
                self.center.x + m00 * x + m01 * y,
                self.center.y + m10 * x + m11 * y,
            );
            arc.advance();

            let cell = point.rounded();
            if !self.previous.contains(&cell) {
                self.current.insert(cell);
                return Some(point);
            }
        }
    }
}

impl FusedIterator for CircleScan {}
