//! Hilbert curve scan over a square power-of-two grid.
use std::iter::FusedIterator;

use tracing::debug;

use crate::bits;
use crate::error::{Error, Result};
use crate::point::Point;

/// Hilbert curve scan starting at the origin.
#[derive(Clone, Debug)]
pub struct HilbertScan {
    order: u64,
    index: u64,
    distance: u64,
}

impl HilbertScan {
    /// Side length of the grid the curve fills.
    pub fn order(&self) -> u64 {
        self.order
    }
}

/// Scan the first `distance` cells of the Hilbert curve filling a square grid whose side
/// is `size` rounded up to the next power of two.
///
/// `distance` may not exceed the number of cells in that grid.
pub fn hilbertscan(size: u64, distance: u64) -> Result<HilbertScan> {
    let order = bits::next_power_of_two(size).ok_or(Error::SizeOverflow { size })?;
    let max = order
        .checked_mul(order)
        .ok_or(Error::SizeOverflow { size })?;
    if distance > max {
        return Err(Error::DistanceOutOfRange { distance, max });
    }
    if order != size {
        debug!("Hilbert size {} rounded up to {}.", size, order);
    }
    Ok(HilbertScan {
        order,
        index: 0,
        distance,
    })
}

impl Iterator for HilbertScan {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index >= self.distance {
            return None;
        }
        let (x, y) = bits::decode(self.order, self.index);
        self.index += 1;
        Some(Point::new(x as f64, y as f64))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.distance - self.index).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

impl FusedIterator for HilbertScan {}
