//! Bit operations behind the Hilbert curve decoder.
//!
//! A Hilbert index is read two bits at a time, least significant pair first. Each pair
//! selects a quadrant `(rx, ry)` of the current sub-square; before the quadrant offset
//! is applied the coordinates decoded so far are rotated into that quadrant's frame.

/// Smallest power of two that is `>= n`, or `None` if it does not fit in a `u64`.
///
/// Zero rounds up to one.
pub fn next_power_of_two(n: u64) -> Option<u64> {
    n.max(1).checked_next_power_of_two()
}

/// Quadrant bits `(rx, ry)` selected by the low two bits of `t`.
///
/// Bit 1 of `t` is `rx`; `ry` is bit 0 xor `rx`, so the quadrants are visited in the
/// order `(0, 0), (0, 1), (1, 1), (1, 0)`.
#[inline]
pub fn quadrant(t: u64) -> (u64, u64) {
    let rx = (t >> 1) & 1;
    let ry = (t ^ rx) & 1;
    (rx, ry)
}

/// Rotate/flip the point `(x, y)` inside a square of side `side` for quadrant `(rx, ry)`.
///
/// When `ry` is clear the point is reflected through the square's center if `rx` is set,
/// and then transposed.
#[inline]
pub fn rotate(side: u64, x: u64, y: u64, rx: u64, ry: u64) -> (u64, u64) {
    if ry != 0 {
        return (x, y);
    }
    let (x, y) = if rx == 1 {
        (side - 1 - x, side - 1 - y)
    } else {
        (x, y)
    };
    (y, x)
}

/// Decode the Hilbert index `index` on an `order x order` grid (`order` a power of two).
pub fn decode(order: u64, index: u64) -> (u64, u64) {
    debug_assert!(order.is_power_of_two());
    let mut t = index;
    let (mut x, mut y) = (0, 0);
    let mut side = 1;
    while side < order {
        let (rx, ry) = quadrant(t);
        (x, y) = rotate(side, x, y, rx, ry);
        x += side * rx;
        y += side * ry;
        t >>= 2;
        side <<= 1;
    }
    (x, y)
}
