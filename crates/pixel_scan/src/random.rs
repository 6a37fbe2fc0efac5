//! Random draws derived from a caller-supplied [`RngCore`].
use rand::RngCore;

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    // 53 high bits fill the mantissa exactly.
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Generate a random integer in the range [0, upper].
#[inline]
pub(crate) fn rand_inclusive(rng: &mut dyn RngCore, upper: usize) -> usize {
    let span = upper as u128 + 1;
    ((rng.next_u64() as u128 * span) >> 64) as usize
}

/// Fisher-Yates shuffle.
pub(crate) fn shuffle<T>(items: &mut [T], rng: &mut dyn RngCore) {
    for i in (1..items.len()).rev() {
        let j = rand_inclusive(rng, i);
        items.swap(i, j);
    }
}
