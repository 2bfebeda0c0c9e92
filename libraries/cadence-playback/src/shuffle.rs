//! Shuffle selection
//!
//! Shuffle does not reorder the view. Each advance draws a fresh position
//! uniformly, redrawing while it lands on the current one.

use rand::Rng;

/// Pick a random position in `0..len` that differs from `current`
///
/// With a single track the only position is returned. `len` must be non-zero.
pub fn pick_other<R: Rng + ?Sized>(len: usize, current: usize, rng: &mut R) -> usize {
    debug_assert!(len > 0, "cannot shuffle an empty view");

    if len <= 1 {
        return 0;
    }

    loop {
        let candidate = rng.gen_range(0..len);
        if candidate != current {
            return candidate;
        }
    }
}
