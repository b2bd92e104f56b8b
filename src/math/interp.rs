//! Sorted-table search and linear interpolation.
//!
//! Both the tabulated density and the inverse CDF interpolate "from the right":
//! the segment is located with an upper-bound search and the value is written
//! relative to the right endpoint,
//!
//! ```text
//! y(x) = y2 - (y2 - y1) / (x2 - x1) * (x2 - x)
//! ```
//!
//! A query sitting exactly on a breakpoint returns that breakpoint's value bit
//! for bit; the slope product is not exact in floating point at the left end,
//! so that case is short-circuited.

/// Index of the first element strictly greater than `value`.
///
/// Returns `sorted.len()` when no such element exists.
pub fn upper_bound(sorted: &[f64], value: f64) -> usize {
    sorted.partition_point(|&v| v <= value)
}

/// Interpolate on the segment `(x1, y1)`-`(x2, y2)` anchored at the right end.
pub fn interpolate_from_right(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x == x1 {
        return y1;
    }
    y2 - (y2 - y1) / (x2 - x1) * (x2 - x)
}
