//! Cumulative trapezoidal integration on an equidistant grid.

/// Running trapezoidal integral of `f` over `n` equally spaced points of `[lo, hi]`.
///
/// `out[0] == 0` and `out[k]` is the integral over `[lo, lo + k*h]`, with
/// `h = (hi - lo) / (n - 1)`. Grid points are recomputed from `lo` at every
/// step rather than accumulated, so the last point is `hi` up to one rounding.
///
/// # Panics
/// Panics if `n < 2`. Callers validate the table size.
pub fn cumulative_trapezoid<F>(f: F, lo: f64, hi: f64, n: usize) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    assert!(n >= 2, "cumulative_trapezoid needs at least two points");
    let h = (hi - lo) / (n as f64 - 1.0);

    let mut out = Vec::with_capacity(n);
    out.push(0.0);
    let mut sum = 0.0;
    let mut f_left = f(lo);
    for k in 1..n {
        let f_right = f(lo + k as f64 * h);
        sum += (f_left + f_right) / 2.0 * h;
        out.push(sum);
        f_left = f_right;
    }
    out
}
