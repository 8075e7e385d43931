/// Power of ten at or just below `n`, e.g. `104634 -> 100000`, `37 -> 10`, `0.37 -> 0.1`.
///
/// A small epsilon keeps exact powers of ten (`1000`) from flooring one decade low.
pub(crate) fn order_of_magnitude(n: f64) -> f64 {
    let order = (n.log10() + 1e-9).floor();
    10f64.powi(order as i32)
}

/// Cheap overshoot scalar for a minimal clearing scalar `t`.
///
/// Five times the order of magnitude of `t`, escalated by one decade when that does not exceed
/// `t` (mantissas of 5 and above), so the result is always strictly greater than `t`.
pub(crate) fn overshoot_multiplier(t: f64) -> f64 {
    let m = order_of_magnitude(t) * 5.0;
    if m <= t { m * 10.0 } else { m }
}

/// Slider label value: `scrub * step`, rounded to one decimal.
pub(crate) fn round_to_tenth(v: f64) -> f64 {
    (10.0 * v + 0.00001).round() / 10.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
