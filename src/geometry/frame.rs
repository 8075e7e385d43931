use std::cmp::Ordering;

use crate::foundation::core::{Point, Viewport};
use crate::foundation::math::overshoot_multiplier;

/// Two points on the line through `a` and `b` that lie outside `frame` on both sides.
///
/// Drawing a plain segment between the returned points looks like an infinite line inside the
/// visible frame. The exact boundary intersection is never computed: the line is walked from an
/// anchor by `t * (b - a)` with `t` chosen from the frame extent and then generously rounded (see
/// [`overshoot_multiplier`]), which stays stable for near-parallel lines.
///
/// The anchor is the lexicographically smaller input, so swapping the arguments yields the same
/// two points in swapped order. The first returned point always lies beyond `b` as seen from `a`.
///
/// Identical inputs, and inputs so close that the overshoot leaves the `f64` range, are returned
/// unchanged.
pub fn frame_intersection(a: Point, b: Point, frame: Viewport) -> [Point; 2] {
    let swapped = lex_cmp(a, b) == Ordering::Greater;
    let (anchor, other) = if swapped { (b, a) } else { (a, b) };
    let d = other - anchor;

    let tx = (d.x != 0.0).then(|| ((frame.width + anchor.x.abs()) / d.x).abs());
    let ty = (d.y != 0.0).then(|| ((frame.height + anchor.y.abs()) / d.y).abs());
    let t = match (tx, ty) {
        (Some(tx), Some(ty)) => tx.max(ty),
        (Some(t), None) | (None, Some(t)) => t,
        (None, None) => return [a, b],
    };
    if !(t.is_finite() && t > 0.0) {
        return [a, b];
    }

    let t = overshoot_multiplier(t);
    let far = anchor + d * t;
    let near = anchor - d * t;
    if !(far.is_finite() && near.is_finite()) {
        return [a, b];
    }
    if swapped { [near, far] } else { [far, near] }
}

fn lex_cmp(a: Point, b: Point) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/frame.rs"]
mod tests;
