//! Merging two cubic segments when the on-curve point between them is removed

use kurbo::{CubicBez, ParamCurveArclen, Point};

const ARCLEN_ACCURACY: f64 = 1e-3;

/// Outer handles for the single cubic that replaces `p0 a1 a2 p1` + `p1 b1 b2 p2`.
///
/// The handle directions stay put; each handle is stretched by the ratio of the
/// combined arc length to the length of the segment it came from.
pub fn merged_handles(
    p0: Point,
    a1: Point,
    a2: Point,
    p1: Point,
    b1: Point,
    b2: Point,
    p2: Point,
) -> (Point, Point) {
    let first = CubicBez::new(p0, a1, a2, p1);
    let second = CubicBez::new(p1, b1, b2, p2);
    let l1 = first.arclen(ARCLEN_ACCURACY);
    let l2 = second.arclen(ARCLEN_ACCURACY);

    if l1 <= f64::EPSILON || l2 <= f64::EPSILON {
        return (a1, b2);
    }

    let total = l1 + l2;
    let h1 = p0 + (a1 - p0) * (total / l1);
    let h2 = p2 + (b2 - p2) * (total / l2);
    (h1, h2)
}
