//! Cubic Hermite segment math.
//! - hermite_basis (h00, h10, h01, h11)
//! - hermite_segment (value between two keyframes)
//! - hermite_segment_derivative (d/dtime of the same segment)
//!
//! Tangents are stored unscaled (value per time unit) and multiplied by the
//! segment width here, at evaluation time.

use crate::data::Keyframe;

/// Normalized position of `x` between `a` and `b`.
/// Produces NaN or infinity when `a == b`.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, x: f32) -> f32 {
    (x - a) / (b - a)
}

/// Hermite basis weights `[h00, h10, h01, h11]` at `t`.
#[inline]
pub fn hermite_basis(t: f32) -> [f32; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        2.0 * t3 - 3.0 * t2 + 1.0,
        t3 - 2.0 * t2 + t,
        -2.0 * t3 + 3.0 * t2,
        t3 - t2,
    ]
}

#[inline]
fn hermite_basis_dt(t: f32) -> [f32; 4] {
    let t2 = t * t;
    [
        6.0 * t2 - 6.0 * t,
        3.0 * t2 - 4.0 * t + 1.0,
        -6.0 * t2 + 6.0 * t,
        3.0 * t2 - 2.0 * t,
    ]
}

/// Value of the segment `left -> right` at absolute `time`.
#[inline]
pub fn hermite_segment(left: &Keyframe, right: &Keyframe, time: f32) -> f32 {
    let scale = right.time - left.time;
    let t = inverse_lerp(left.time, right.time, time);
    let [h00, h10, h01, h11] = hermite_basis(t);
    h00 * left.value
        + h01 * right.value
        + h10 * (left.out_tangent * scale)
        + h11 * (right.in_tangent * scale)
}

/// First derivative with respect to absolute time of the segment `left -> right`.
#[inline]
pub fn hermite_segment_derivative(left: &Keyframe, right: &Keyframe, time: f32) -> f32 {
    let scale = right.time - left.time;
    let t = inverse_lerp(left.time, right.time, time);
    let [d00, d10, d01, d11] = hermite_basis_dt(t);
    let d_dt = d00 * left.value
        + d01 * right.value
        + d10 * (left.out_tangent * scale)
        + d11 * (right.in_tangent * scale);
    d_dt / scale
}
