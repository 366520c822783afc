//! Interval search over a curve's time section.
//!
//! Model:
//! - N keyframes define N-1 half-open intervals `[t_i, t_i+1)`.
//! - The search starts at a caller-supplied hint and walks forward, wrapping
//!   modulo N-1, until it finds the interval holding the query or has tried
//!   all of them.
//! - Playback queries are near-monotonic, so the hint is usually the answer or
//!   one step before it. Worst case is O(N) probes.
//!
//! The final keyframe's own time is never inside any interval. Sampling there
//! yields NaN like any other out-of-domain query.

use crate::blob::CurveBlob;
use crate::data::Keyframe;
use crate::interp::functions::{hermite_segment, hermite_segment_derivative};

/// Find `i` such that `times[i] <= time < times[i + 1]`, starting the scan at `hint`.
///
/// Returns `None` with fewer than two times, for NaN queries, and for queries
/// outside `[times[0], times[N-1])`. Out-of-range hints restart the scan at 0.
pub fn find_interval(times: &[f32], hint: usize, time: f32) -> Option<usize> {
    let n = times.len();
    if n < 2 {
        return None;
    }
    let segments = n - 1;
    let start = if hint < segments { hint } else { 0 };
    for step in 0..segments {
        let mut i = start + step;
        if i >= segments {
            i -= segments;
        }
        if time >= times[i] && time < times[i + 1] {
            return Some(i);
        }
    }
    None
}

/// Keyframes bounding the interval that holds `time`, with the interval index.
#[inline]
pub fn locate_segment(
    blob: &CurveBlob,
    hint: usize,
    time: f32,
) -> Option<(usize, Keyframe, Keyframe)> {
    let i = find_interval(blob.times(), hint, time)?;
    Some((i, blob.keyframe(i), blob.keyframe(i + 1)))
}

/// Sample `blob` at `time`. Returns the interval index used (if any) and the value.
#[inline]
pub fn sample_blob(blob: &CurveBlob, hint: usize, time: f32) -> (Option<usize>, f32) {
    match locate_segment(blob, hint, time) {
        Some((i, left, right)) => (Some(i), hermite_segment(&left, &right, time)),
        None => (None, f32::NAN),
    }
}

/// Like [`sample_blob`], also returning the analytic first derivative.
#[inline]
pub fn sample_blob_with_derivative(
    blob: &CurveBlob,
    hint: usize,
    time: f32,
) -> (Option<usize>, f32, f32) {
    match locate_segment(blob, hint, time) {
        Some((i, left, right)) => (
            Some(i),
            hermite_segment(&left, &right, time),
            hermite_segment_derivative(&left, &right, time),
        ),
        None => (None, f32::NAN, f32::NAN),
    }
}
