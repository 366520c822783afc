//! Baking API: sample a curve at a fixed frame rate over a time window.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::ids::LaneId;

/// Slack applied to the frame count so float error does not drop the last frame.
const FRAME_COUNT_EPS: f64 = 1e-4;
/// Upper bound on frames produced by one bake (about 64 MiB of samples).
pub const MAX_BAKED_FRAMES: usize = 1 << 24;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakingConfig {
    /// Target frame rate (Hz) for baked samples.
    pub frame_rate: f32,
    /// Start time in curve time; if None, uses the first keyframe time.
    pub start_time: Option<f32>,
    /// End time in curve time; if None, uses the last keyframe time.
    pub end_time: Option<f32>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            start_time: None,
            end_time: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedCurve {
    pub frame_rate: f32,
    pub start_time: f32,
    pub end_time: f32,
    /// One sample per frame; NaN wherever the curve is undefined.
    pub values: Vec<f32>,
}

impl BakedCurve {
    fn empty(frame_rate: f32, start_time: f32, end_time: f32) -> Self {
        Self {
            frame_rate,
            start_time,
            end_time,
            values: Vec::new(),
        }
    }

    /// Time of frame `index`.
    pub fn frame_time(&self, index: usize) -> f32 {
        frame_time(self.start_time, self.frame_rate, index)
    }
}

#[inline]
fn frame_time(start: f32, frame_rate: f32, index: usize) -> f32 {
    (f64::from(start) + index as f64 / f64::from(frame_rate)) as f32
}

/// Frames in `[start, end]` at `frame_rate`, or `None` past [`MAX_BAKED_FRAMES`].
fn frame_count(start: f32, end: f32, frame_rate: f32) -> Option<usize> {
    let span = (f64::from(end) - f64::from(start)) * f64::from(frame_rate);
    let whole = (span + FRAME_COUNT_EPS).floor();
    if !whole.is_finite() || whole >= MAX_BAKED_FRAMES as f64 {
        return None;
    }
    (whole as usize).checked_add(1)
}

/// Bake `curve` by evaluating it on `lane` at `start + k / frame_rate` for
/// every frame inside `[start, end]`.
///
/// A frame landing exactly on the last keyframe time samples to NaN, matching
/// [`Curve::evaluate`]. Windows needing more than [`MAX_BAKED_FRAMES`] frames
/// produce an empty bake.
pub fn bake_curve(curve: &Curve, lane: LaneId, cfg: &BakingConfig) -> BakedCurve {
    let (first, last) = curve.domain().unwrap_or((0.0, 0.0));
    let start = cfg.start_time.unwrap_or(first);
    let end = cfg.end_time.unwrap_or(last);
    let fr = cfg.frame_rate;

    let valid = fr.is_finite() && fr > 0.0 && start.is_finite() && end.is_finite() && end >= start;
    if !valid {
        log::warn!("bake skipped: frame_rate={fr}, window=[{start}, {end}]");
        return BakedCurve::empty(fr, start, end);
    }

    let Some(frames) = frame_count(start, end, fr) else {
        log::warn!(
            "bake skipped: window [{start}, {end}] at {fr} Hz exceeds {MAX_BAKED_FRAMES} frames"
        );
        return BakedCurve::empty(fr, start, end);
    };
    let mut values = Vec::with_capacity(frames);
    for k in 0..frames {
        values.push(curve.evaluate(lane, frame_time(start, fr, k)));
    }
    log::debug!("baked {frames} frames at {fr} Hz over [{start}, {end}]");

    BakedCurve {
        frame_rate: fr,
        start_time: start,
        end_time: end,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build, CurveConfig, KeyframeRecord};

    fn line() -> Curve {
        build(
            &[
                KeyframeRecord::new(0.0, 0.0, 1.0, 1.0),
                KeyframeRecord::new(1.0, 1.0, 1.0, 1.0),
            ],
            &CurveConfig::default(),
        )
        .expect("build")
    }

    #[test]
    fn default_window_spans_keyframes() {
        let baked = bake_curve(
            &line(),
            LaneId(0),
            &BakingConfig {
                frame_rate: 4.0,
                ..Default::default()
            },
        );
        assert_eq!(baked.values.len(), 5);
        for (i, v) in baked.values[..4].iter().enumerate() {
            assert!((v - i as f32 * 0.25).abs() < 1e-6, "frame {i}");
        }
        assert!(baked.values[4].is_nan(), "final key time is exclusive");
        assert_eq!(baked.frame_time(2), 0.5);
    }

    #[test]
    fn invalid_window_or_rate_is_empty() {
        let curve = line();
        let bad_rate = BakingConfig {
            frame_rate: 0.0,
            ..Default::default()
        };
        assert!(bake_curve(&curve, LaneId(0), &bad_rate).values.is_empty());
        let reversed = BakingConfig {
            start_time: Some(1.0),
            end_time: Some(0.5),
            ..Default::default()
        };
        assert!(bake_curve(&curve, LaneId(0), &reversed).values.is_empty());
    }

    #[test]
    fn oversized_window_is_empty() {
        let curve = line();
        let huge = BakingConfig {
            frame_rate: 60.0,
            start_time: Some(0.0),
            end_time: Some(f32::MAX),
        };
        let baked = bake_curve(&curve, LaneId(0), &huge);
        assert!(baked.values.is_empty());
        assert_eq!(baked.end_time, f32::MAX);

        let just_over = BakingConfig {
            frame_rate: 1.0,
            start_time: Some(0.0),
            end_time: Some(MAX_BAKED_FRAMES as f32),
        };
        assert!(bake_curve(&curve, LaneId(0), &just_over).values.is_empty());
    }

    #[test]
    fn frame_times_do_not_drift_on_long_bakes() {
        let start = 1000.0f32;
        let rate = 60.0f32;
        let far = 3_000_000;
        let expected = (1000.0f64 + far as f64 / 60.0) as f32;
        assert_eq!(frame_time(start, rate, far), expected);

        let times: Vec<f32> = (0..2000).map(|k| frame_time(start, rate, k)).collect();
        assert!(times.windows(2).all(|w| w[1] > w[0]), "frame times must increase");
    }
}
