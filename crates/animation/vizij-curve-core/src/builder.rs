//! Curve construction: validate authoring records, sort by time, pack a blob.

use crate::blob::CurveBlob;
use crate::config::CurveConfig;
use crate::curve::Curve;
use crate::data::{Keyframe, KeyframeRecord};
use crate::error::CurveError;
use crate::stored_curve::parse_curve_json;

/// Build an immutable curve from authoring records.
///
/// Records may arrive in any order; they are stably sorted by time, so
/// keyframes sharing a time keep their input order. Fails with
/// [`CurveError::UnsupportedFeature`] if any record requests weighted
/// tangents, in which case nothing is allocated.
///
/// Non-finite times are accepted but left to the caller: NaN times sort to the
/// ends of the time array (by sign bit) and never match a query, so the
/// time array is non-decreasing only when every time is a number.
pub fn build(records: &[KeyframeRecord], config: &CurveConfig) -> Result<Curve, CurveError> {
    if let Some((index, rec)) = records
        .iter()
        .enumerate()
        .find(|(_, r)| r.weighted_mode.is_weighted())
    {
        log::warn!(
            "rejecting curve: keyframe {index} at t={} uses weighted tangents ({:?})",
            rec.time,
            rec.weighted_mode
        );
        return Err(CurveError::UnsupportedFeature {
            index,
            mode: rec.weighted_mode,
        });
    }

    let mut keys: Vec<Keyframe> = records.iter().map(KeyframeRecord::keyframe).collect();
    let non_finite = keys.iter().filter(|k| !k.time.is_finite()).count();
    if non_finite > 0 {
        log::warn!("curve has {non_finite} keyframe(s) with non-finite time");
    }
    if keys.windows(2).any(|w| w[0].time > w[1].time) {
        log::trace!("sorting {} keyframes into time order", keys.len());
    }
    keys.sort_by(|a, b| a.time.total_cmp(&b.time));

    if keys.len() < 2 {
        log::debug!(
            "built degenerate curve with {} keyframe(s); evaluation yields NaN",
            keys.len()
        );
    } else {
        log::debug!(
            "built curve: {} keyframes over [{}, {}], {} lanes",
            keys.len(),
            keys[0].time,
            keys[keys.len() - 1].time,
            config.max_lanes
        );
    }

    Ok(Curve::from_blob(CurveBlob::from_sorted(&keys), config.max_lanes))
}

/// Parse authoring JSON (see [`parse_curve_json`]) and build a curve from it.
pub fn build_from_json(json: &str, config: &CurveConfig) -> Result<Curve, CurveError> {
    let records = parse_curve_json(json)?;
    build(&records, config)
}
