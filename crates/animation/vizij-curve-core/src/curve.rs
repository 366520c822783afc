//! Built curve: immutable keyframe blob plus per-lane interval cache.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::blob::CurveBlob;
use crate::data::Keyframe;
use crate::ids::LaneId;
use crate::sampling::{sample_blob, sample_blob_with_derivative};

/// An immutable Hermite curve, safe to evaluate from many threads at once.
///
/// Keyframe storage never changes after [`build`](crate::build). The only
/// mutable state is one cached interval index per lane. Slots are relaxed
/// atomics: a stale or contended hint costs extra probes, never a wrong value.
#[derive(Debug)]
pub struct Curve {
    blob: CurveBlob,
    lanes: Box<[AtomicU32]>,
}

impl Curve {
    pub(crate) fn from_blob(blob: CurveBlob, max_lanes: usize) -> Self {
        let lanes = (0..max_lanes).map(|_| AtomicU32::new(0)).collect();
        Self { blob, lanes }
    }

    /// Evaluate the curve at `time` using `lane`'s interval cache.
    ///
    /// Returns NaN when the curve has fewer than two keyframes or `time` lies
    /// outside `[first.time, last.time)`. Note the final keyframe's own time is
    /// outside that range.
    #[inline]
    pub fn evaluate(&self, lane: LaneId, time: f32) -> f32 {
        let slot = self.lanes.get(lane.index());
        let hint = slot.map_or(0, |s| s.load(Ordering::Relaxed) as usize);
        let (found, value) = sample_blob(&self.blob, hint, time);
        store_hint(slot, hint, found);
        value
    }

    /// Value and first derivative (per time unit) at `time`.
    /// Both are NaN wherever [`evaluate`](Self::evaluate) is NaN.
    #[inline]
    pub fn evaluate_with_derivative(&self, lane: LaneId, time: f32) -> (f32, f32) {
        let slot = self.lanes.get(lane.index());
        let hint = slot.map_or(0, |s| s.load(Ordering::Relaxed) as usize);
        let (found, value, derivative) = sample_blob_with_derivative(&self.blob, hint, time);
        store_hint(slot, hint, found);
        (value, derivative)
    }

    /// Number of keyframes.
    #[inline]
    pub fn length(&self) -> usize {
        self.blob.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blob.is_empty()
    }

    pub fn times(&self) -> &[f32] {
        self.blob.times()
    }

    pub fn keyframe(&self, index: usize) -> Option<Keyframe> {
        (index < self.blob.len()).then(|| self.blob.keyframe(index))
    }

    pub fn keyframes(&self) -> impl ExactSizeIterator<Item = Keyframe> + '_ {
        self.blob.keyframes()
    }

    /// `(first, last)` keyframe times, or `None` for an empty curve.
    pub fn domain(&self) -> Option<(f32, f32)> {
        let times = self.blob.times();
        Some((*times.first()?, *times.last()?))
    }

    /// Number of lanes with a dedicated cache slot.
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Interval index currently cached for `lane`, if the lane has a slot.
    pub fn cached_interval(&self, lane: LaneId) -> Option<usize> {
        self.lanes
            .get(lane.index())
            .map(|s| s.load(Ordering::Relaxed) as usize)
    }

    pub fn blob(&self) -> &CurveBlob {
        &self.blob
    }

    /// Release the curve's storage. Consumes the curve, so it cannot be
    /// released twice or evaluated afterwards.
    pub fn release(self) {
        log::debug!(
            "releasing curve: {} keyframes, {} lanes",
            self.blob.len(),
            self.lanes.len()
        );
        drop(self);
    }
}

#[inline]
fn store_hint(slot: Option<&AtomicU32>, hint: usize, found: Option<usize>) {
    if let (Some(slot), Some(i)) = (slot, found) {
        if i != hint {
            slot.store(i as u32, Ordering::Relaxed);
        }
    }
}
