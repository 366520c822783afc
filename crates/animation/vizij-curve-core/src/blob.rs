//! Contiguous, relocatable storage for a built curve.
//!
//! Layout of the single `f32` buffer for N keyframes:
//!
//! ```text
//! [ t0 .. tN-1 | (t, v, in, out)0 .. (t, v, in, out)N-1 ]
//!   times        keyframe records, KEY_STRIDE floats each
//! ```
//!
//! Sections are addressed by offset, never by pointer, so the blob can be
//! cloned, moved, or serialized as one unit.

use serde::{Deserialize, Serialize};

use crate::data::Keyframe;

/// Floats per stored keyframe record.
pub const KEY_STRIDE: usize = 4;
/// Floats per keyframe across both sections.
const FLOATS_PER_KEY: usize = 1 + KEY_STRIDE;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct CurveBlob {
    len: usize,
    data: Box<[f32]>,
}

impl CurveBlob {
    /// Pack keyframes that are already in evaluation order.
    pub fn from_sorted(keys: &[Keyframe]) -> Self {
        let len = keys.len();
        let mut data = Vec::with_capacity(len * FLOATS_PER_KEY);
        data.extend(keys.iter().map(|k| k.time));
        for k in keys {
            data.extend_from_slice(&[k.time, k.value, k.in_tangent, k.out_tangent]);
        }
        Self {
            len,
            data: data.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Time-only section, scanned during interval search.
    #[inline]
    pub fn times(&self) -> &[f32] {
        &self.data[..self.len]
    }

    /// Full record section, read once the interval is known.
    #[inline]
    pub fn key_data(&self) -> &[f32] {
        &self.data[self.len..]
    }

    /// Panics if `i >= len()`.
    #[inline]
    pub fn keyframe(&self, i: usize) -> Keyframe {
        let base = self.len + i * KEY_STRIDE;
        let k = &self.data[base..base + KEY_STRIDE];
        Keyframe::new(k[0], k[1], k[2], k[3])
    }

    pub fn keyframes(&self) -> impl ExactSizeIterator<Item = Keyframe> + '_ {
        self.key_data()
            .chunks_exact(KEY_STRIDE)
            .map(|k| Keyframe::new(k[0], k[1], k[2], k[3]))
    }

    /// Size of the backing buffer in bytes.
    pub fn byte_len(&self) -> usize {
        std::mem::size_of_val(&*self.data)
    }
}

impl TryFrom<Vec<f32>> for CurveBlob {
    type Error = String;

    fn try_from(data: Vec<f32>) -> Result<Self, Self::Error> {
        if data.len() % FLOATS_PER_KEY != 0 {
            return Err(format!(
                "curve blob length {} is not a multiple of {FLOATS_PER_KEY}",
                data.len()
            ));
        }
        let len = data.len() / FLOATS_PER_KEY;
        let blob = Self {
            len,
            data: data.into_boxed_slice(),
        };
        let mismatched = blob
            .times()
            .iter()
            .zip(blob.keyframes())
            .any(|(t, k)| t.to_bits() != k.time.to_bits());
        if mismatched {
            return Err("curve blob time section disagrees with keyframe records".into());
        }
        Ok(blob)
    }
}

impl From<CurveBlob> for Vec<f32> {
    fn from(blob: CurveBlob) -> Self {
        blob.data.into_vec()
    }
}
