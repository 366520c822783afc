//! Keyframe data model.
//!
//! [`KeyframeRecord`] is what authoring tools hand us; [`Keyframe`] is the
//! validated form stored inside a built curve.

use serde::{Deserialize, Serialize};

/// Tangent weighting requested by the authoring tool.
///
/// Only [`WeightedMode::None`] is accepted by the builder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightedMode {
    #[default]
    None,
    In,
    Out,
    Both,
}

impl WeightedMode {
    #[inline]
    pub fn is_weighted(self) -> bool {
        !matches!(self, WeightedMode::None)
    }
}

/// A single control point on a scalar Hermite curve.
///
/// Tangents are slopes in value units per time unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    pub in_tangent: f32,
    pub out_tangent: f32,
}

impl Keyframe {
    pub fn new(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

/// Keyframe as delivered by the authoring collaborator, before validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyframeRecord {
    pub time: f32,
    pub value: f32,
    pub in_tangent: f32,
    pub out_tangent: f32,
    #[serde(default)]
    pub weighted_mode: WeightedMode,
}

impl KeyframeRecord {
    /// Unweighted record.
    pub fn new(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
            weighted_mode: WeightedMode::None,
        }
    }

    pub fn with_weighted_mode(mut self, mode: WeightedMode) -> Self {
        self.weighted_mode = mode;
        self
    }

    #[inline]
    pub fn keyframe(&self) -> Keyframe {
        Keyframe::new(self.time, self.value, self.in_tangent, self.out_tangent)
    }
}

impl From<Keyframe> for KeyframeRecord {
    fn from(k: Keyframe) -> Self {
        KeyframeRecord::new(k.time, k.value, k.in_tangent, k.out_tangent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_none_is_unweighted() {
        assert!(!WeightedMode::None.is_weighted());
        assert!(WeightedMode::In.is_weighted());
        assert!(WeightedMode::Out.is_weighted());
        assert!(WeightedMode::Both.is_weighted());
    }

    #[test]
    fn record_serde_uses_camel_case_and_defaults_mode() {
        let rec: KeyframeRecord =
            serde_json::from_str(r#"{"time":1.0,"value":2.0,"inTangent":0.5,"outTangent":-0.5}"#)
                .expect("record json");
        assert_eq!(rec.weighted_mode, WeightedMode::None);
        assert_eq!(rec.keyframe(), Keyframe::new(1.0, 2.0, 0.5, -0.5));

        let weighted: KeyframeRecord = serde_json::from_str(
            r#"{"time":0,"value":0,"inTangent":0,"outTangent":0,"weightedMode":"both"}"#,
        )
        .expect("weighted json");
        assert_eq!(weighted.weighted_mode, WeightedMode::Both);
    }
}
