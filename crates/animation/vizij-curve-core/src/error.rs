//! Error types for curve construction and loading.

use crate::data::WeightedMode;
use thiserror::Error;

/// Errors produced while building a [`Curve`](crate::Curve).
///
/// Evaluation never fails: out-of-domain queries and degenerate curves
/// return NaN instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A keyframe requested weighted tangents, which the Hermite evaluator does not model.
    #[error("unsupported feature: keyframe {index} uses weighted tangent mode {mode:?}")]
    UnsupportedFeature { index: usize, mode: WeightedMode },

    /// Authoring JSON could not be parsed into keyframe records.
    #[error("curve json parse error: {0}")]
    Parse(String),
}
