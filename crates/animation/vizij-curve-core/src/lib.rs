//! Vizij Curve Core (engine-agnostic)
//!
//! Scalar keyframe curves evaluated with cubic Hermite interpolation. A curve is
//! built once from authoring records, then sampled from many threads at once.
//! Every caller passes its own [`LaneId`]; each lane keeps a cached interval
//! index so near-monotonic playback resolves its segment in O(1).

pub mod baking;
pub mod blob;
pub mod builder;
pub mod config;
pub mod curve;
pub mod data;
pub mod error;
pub mod ids;
pub mod interp;
pub mod sampling;
pub mod stored_curve;

// Re-exports for consumers (adapters)
pub use baking::{bake_curve, BakedCurve, BakingConfig, MAX_BAKED_FRAMES};
pub use blob::CurveBlob;
pub use builder::{build, build_from_json};
pub use config::CurveConfig;
pub use curve::Curve;
pub use data::{Keyframe, KeyframeRecord, WeightedMode};
pub use error::CurveError;
pub use ids::{LaneAllocator, LaneId};
pub use stored_curve::parse_curve_json;
