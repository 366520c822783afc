//! Core configuration for vizij-curve-core.

use serde::{Deserialize, Serialize};

/// Default number of interval-cache lanes allocated per curve.
pub const DEFAULT_MAX_LANES: usize = 64;

/// Configuration for curve construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Upper bound on concurrent evaluation contexts. One cache slot is
    /// allocated per lane; lane ids at or above this bound evaluate uncached.
    pub max_lanes: usize,
}

impl CurveConfig {
    pub fn with_max_lanes(max_lanes: usize) -> Self {
        Self { max_lanes }
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            max_lanes: DEFAULT_MAX_LANES,
        }
    }
}
