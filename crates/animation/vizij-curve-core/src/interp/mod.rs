//! Interpolation helpers.
//!
//! v1 carries only the cubic Hermite segment used by [`Curve`](crate::Curve),
//! plus its analytic derivative.

pub mod functions;

pub use functions::{hermite_basis, hermite_segment, hermite_segment_derivative, inverse_lerp};
